//! Lexer for Pile using logos.
//!
//! Whitespace and `#` comments are skipped. Everything that is not a bracket,
//! a separator or a string literal is a symbol, including numbers, so the
//! token set stays small.

use logos::Logos;
use std::ops::Range;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r#"[^ \t\r\n\f()\[\]{}",:;#]+"#)]
    Symbol,
}

/// Token kinds seen by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    /// Raw string literal including the surrounding quotes; escapes are
    /// resolved by the parser so it can report their position.
    String,
    Symbol,
    /// Text logos could not match, in practice an unterminated string.
    Error,
}

impl TokenKind {
    /// How the token is spelled in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Error => "invalid input",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Lex all tokens from the source.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(raw) => convert(raw),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token {
            kind,
            span: lexer.span(),
        });
    }

    tokens
}

fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::String => TokenKind::String,
        // Comments are skipped by logos and never reach here.
        RawToken::Symbol | RawToken::Comment => TokenKind::Symbol,
    }
}
