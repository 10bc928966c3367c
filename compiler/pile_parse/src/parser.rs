//! Recursive-descent parser over the token list.
//!
//! The grammar is tiny: a program is a sequence of expressions, and the only
//! compound forms are quotes, arrays, objects and word definitions. Nesting
//! is bounded by [`MAX_NESTING`] so hostile input cannot exhaust memory.

use pile_ir::{Expr, LineIndex};
use pile_stack::{ensure_sufficient_stack, RecursionBudget};
use tracing::trace;

use crate::lexer::{lex, Token, TokenKind};
use crate::{ParseError, ParseErrorKind};

/// Maximum nesting of brackets and word definitions.
pub const MAX_NESTING: usize = 1024;

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    cursor: usize,
    index: LineIndex<'src>,
    budget: RecursionBudget,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            source,
            tokens: lex(source),
            cursor: 0,
            index: LineIndex::new(source),
            budget: RecursionBudget::new(Some(MAX_NESTING)),
        }
    }

    /// Parse the whole source as a program.
    pub fn parse_program(mut self) -> Result<Vec<Expr>, ParseError> {
        trace!(tokens = self.tokens.len(), "parsing program");
        let mut program = Vec::new();
        while let Some(token) = self.next_token() {
            program.push(self.parse_expr(token)?);
        }
        Ok(program)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn error(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError {
            kind,
            offset,
            position: self.index.position(offset),
        }
    }

    fn eof(&self, missing: &'static str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedEof(missing), self.source.len())
    }

    fn parse_expr(&mut self, token: Token) -> Result<Expr, ParseError> {
        let start = token.span.start;
        match token.kind {
            TokenKind::Symbol => Ok(Expr::Symbol {
                id: self.source[token.span].to_string(),
                position: self.index.position(start),
            }),
            TokenKind::String => self.string_literal(&token).map(Expr::String),
            TokenKind::LParen => self
                .nested(start, |p| p.parse_sequence(&TokenKind::RParen, ")"))
                .map(Expr::Quote),
            TokenKind::LBracket => self.nested(start, Self::parse_array).map(Expr::Array),
            TokenKind::LBrace => self.nested(start, Self::parse_object).map(Expr::Object),
            TokenKind::Colon => self.nested(start, |p| p.parse_word(start)),
            TokenKind::Error => {
                if self.source[start..].starts_with('"') {
                    Err(self.error(ParseErrorKind::UnterminatedString, start))
                } else {
                    Err(self.error(ParseErrorKind::UnexpectedToken(token.kind.describe()), start))
                }
            }
            other => Err(self.error(ParseErrorKind::UnexpectedToken(other.describe()), start)),
        }
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        offset: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Err(exceeded) = self.budget.enter() {
            return Err(self.error(ParseErrorKind::NestingTooDeep(exceeded.limit), offset));
        }
        let result = ensure_sufficient_stack(|| f(self));
        self.budget.exit();
        result
    }

    /// Expressions up to (and consuming) `close`.
    fn parse_sequence(
        &mut self,
        close: &TokenKind,
        missing: &'static str,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();
        loop {
            match self.next_token() {
                None => return Err(self.eof(missing)),
                Some(token) if token.kind == *close => return Ok(exprs),
                Some(token) => exprs.push(self.parse_expr(token)?),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut elements = Vec::new();
        loop {
            match self.next_token() {
                None => return Err(self.eof("]")),
                Some(token) => match token.kind {
                    TokenKind::RBracket => return Ok(elements),
                    TokenKind::Comma => {}
                    _ => elements.push(self.parse_expr(token)?),
                },
            }
        }
    }

    fn parse_object(&mut self) -> Result<Vec<(String, Expr)>, ParseError> {
        let mut properties = Vec::new();
        loop {
            let Some(token) = self.next_token() else {
                return Err(self.eof("}"));
            };
            match token.kind {
                TokenKind::RBrace => return Ok(properties),
                TokenKind::Comma => {}
                TokenKind::String => {
                    let key = self.string_literal(&token)?;
                    match self.next_token() {
                        Some(Token {
                            kind: TokenKind::Colon,
                            ..
                        }) => {}
                        Some(other) => {
                            return Err(self.error(ParseErrorKind::MissingColon, other.span.start))
                        }
                        None => return Err(self.eof(":")),
                    }
                    let Some(value) = self.next_token() else {
                        return Err(self.eof("}"));
                    };
                    properties.push((key, self.parse_expr(value)?));
                }
                other => {
                    return Err(self.error(
                        ParseErrorKind::InvalidObjectKey(other.describe()),
                        token.span.start,
                    ))
                }
            }
        }
    }

    fn parse_word(&mut self, colon: usize) -> Result<Expr, ParseError> {
        let name = match self.next_token() {
            Some(token) if token.kind == TokenKind::Symbol => token,
            Some(token) => return Err(self.error(ParseErrorKind::MissingWordName, token.span.start)),
            None => return Err(self.error(ParseErrorKind::MissingWordName, colon)),
        };
        let body = self.parse_sequence(&TokenKind::Semicolon, ";")?;
        Ok(Expr::Word {
            name: self.source[name.span.clone()].to_string(),
            position: self.index.position(name.span.start),
            body,
        })
    }

    /// Resolve the escapes of a string token.
    fn string_literal(&self, token: &Token) -> Result<String, ParseError> {
        let content_start = token.span.start + 1;
        let content = &self.source[content_start..token.span.end - 1];
        let mut result = String::with_capacity(content.len());
        let mut chars = content.char_indices();

        while let Some((_, c)) = chars.next() {
            if c != '\\' {
                result.push(c);
                continue;
            }
            let Some((at, escape)) = chars.next() else {
                return Err(self.error(ParseErrorKind::InvalidEscape, token.span.end - 1));
            };
            let invalid = || self.error(ParseErrorKind::InvalidEscape, content_start + at - 1);
            match escape {
                '"' => result.push('"'),
                '\\' => result.push('\\'),
                '/' => result.push('/'),
                'b' => result.push('\u{8}'),
                'f' => result.push('\u{c}'),
                'n' => result.push('\n'),
                'r' => result.push('\r'),
                't' => result.push('\t'),
                'u' => {
                    let high = read_hex4(&mut chars).ok_or_else(invalid)?;
                    let code = if (0xD800..0xDC00).contains(&high) {
                        // Surrogate pair: the low half must follow immediately.
                        let low = match (chars.next(), chars.next()) {
                            (Some((_, '\\')), Some((_, 'u'))) => {
                                read_hex4(&mut chars).ok_or_else(invalid)?
                            }
                            _ => return Err(invalid()),
                        };
                        if !(0xDC00..0xE000).contains(&low) {
                            return Err(invalid());
                        }
                        0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                    } else {
                        high
                    };
                    result.push(char::from_u32(code).ok_or_else(invalid)?);
                }
                _ => return Err(invalid()),
            }
        }

        Ok(result)
    }
}

fn read_hex4(chars: &mut std::str::CharIndices<'_>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        let (_, c) = chars.next()?;
        value = value * 16 + c.to_digit(16)?;
    }
    Some(value)
}
