//! Output sink for `print`, `println` and `emit`.
//!
//! Output can go to stdout (the default), into a buffer for tests and
//! embedders, or nowhere.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

pub enum PrintHandler {
    /// Writes to stdout.
    Stdout,
    /// Captures output.
    Buffer(Mutex<String>),
    /// Discards output.
    Silent,
}

impl PrintHandler {
    /// Write `text` without a trailing newline.
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                // Output errors (closed pipe) are not script errors.
                let _ = stdout.write_all(text.as_bytes());
                let _ = stdout.flush();
            }
            Self::Buffer(buffer) => buffer.lock().push_str(text),
            Self::Silent => {}
        }
    }

    /// Write `text` followed by a newline.
    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Forget captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Print handler shared between a runtime and its host.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
