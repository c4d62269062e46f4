//! Errors that carry a message, a numeric code, a captured call stack,
//! and an optional chained cause.
//!
//! [`ChainError`] is built once and never recomputed: the stack snapshot
//! is taken at construction time, inside [`new`](ChainError::new) /
//! [`wrap`](ChainError::wrap) and their code-carrying variants. Wrapping
//! preserves the full cause chain; rendering walks it.
//!
//! # Rendering
//!
//! The `Display` impl (also exposed as [`default_error`]) prints every
//! message in the chain, outermost first, followed by the stack captured
//! by the *innermost* chained error. One stack is enough to locate the
//! failure's origin; printing a stack per wrap point would drown logs in
//! near-identical frames.
//!
//! [`message_only`] is the compact form: just the messages, space-joined,
//! no stack.
//!
//! # Formatted construction
//!
//! The [`chain!`](crate::chain!) and [`wrap!`](crate::wrap!) macros accept
//! `format!`-style arguments and an optional leading `code = <i32>,`:
//!
//! ```
//! use satchel::{chain, wrap};
//!
//! let inner = chain!("row {} is malformed", 17);
//! let outer = wrap!(code = 422, inner, "import of {} failed", "users.csv");
//! assert_eq!(outer.code(), 422);
//! ```

use backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// Error code value meaning "unspecified".
///
/// Errors built without an explicit code report this from
/// [`ChainError::code`].
pub const DEFAULT_ERR_CODE: i32 = -1;

/// An error value with a message, code, captured stack, and optional cause.
///
/// Immutable after construction except for the code, which
/// [`set_code`](ChainError::set_code) may update post hoc. The cause is
/// owned and may be any `std::error::Error`; chain-aware walks treat
/// non-`ChainError` causes as terminals.
#[derive(Debug)]
pub struct ChainError {
    message: String,
    stack: String,
    context: String,
    code: i32,
    inner: Option<Box<dyn StdError + Send + Sync>>,
}

impl ChainError {
    /// New error with the given message and the current stack trace.
    pub fn new(message: impl Into<String>) -> Self {
        let (stack, context) = stack_trace();
        ChainError {
            message: message.into(),
            stack,
            context,
            code: DEFAULT_ERR_CODE,
            inner: None,
        }
    }

    /// New error with an explicit code, message, and the current stack
    /// trace.
    pub fn with_code(code: i32, message: impl Into<String>) -> Self {
        let mut e = ChainError::new(message);
        e.code = code;
        e
    }

    /// Wrap another error, recording `message` and the current stack
    /// trace in the new outer error.
    pub fn wrap(cause: impl StdError + Send + Sync + 'static, message: impl Into<String>) -> Self {
        let (stack, context) = stack_trace();
        ChainError {
            message: message.into(),
            stack,
            context,
            code: DEFAULT_ERR_CODE,
            inner: Some(Box::new(cause)),
        }
    }

    /// Wrap another error with an explicit code.
    pub fn wrap_with_code(
        code: i32,
        cause: impl StdError + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let mut e = ChainError::wrap(cause, message);
        e.code = code;
        e
    }

    /// The message of this node only, without the stack trace and without
    /// any chained causes.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack trace captured when this error was constructed.
    #[inline]
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// The trailing context of the captured stack: the unresolvable tail
    /// of the backtrace, past the last frame with a symbol name.
    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The error code, [`DEFAULT_ERR_CODE`] if never set.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Update the error code.
    pub fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    /// The wrapped cause, if this error wraps one.
    pub fn inner(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&default_error(self))
    }
}

impl StdError for ChainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner()
    }
}

/// Render the full chain: every message outermost-first under an `ERROR:`
/// header, then the innermost chained error's stack trace under an
/// `ORIGINAL STACK TRACE:` header.
///
/// A non-`ChainError` cause contributes its `Display` text and ends the
/// walk; the innermost *chained* node's stack is the one reported.
pub fn default_error(e: &ChainError) -> String {
    let mut lines = vec!["ERROR:".to_string()];
    let mut orig_stack = String::new();
    fill_error_info(e, &mut lines, &mut orig_stack);

    lines.push(String::new());
    lines.push("ORIGINAL STACK TRACE:".to_string());
    lines.push(orig_stack);

    lines.join("\n")
}

// Collects one message line per chain node and tracks the deepest
// ChainError's stack.
fn fill_error_info(err: &(dyn StdError + 'static), lines: &mut Vec<String>, orig_stack: &mut String) {
    match err.downcast_ref::<ChainError>() {
        Some(e) => {
            lines.push(e.message.clone());
            orig_stack.clone_from(&e.stack);
            if let Some(inner) = e.inner() {
                fill_error_info(inner, lines, orig_stack);
            }
        }
        None => lines.push(err.to_string()),
    }
}

/// All messages in the chain, outermost first, joined with single spaces.
///
/// Walks [`ChainError::inner`] links; a non-`ChainError` cause contributes
/// its `Display` text once and ends the walk. A value that is not a
/// `ChainError` at all yields its own `Display` text.
pub fn message_only(err: &(dyn StdError + 'static)) -> String {
    let Some(mut node) = err.downcast_ref::<ChainError>() else {
        return err.to_string();
    };

    let mut parts = Vec::new();
    loop {
        parts.push(node.message.clone());
        match node.inner() {
            None => break,
            Some(inner) => match inner.downcast_ref::<ChainError>() {
                Some(next) => node = next,
                None => {
                    parts.push(inner.to_string());
                    break;
                }
            },
        }
    }
    parts.join(" ")
}

/// Capture the current stack trace, split into the stack proper and its
/// trailing context.
///
/// Frames belonging to the capture machinery (this module and the
/// `backtrace` crate) are dropped by symbol name, then `skip` additional
/// caller frames are dropped. Each remaining frame with a resolvable
/// symbol renders as a name line plus a location line under a
/// `stack backtrace:` header; from the first unresolvable frame onward,
/// frames render as raw addresses and form the context string.
pub fn capture_stack(skip: usize) -> (String, String) {
    let bt = Backtrace::new();

    let mut stack = String::from("stack backtrace:");
    let mut context = String::new();
    let mut index = 0usize;
    let mut skipped = 0usize;
    let mut in_context = false;

    for frame in bt.frames() {
        let name = frame
            .symbols()
            .first()
            .and_then(|s| s.name())
            .map(|n| n.to_string());

        match name {
            Some(ref n) if !in_context => {
                if is_capture_machinery(n) {
                    continue;
                }
                if skipped < skip {
                    skipped += 1;
                    continue;
                }
                stack.push_str(&format!("\n{:4}: {}", index, n));
                if let Some(sym) = frame.symbols().first() {
                    if let (Some(file), Some(line)) = (sym.filename(), sym.lineno()) {
                        stack.push_str(&format!("\n             at {}:{}", file.display(), line));
                    }
                }
            }
            name => {
                // End of the resolvable stack; everything from here on is
                // trailing context.
                in_context = true;
                match name {
                    Some(n) => context.push_str(&format!("\n{:4}: {}", index, n)),
                    None => context.push_str(&format!(
                        "\n{:4}: <unresolved> ({:p})",
                        index,
                        frame.ip()
                    )),
                }
            }
        }
        index += 1;
    }

    (stack, context)
}

/// Capture the current stack trace with no extra caller frames skipped.
///
/// Machinery frames are already excluded by name inside [`capture_stack`],
/// so constructors call this directly without depth bookkeeping.
pub fn stack_trace() -> (String, String) {
    capture_stack(0)
}

// The capture call itself, this module's constructors, and the backtrace
// crate's internals never belong in a reported stack.
fn is_capture_machinery(symbol: &str) -> bool {
    symbol.starts_with("backtrace::") || symbol.contains("satchel::chain::")
}

/// Build a [`ChainError`] from `format!`-style arguments, with an optional
/// leading `code = <i32>,`.
#[macro_export]
macro_rules! chain {
    (code = $code:expr, $($arg:tt)*) => {
        $crate::chain::ChainError::with_code($code, format!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::chain::ChainError::new(format!($($arg)*))
    };
}

/// Wrap an error in a [`ChainError`] built from `format!`-style arguments,
/// with an optional leading `code = <i32>,`.
#[macro_export]
macro_rules! wrap {
    (code = $code:expr, $cause:expr, $($arg:tt)*) => {
        $crate::chain::ChainError::wrap_with_code($code, $cause, format!($($arg)*))
    };
    ($cause:expr, $($arg:tt)*) => {
        $crate::chain::ChainError::wrap($cause, format!($($arg)*))
    };
}
