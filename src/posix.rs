//! Shell word splitting with GLib semantics.
//!
//! Models the quoting and escaping half of a `g_shell_parse_argv`-style
//! splitter: single quotes are fully literal, double quotes interpret a small
//! escape set, and an input that ends mid-escape or mid-quote is an error.
//! No variable or glob expansion is performed.

use thiserror::Error;

/// Errors that can occur when splitting a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The input ended immediately after an unresolved backslash.
    #[error("unfinished escape at end of input")]
    UnterminatedEscape,

    /// The input ended while a single- or double-quote region was open.
    #[error("unfinished quote at end of input")]
    UnterminatedQuote,
}

/// Scanner state for one `tokenize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any quote or escape.
    Normal,
    /// Inside `'...'`; everything is literal, including backslashes.
    SingleQuoted,
    /// Inside `"..."`; backslash escapes a small set of characters.
    DoubleQuoted,
    /// A backslash is pending; `in_double` records whether it was seen
    /// inside a double-quote region.
    Escaped { in_double: bool },
}

/// Whitespace as the splitter sees it: the ASCII space set including
/// vertical tab, which `char::is_ascii_whitespace` leaves out.
fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split a command line into words, respecting quotes and escapes.
///
/// Returns an error if the input ends with a pending escape or inside an
/// open quote region; no partial word list accompanies the error.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    let mut state = State::Normal;
    // Whether the current quote region opened on an empty buffer. A token
    // that is exactly one quoted region flushes as soon as its quote closes
    // at a word boundary, which is how "" yields an empty argument.
    let mut fresh = false;

    while let Some(c) = chars.next() {
        match state {
            State::Escaped { in_double: true } => {
                // Inside double quotes, backslash is only special before
                // one of: $ ` " \
                if !matches!(c, '$' | '`' | '"' | '\\') {
                    current.push('\\');
                }
                current.push(c);
                state = State::DoubleQuoted;
            }
            State::Escaped { in_double: false } => {
                // Escaped whitespace outside quotes vanishes entirely; it
                // neither separates words nor lands in the buffer.
                if !is_ascii_space(c) {
                    current.push(c);
                }
                state = State::Normal;
            }
            State::SingleQuoted | State::DoubleQuoted => {
                let quote = if state == State::SingleQuoted { '\'' } else { '"' };
                if c == quote {
                    state = State::Normal;
                    let at_boundary = chars.peek().is_none_or(|&next| is_ascii_space(next));
                    if fresh && at_boundary {
                        args.push(std::mem::take(&mut current));
                    }
                } else if c == '\\' && quote == '"' {
                    state = State::Escaped { in_double: true };
                } else {
                    current.push(c);
                }
            }
            State::Normal => {
                if is_ascii_space(c) {
                    if !current.is_empty() {
                        args.push(std::mem::take(&mut current));
                    }
                } else if c == '\\' {
                    state = State::Escaped { in_double: false };
                } else if c == '\'' || c == '"' {
                    fresh = current.is_empty();
                    state = if c == '\'' {
                        State::SingleQuoted
                    } else {
                        State::DoubleQuoted
                    };
                } else {
                    current.push(c);
                }
            }
        }
    }

    match state {
        State::Escaped { .. } => Err(TokenizeError::UnterminatedEscape),
        State::SingleQuoted | State::DoubleQuoted => Err(TokenizeError::UnterminatedQuote),
        State::Normal => {
            if !current.is_empty() {
                args.push(current);
            }
            Ok(args)
        }
    }
}
