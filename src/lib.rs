//! cmdline-split - platform-faithful command-line splitting.
//!
//! Two independent splitters that each reproduce a real parser's behavior:
//! [`windows`] follows the MSVC runtime's argv rules, [`posix`] follows
//! GLib-style shell word splitting. Both are pure functions over the input
//! string, so a command-line builder can be checked against the parser its
//! output will actually meet.

pub mod posix;
pub mod windows;

pub use posix::TokenizeError;
