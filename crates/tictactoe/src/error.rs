//! Source location attached to errors.

use derive_more::Display;

/// File and line where an error was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}:{}", file, line)]
pub struct ErrorLocation {
    /// Source file where error occurred.
    pub file: &'static str,
    /// Line number where error occurred.
    pub line: u32,
}

impl ErrorLocation {
    /// Captures the location of the caller.
    ///
    /// Chains through `#[track_caller]` functions, so calling this from an
    /// error constructor records the constructor's call site.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}
