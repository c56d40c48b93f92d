//! Compilation options.

/// Options controlling how a path is turned into a regular expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Escape regex metacharacters in literal path text. Off by default, so
    /// a literal `.` matches any character.
    pub escape_literals: bool,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn escape_literals(mut self, escape: bool) -> Self {
        self.escape_literals = escape;
        self
    }

    pub(crate) fn literal(&self, text: &str) -> String {
        if self.escape_literals {
            regex_lite::escape(text)
        } else {
            text.to_string()
        }
    }
}
