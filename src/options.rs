//! Options for controlled container reading and writing.
//!
//! The two option records are intentionally asymmetric in their defaults:
//! reading includes comments, writing skips them. Most automated round trips
//! only care about values, so persisting comments is an explicit opt-in.

/// Read behavior options for [`crate::store::read_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Whether record comments are surfaced on the entries.
    pub include_comments: bool,
}

impl Default for ReadOptions {
    /// Reading includes comments unless the caller opts out.
    fn default() -> Self {
        ReadOptions {
            include_comments: true,
        }
    }
}

impl ReadOptions {
    /// Creates default read options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables comment inclusion.
    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }
}

/// Write behavior options for [`crate::store::write_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Whether non-empty entry comments are persisted to the container.
    pub include_comments: bool,
}

impl Default for WriteOptions {
    /// Writing skips comments unless the caller opts in.
    fn default() -> Self {
        WriteOptions {
            include_comments: false,
        }
    }
}

impl WriteOptions {
    /// Creates default write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables comment inclusion.
    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }
}
