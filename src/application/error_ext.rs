//! Error conversion helpers for word store operations
//!
//! Provides an extension trait that attaches the affected word to store I/O errors.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add word context to a failed store write.
    ///
    /// # Example
    /// ```ignore
    /// store.append(word).with_word_context("append", word)?;
    /// ```
    fn with_word_context(self, action: &'static str, word: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_word_context(self, action: &'static str, word: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::StoreWrite {
            word: word.to_string(),
            action,
            source,
        })
    }
}
