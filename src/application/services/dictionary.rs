//! Dictionary service
//!
//! Couples the in-memory word tree with the persistent word store: the
//! dictionary is bulk-loaded once from the store, after which every live
//! insert and delete is mirrored to it.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::AvlTree;
use crate::infrastructure::traits::WordStore;

/// Result of a live insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New word, appended to the store
    Inserted,
    /// Word already present, nothing changed
    Duplicate,
}

/// Result of a live delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Word removed from the tree
    Deleted,
    /// Word was not in the tree
    NotFound,
}

/// Word dictionary backed by a balanced tree and a word store.
pub struct Dictionary {
    tree: AvlTree,
    store: Arc<dyn WordStore>,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.tree.len())
            .field("height", &self.tree.height())
            .finish()
    }
}

impl Dictionary {
    /// Bulk-load every stored word without writing anything back.
    ///
    /// Duplicate entries in the store collapse into a single tree node.
    #[instrument(level = "debug", skip(store))]
    pub fn load(store: Arc<dyn WordStore>) -> ApplicationResult<Self> {
        let words = store
            .read_all()
            .map_err(|source| ApplicationError::StoreRead { source })?;
        let stored = words.len();

        let tree: AvlTree = words.iter().collect();
        info!(stored, distinct = tree.len(), height = tree.height(), "loaded dictionary");
        if stored != tree.len() {
            debug!("store holds {} duplicate entries", stored - tree.len());
        }

        Ok(Self { tree, store })
    }

    /// Insert a word, appending it to the store if it is new.
    ///
    /// On a store failure the word stays in the tree and the error is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, word: &str) -> ApplicationResult<InsertOutcome> {
        if !self.tree.insert(word) {
            debug!("duplicate word, store untouched");
            return Ok(InsertOutcome::Duplicate);
        }
        self.store.append(word).with_word_context("append", word)?;
        Ok(InsertOutcome::Inserted)
    }

    /// Delete a word from the tree and remove one occurrence from the store.
    ///
    /// The store is asked to remove the word even if the tree did not hold it.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, word: &str) -> ApplicationResult<DeleteOutcome> {
        let outcome = if self.tree.remove(word) {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        };

        let rewritten = self.store.remove(word).with_word_context("remove", word)?;
        if outcome == DeleteOutcome::Deleted && !rewritten {
            warn!(word, "word was in memory but missing from the store");
        }
        Ok(outcome)
    }

    /// Words starting with `prefix`, case-insensitive, ascending.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.tree.prefix_search(prefix)
    }

    /// All words, ascending.
    pub fn words(&self) -> Vec<String> {
        self.tree.in_order()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn tree(&self) -> &AvlTree {
        &self.tree
    }
}
