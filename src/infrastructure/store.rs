//! Flat-file word store
//!
//! Words are kept in a single text file, each followed by a comma:
//! `apple,banana,cherry,`. Delimiters inside words are not escaped.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::infrastructure::traits::{FileSystem, WordStore};
use crate::infrastructure::{InfraError, InfraResult};

/// Separator between stored words.
pub const DELIMITER: char = ',';

/// Word store persisted as one comma-delimited file.
pub struct FileWordStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl std::fmt::Debug for FileWordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWordStore")
            .field("path", &self.path)
            .finish()
    }
}

impl FileWordStore {
    /// Open the store at `path`, creating the file and its directory if missing.
    ///
    /// Fails with `InfraError::StoreMissing` if the file can be neither found nor created.
    #[instrument(level = "debug", skip(fs))]
    pub fn open(fs: Arc<dyn FileSystem>, path: &Path) -> InfraResult<Self> {
        let missing = |source: io::Error| InfraError::StoreMissing {
            path: path.to_path_buf(),
            source,
        };

        if fs.exists(path) && !fs.is_file(path) {
            return Err(missing(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        if !fs.exists(path) {
            debug!("creating word store");
            fs.ensure_parent(path).map_err(missing)?;
            fs.touch(path).map_err(missing)?;
        }

        Ok(Self {
            fs,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStore for FileWordStore {
    fn append(&self, word: &str) -> io::Result<()> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(());
        }
        self.fs.append(&self.path, &format!("{word}{DELIMITER}"))
    }

    fn read_all(&self) -> io::Result<Vec<String>> {
        let content = self.fs.read_to_string(&self.path)?;
        Ok(parse_words(&content))
    }

    fn remove(&self, word: &str) -> io::Result<bool> {
        let mut words = self.read_all()?;
        let Some(index) = words.iter().position(|stored| stored == word) else {
            debug!(word, "not in store, file left untouched");
            return Ok(false);
        };
        words.remove(index);
        self.fs.write(&self.path, &format_words(&words))?;
        Ok(true)
    }
}

/// Split store content into words.
///
/// Lines are concatenated before splitting; segments are trimmed and empty
/// segments dropped, so missing or doubled delimiters are tolerated.
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .collect::<String>()
        .split(DELIMITER)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Serialize words in store format, each followed by the delimiter.
pub fn format_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|word| format!("{}{DELIMITER}", word.as_ref().trim()))
        .join("")
}
