//! Path helpers

use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Absolute form of `path` for display, relative paths joined onto the cwd.
pub fn absolute_display(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unknown_variable_when_expanding_then_input_unchanged() {
        assert_eq!(
            expand_env_vars("$WORDTREE_SURELY_UNSET_VAR/words.txt"),
            "$WORDTREE_SURELY_UNSET_VAR/words.txt"
        );
    }

    #[test]
    fn given_absolute_path_when_displaying_then_unchanged() {
        assert_eq!(absolute_display(Path::new("/a/b")), PathBuf::from("/a/b"));
    }
}
