use std::path::PathBuf;

const STORE_FILE_NAME: &str = "todo.json";
const STORE_ENV_VAR: &str = "TODO_FILENAME";

/// Resolves the store path once at startup: a non-blank
/// `TODO_FILENAME` wins, otherwise `todo.json` in the working
/// directory. Callers pass the result into load/save explicitly.
pub fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    PathBuf::from(STORE_FILE_NAME)
}
