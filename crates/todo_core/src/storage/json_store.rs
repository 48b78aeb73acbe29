use crate::error::StoreError;
use crate::list::TaskList;
use crate::model::Task;
use std::path::Path;

/// Reads the whole persisted list. A missing file and an empty (or
/// whitespace-only) file both mean an empty list, not an error.
pub fn load_tasks(path: &Path) -> Result<TaskList, StoreError> {
    if !path.exists() {
        return Ok(TaskList::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| StoreError::io(err.to_string()))?;
    if content.trim().is_empty() {
        return Ok(TaskList::new());
    }

    let tasks: Vec<Task> =
        serde_json::from_str(&content).map_err(|err| StoreError::parse(err.to_string()))?;
    Ok(TaskList::from_tasks(tasks))
}

/// Serializes the full list and replaces whatever the file held
/// before. No incremental update: last save wins wholesale.
pub fn save_tasks(path: &Path, list: &TaskList) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| StoreError::io(err.to_string()))?;
    }

    let content = serde_json::to_string_pretty(list.tasks())
        .map_err(|err| StoreError::parse(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| StoreError::io(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{load_tasks, save_tasks};
    use crate::list::TaskList;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("todo-{nanos}-{file_name}"))
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("round-trip.json");
        let mut list = TaskList::new();
        list.add("buy milk");
        list.add("walk dog");
        list.complete(1).unwrap();

        save_tasks(&path, &list).unwrap();
        let loaded = load_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, list);
    }

    #[test]
    fn load_missing_file_yields_empty_list() {
        let path = temp_path("missing.json");

        let loaded = load_tasks(&path).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn load_empty_file_yields_empty_list() {
        let path = temp_path("empty.json");
        fs::write(&path, "").unwrap();

        let loaded = load_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(loaded.is_empty());
    }

    #[test]
    fn load_whitespace_only_file_yields_empty_list() {
        let path = temp_path("blank.json");
        fs::write(&path, "  \n\t\n").unwrap();

        let loaded = load_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(loaded.is_empty());
    }

    #[test]
    fn load_rejects_malformed_content() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ not a task list ").unwrap();

        let err = load_tasks(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "parse_error");
    }

    #[test]
    fn load_ignores_unknown_fields() {
        let path = temp_path("extra-fields.json");
        let content = "[\n  {\n    \"description\": \"demo\",\n    \"done\": false,\n    \"created_at\": \"2025-12-20T00:00:00Z\",\n    \"priority\": \"high\"\n  }\n]";
        fs::write(&path, content).unwrap();

        let loaded = load_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.tasks()[0].description, "demo");
        assert_eq!(loaded.tasks()[0].completed_at, None);
    }

    #[test]
    fn save_replaces_previous_content() {
        let path = temp_path("overwrite.json");
        let mut first = TaskList::new();
        first.add("old task");
        save_tasks(&path, &first).unwrap();

        let mut second = TaskList::new();
        second.add("new task");
        save_tasks(&path, &second).unwrap();

        let loaded = load_tasks(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.tasks()[0].description, "new task");
    }

    #[test]
    fn save_to_invalid_path_reports_io_error() {
        let path = temp_path("not-a-dir.json");
        fs::write(&path, "x").unwrap();
        let nested = path.join("child.json");

        let err = save_tasks(&nested, &TaskList::new()).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "io_error");
    }
}
