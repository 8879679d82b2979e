use crate::error::AppError;
use crate::task_list::TaskList;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = ".todo.json";
pub const STORE_PATH_ENV_VAR: &str = "TASKLIST_STORE_PATH";

/// The store lives as a hidden file in the working directory. The
/// environment override exists so tests can point each invocation at an
/// isolated file.
pub fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_PATH_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    PathBuf::from(STORE_FILE_NAME)
}

/// Hydrates the task list from disk. An absent file and a zero-byte file
/// both mean "no prior state" and yield an empty list; any other read
/// failure or a JSON decode failure is surfaced to the caller.
pub fn load(path: &Path) -> Result<TaskList, AppError> {
    if !path.exists() {
        return Ok(TaskList::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    if content.is_empty() {
        return Ok(TaskList::new());
    }

    serde_json::from_str(&content).map_err(|err| AppError::invalid_data(err.to_string()))
}

/// Replaces the file contents with the serialized list. Writes a sibling
/// temporary file and renames it over the target; a failed write leaves the
/// prior contents intact.
pub fn save(path: &Path, list: &TaskList) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(list).map_err(|err| AppError::invalid_data(err.to_string()))?;

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content).map_err(|err| AppError::io(err.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|err| AppError::io(err.to_string()))?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(STORE_FILE_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::{STORE_FILE_NAME, load, save, store_path};
    use crate::model::Task;
    use crate::task_list::TaskList;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
    }

    fn sample_list() -> TaskList {
        let json = serde_json::json!([
            {
                "task": "buy milk",
                "done": false,
                "created_at": "2026-08-28T10:00:00.123456789Z",
                "completed_at": null
            },
            {
                "task": "water plants",
                "done": true,
                "created_at": "2026-08-27T09:15:30.5Z",
                "completed_at": "2026-08-28T08:00:01.000000042Z"
            }
        ]);
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let path = temp_path("round-trip.json");
        let list = sample_list();

        save(&path, &list).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, list);
        let tasks: Vec<&Task> = loaded.iter().collect();
        assert_eq!(tasks[0].description, "buy milk");
        assert_eq!(tasks[0].created_at, "2026-08-28T10:00:00.123456789Z");
        assert_eq!(tasks[1].description, "water plants");
        assert_eq!(
            tasks[1].completed_at.as_deref(),
            Some("2026-08-28T08:00:01.000000042Z")
        );
    }

    #[test]
    fn load_missing_path_yields_empty_list() {
        let path = temp_path("missing.json");

        let loaded = load(&path).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn load_zero_byte_file_yields_empty_list() {
        let path = temp_path("zero-byte.json");
        fs::write(&path, "").unwrap();

        let loaded = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(loaded.is_empty());
    }

    #[test]
    fn load_malformed_json_is_an_error() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ not json ").unwrap();

        let err = load(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "invalid_data");
    }

    #[test]
    fn save_replaces_prior_contents() {
        let path = temp_path("replace.json");
        save(&path, &sample_list()).unwrap();

        let mut shorter = TaskList::new();
        shorter.add("only one").unwrap();
        save(&path, &shorter).unwrap();

        let loaded = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.iter().next().unwrap().description, "only one");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = temp_path("nested-dir");
        let path = dir.join("store.json");

        save(&path, &sample_list()).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn save_leaves_no_temporary_file_behind() {
        let path = temp_path("no-tmp.json");

        save(&path, &sample_list()).unwrap();
        let tmp = path.with_file_name(format!(
            "{}.tmp",
            path.file_name().unwrap().to_string_lossy()
        ));
        let tmp_exists = tmp.exists();
        fs::remove_file(&path).ok();

        assert!(!tmp_exists);
    }

    #[test]
    fn default_store_path_is_hidden_file_in_working_directory() {
        // Only meaningful when the override variable is not set, which is
        // the case for unit test runs.
        if std::env::var(super::STORE_PATH_ENV_VAR).is_err() {
            assert_eq!(store_path(), PathBuf::from(STORE_FILE_NAME));
        }
    }
}
