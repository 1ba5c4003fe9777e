/// Dataset files — JSON documents an embedding application can hand to the
/// bar wholesale.
///
/// A dataset bundles a [`RenderConfig`] with an ordered segment list:
///
/// ```json
/// {
///   "name": "Mailbox storage",
///   "config": { "bar_height": 22.0 },
///   "segments": [
///     { "value": 40.0, "label": "Mail", "color": { "r": 137, "g": 180, "b": 250 } }
///   ]
/// }
/// ```
use crate::model::{RenderConfig, Segment};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A render configuration plus its ordered segment list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Display name for pickers; falls back to the file name when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub config: RenderConfig,
    pub segments: Vec<Segment>,
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&text)?;
    tracing::info!(
        "loaded dataset with {} segments from {}",
        dataset.segments.len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_dataset() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "storage.json",
            r#"{
                "name": "Mailbox storage",
                "config": { "bar_height": 18.0, "max_value": 100.0 },
                "segments": [
                    { "value": 40.0, "label": "Mail", "color": { "r": 137, "g": 180, "b": 250 } },
                    { "value": 25.0, "label": "Attachments" }
                ]
            }"#,
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.name.as_deref(), Some("Mailbox storage"));
        assert_eq!(dataset.config.bar_height, 18.0);
        assert_eq!(dataset.config.max_value, Some(100.0));
        assert_eq!(dataset.segments.len(), 2);
        assert_eq!(dataset.segments[0].color, Some(Rgb::new(137, 180, 250)));
        assert!(dataset.segments[1].color.is_none());
    }

    #[test]
    fn test_load_minimal_dataset_uses_config_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "min.json", r#"{ "segments": [ { "value": 1.0 } ] }"#);

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.config, RenderConfig::default());
        assert_eq!(dataset.segments.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_dataset(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "bad.json", "{ not json");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
