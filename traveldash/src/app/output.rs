use std::path::Path;

use serde::Serialize;

use super::TravelDashError;

/// writes a report as pretty-printed JSON to a file, or to stdout when no
/// file is given.
pub fn write_json<T: Serialize>(
    value: &T,
    output_file: Option<&str>,
) -> Result<(), TravelDashError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TravelDashError::Serialization(e.to_string()))?;
    match output_file {
        None => {
            println!("{json}");
            Ok(())
        }
        Some(file) => {
            let path = Path::new(file);
            std::fs::write(path, json).map_err(|e| TravelDashError::WriteError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            log::info!("wrote report to '{}'", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_file() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("report.json");
        let file = path.to_str().expect("temp path is utf-8");
        write_json(&serde_json::json!({ "cost_dollars": 5.8 }), Some(file)).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        assert_eq!(value["cost_dollars"], 5.8);
    }

    #[test]
    fn test_write_json_to_missing_directory() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("missing").join("report.json");
        let file = path.to_str().expect("temp path is utf-8");
        let result = write_json(&1, Some(file));
        assert!(matches!(result, Err(TravelDashError::WriteError { .. })));
    }
}
