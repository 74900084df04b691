//! Persisted result of a generation run.

mod writer;

pub use writer::{REPORT_FILE_NAME, ReportError, RunReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BatchResult, GenerationOutcome};
    use std::time::Duration;
    use tempfile::TempDir;

    fn sample_batch(failed: usize) -> BatchResult {
        BatchResult {
            outcomes: vec![GenerationOutcome {
                local_path: "/out/2310.12345.mp3".to_string(),
                arxiv_id: "2310.12345".to_string(),
                channel_id: None,
            }],
            success: 1,
            failed,
            elapsed: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_from_batch() {
        let report = RunReport::from_batch(&sample_batch(0));

        assert_eq!(report.success, 1);
        assert_eq!(report.failed, 0);
        assert!((report.elapsed_time - 1.5).abs() < f64::EPSILON);
        assert_eq!(report.files.len(), 1);
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_any_failure_is_exit_one() {
        let report = RunReport::from_batch(&sample_batch(1));

        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_all_failed_report_is_still_written() {
        let temp_dir = TempDir::new().unwrap();
        let report = RunReport {
            success: 0,
            failed: 3,
            elapsed_time: 0.2,
            files: vec![],
        };

        let path = report.write(temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join(REPORT_FILE_NAME));
        assert_eq!(RunReport::load(&path).unwrap(), report);
    }

    #[test]
    fn test_report_json_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = RunReport::from_batch(&sample_batch(0))
            .write(temp_dir.path())
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(json["success"], 1);
        assert_eq!(json["failed"], 0);
        assert!(json["elapsed_time"].is_f64());
        assert_eq!(json["files"][0]["local_path"], "/out/2310.12345.mp3");
        assert_eq!(json["files"][0]["arxiv_id"], "2310.12345");
        assert!(json["files"][0]["channel_id"].is_null());
    }
}
