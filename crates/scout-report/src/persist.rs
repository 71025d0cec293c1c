//! Report persistence: one pretty-printed JSON file per run.

use std::fs;
use std::path::{Path, PathBuf};

use scout_core::ScoutReport;

use crate::error::ReportError;

/// Writes the report to `data_dir/scout_report_{timestamp}.json` and returns
/// the path. Creates `data_dir` if it does not exist.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on filesystem failure and
/// [`ReportError::Json`] if the report cannot be serialized.
pub fn save_report(report: &ScoutReport, data_dir: &Path) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(data_dir).map_err(|source| ReportError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let filename = format!(
        "scout_report_{}.json",
        report.generated_at.format("%Y%m%d_%H%M%S")
    );
    let path = data_dir.join(filename);

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use scout_core::ReportSummary;

    use super::*;

    fn empty_report() -> ScoutReport {
        ScoutReport {
            generated_at: Utc::now(),
            summary: ReportSummary {
                trends_analyzed: 0,
                ideas_generated: 0,
                ideas_validated: 0,
                promising_ideas: 0,
            },
            trends: Vec::new(),
            ideas: Vec::new(),
            analyses: Vec::new(),
            validations: Vec::new(),
            top_recommendations: Vec::new(),
        }
    }

    #[test]
    fn saves_report_with_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let report = empty_report();

        let path = save_report(&report, dir.path()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("scout_report_"));
        assert!(name.ends_with(".json"));

        let contents = fs::read_to_string(&path).unwrap();
        let back: ScoutReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(back.summary, report.summary);
    }

    #[test]
    fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("reports");

        let path = save_report(&empty_report(), &nested).unwrap();
        assert!(path.exists());
    }
}
