//! Shared fixtures for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Header used by the sample CSV fixtures.
pub const SAMPLE_HEADER: &str = "title,year,summary,methods,results,notes";

/// Writes a CSV with the given content under `dir` and returns its path.
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create csv fixture");
    file.write_all(content.as_bytes()).expect("write csv fixture");
    path
}

/// A three-paper CSV mirroring a real summary export.
pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let content = format!(
        "{SAMPLE_HEADER}\n\
         Trust in Autonomous Vehicles: A Survey,2023,This paper surveys trust in autonomous vehicles and human factors,We review studies on user trust,,\n\
         Autonomous Vehicle Safety Evaluation,2024,Evaluates safety and trust frameworks for autonomous driving,Implements evaluation metrics and experiments,Results highlight trust improvements,\n\
         Robotics Path Planning Advances,2019,Focuses on motion planning algorithms for robots,,,\n"
    );
    write_csv(dir, "papers.csv", &content)
}

/// A CSV with a valid header but no data rows.
pub fn write_empty_csv(dir: &Path) -> PathBuf {
    write_csv(dir, "empty.csv", &format!("{SAMPLE_HEADER}\n"))
}

/// A CSV holding a single paper row.
pub fn write_single_row_csv(dir: &Path) -> PathBuf {
    let content = format!(
        "{SAMPLE_HEADER}\n\
         Trust in Autonomous Vehicles: A Survey,2023,Surveys trust in autonomous vehicles,,,\n"
    );
    write_csv(dir, "single.csv", &content)
}
