use crate::errors::AppError;
use crate::models::{StudyLog, StudyRecord};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("STUDY_LOG_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/study_log.csv"))
}

/// A missing file is the normal first-run state, not an error.
pub async fn load_log(path: &Path) -> StudyLog {
    match fs::read(path).await {
        Ok(bytes) => match parse_records(&bytes) {
            Ok(records) => StudyLog::new(records),
            Err(err) => {
                error!("failed to parse study log: {err}");
                StudyLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StudyLog::default(),
        Err(err) => {
            error!("failed to read study log: {err}");
            StudyLog::default()
        }
    }
}

fn parse_records(bytes: &[u8]) -> Result<Vec<StudyRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader.deserialize().collect()
}

pub async fn persist_log(path: &Path, log: &StudyLog) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in log.records() {
        writer.serialize(record)?;
    }
    let payload = writer
        .into_inner()
        .map_err(|err| AppError::internal(err.into_error()))?;
    fs::write(path, payload).await?;
    Ok(())
}
