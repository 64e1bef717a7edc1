use std::fs::File;
use std::io::Write;
use std::path::Path;

use job_scraper::JobListing;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Csv error: '{0}'")]
    Csv(#[from] csv::Error),
    #[error("Json error: '{0}'")]
    Json(#[from] serde_json::Error),
    #[error("File error: '{0}'")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

/// One table row, absent values become empty cells
/// and lists use their debug rendering, e.g. `["Kyiv", "Remote"]`.
fn to_record(job: &JobListing) -> [String; 5] {
    [
        job.title().unwrap_or_default().to_owned(),
        job.company().unwrap_or_default().to_owned(),
        job.salary().map(|s| s.to_string()).unwrap_or_default(),
        job.technologies()
            .map(|t| format!("{:?}", t))
            .unwrap_or_default(),
        format!("{:?}", job.location()),
    ]
}

pub fn write_csv<W: Write>(writer: W, jobs: &[JobListing]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(JobListing::FIELDS)?;
    for job in jobs {
        writer.write_record(to_record(job))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: W, jobs: &[JobListing]) -> Result<()> {
    serde_json::to_writer_pretty(writer, jobs)?;
    Ok(())
}

/// Writes all jobs to `path`, replacing whatever was there.
pub fn save_jobs(path: impl AsRef<Path>, jobs: &[JobListing], format: Format) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    match format {
        Format::Csv => write_csv(file, jobs)?,
        Format::Json => write_json(file, jobs)?,
    }
    log::info!("saved {} jobs to {}", jobs.len(), path.display());
    Ok(())
}
