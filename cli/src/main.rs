mod scrape;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::djinni::{DEFAULT_BASE_URL, DEFAULT_KEYWORD};
use url::Url;

/// Scrape job listings for a keyword and dump them into a table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Primary keyword of the job search
    #[arg(long, env = "JOBS_KEYWORD", default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// Root of the job board, index and listing links are resolved against it
    #[arg(long, env = "JOBS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// File the scraped jobs are written to
    #[arg(long, env = "JOBS_OUTPUT", default_value = "jobs.csv")]
    output: PathBuf,

    #[arg(long, env = "JOBS_FORMAT", value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Skip listings that fail to scrape instead of aborting the whole run
    #[arg(long)]
    keep_going: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for persistence::Format {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => persistence::Format::Csv,
            Format::Json => persistence::Format::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = scrape::scrape(args).await {
        log::error!("scrape failed: {}", e);
        return Err(e);
    }
    Ok(())
}
