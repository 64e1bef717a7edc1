use job_scraper::{Crawler, JobListing, SiteConfig};

use crate::Cli;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

async fn collect_jobs(crawler: &Crawler, keep_going: bool) -> Result<Vec<JobListing>> {
    if !keep_going {
        return Ok(crawler.crawl().await?);
    }
    let results = crawler.crawl_each().await?;
    let total = results.len();
    let jobs = results
        .into_iter()
        .filter_map(|(link, job)| match job {
            Ok(job) => Some(job),
            Err(e) => {
                log::error!("failed to scrape listing {}: {}", link, e);
                None
            }
        })
        .collect::<Vec<_>>();
    if jobs.len() < total {
        log::warn!("skipped {} of {} listings", total - jobs.len(), total);
    }
    Ok(jobs)
}

pub async fn scrape(args: Cli) -> Result<()> {
    let config = SiteConfig::new(args.base_url, args.keyword);
    log::info!(
        "scraping '{}' from {}",
        config.keyword,
        config.base_url
    );
    let crawler = Crawler::new(config);
    let jobs = collect_jobs(&crawler, args.keep_going).await?;
    persistence::save_jobs(&args.output, &jobs, args.format.into())?;
    Ok(())
}
