pub mod djinni;
pub mod fetch;
pub mod salary;
pub mod types;

pub use djinni::crawler::Crawler;
pub use djinni::SiteConfig;
pub use types::{Error, Result};

use serde::{Deserialize, Serialize};

/// A single scraped job posting.
/// Field order is also the column order of the exported table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    title: Option<String>,
    company: Option<String>,
    salary: Option<u32>,
    technologies: Option<Vec<String>>,
    location: Vec<String>,
}

impl JobListing {
    pub const FIELDS: [&'static str; 5] = ["title", "company", "salary", "technologies", "location"];

    pub fn new(
        title: Option<String>,
        company: Option<String>,
        salary: Option<u32>,
        technologies: Option<Vec<String>>,
        location: Vec<String>,
    ) -> Self {
        // an empty technology list is stored as absent
        let technologies = technologies.filter(|t| !t.is_empty());
        Self {
            title,
            company,
            salary,
            technologies,
            location,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn salary(&self) -> Option<u32> {
        self.salary
    }

    pub fn technologies(&self) -> Option<&[String]> {
        self.technologies.as_deref()
    }

    pub fn location(&self) -> &[String] {
        &self.location
    }
}
