use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::query::{first_text_node, next_sibling_element, select_one, text_of};
use super::SiteConfig;
use crate::salary::normalize_salary;
use crate::types::{Error, Result};
use crate::JobListing;

lazy_static! {
    static ref TITLE: Selector = Selector::parse(".detail--title-wrapper > h1").unwrap();
    static ref COMPANY: Selector = Selector::parse(".job-details--title").unwrap();
    static ref SALARY: Selector = Selector::parse(".public-salary-item").unwrap();
    static ref LIST_ITEM: Selector = Selector::parse("li").unwrap();
    static ref SPAN: Selector = Selector::parse("span").unwrap();
    static ref LOCATION: Selector = Selector::parse("span.location-text").unwrap();
}

/// Builds a [`JobListing`] from the html of a job detail page.
pub fn extract_listing(html: &str, config: &SiteConfig) -> Result<JobListing> {
    let doc = Html::parse_document(html);

    let title = select_one(&doc, &TITLE)
        .and_then(first_text_node)
        .map(|t| t.trim().to_owned());

    let company = select_one(&doc, &COMPANY).map(text_of);

    let salary = select_one(&doc, &SALARY)
        .map(|el| normalize_salary(&el.text().collect::<String>()))
        .transpose()?;

    let technologies = extract_technologies(&doc, &config.category_marker);
    let location = extract_location(&doc)?;

    Ok(JobListing::new(
        title,
        company,
        salary,
        Some(technologies),
        location,
    ))
}

/// Tags listed in the row following the category label.
/// The first span repeats the category itself and is dropped.
fn extract_technologies(doc: &Html, marker: &str) -> Vec<String> {
    doc.select(&LIST_ITEM)
        .filter(|li| li.text().collect::<String>().contains(marker))
        .filter_map(next_sibling_element)
        .filter(|sibling| sibling.value().name() == "li")
        .flat_map(|sibling| sibling.select(&SPAN))
        .map(text_of)
        .skip(1)
        .collect()
}

fn extract_location(doc: &Html) -> Result<Vec<String>> {
    let location = select_one(doc, &LOCATION)
        .and_then(first_text_node)
        .ok_or(Error::ContentNotFound("location"))?;
    Ok(location.split(',').map(|s| s.trim().to_owned()).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    const DETAIL_PAGE: &str = r#"
        <html><body>
          <div class="detail--title-wrapper">
            <h1>
              Senior Python Engineer
              <span class="badge">new</span>
            </h1>
          </div>
          <a class="job-details--title" href="/company/acme/"> Acme Corp </a>
          <div class="public-salary-item">$4,000 - $5,000</div>
          <ul class="job-additional-info">
            <li>Категорія:</li>
            <li>
              <span>Python</span>
              <span>Django</span>
              <span>FastAPI</span>
            </li>
          </ul>
          <span class="location-text">Kyiv, Lviv<span class="remote">Remote</span></span>
        </body></html>
    "#;

    fn extract(html: &str) -> Result<JobListing> {
        extract_listing(html, &SiteConfig::default())
    }

    #[test]
    fn test_extract_full_listing() {
        let job = extract(DETAIL_PAGE).expect("Failed to extract listing");
        assert_eq!(job.title(), Some("Senior Python Engineer"));
        assert_eq!(job.company(), Some("Acme Corp"));
        assert_eq!(job.salary(), Some(4500));
        assert_eq!(
            job.technologies(),
            Some(&["Django".to_owned(), "FastAPI".to_owned()][..])
        );
        assert_eq!(job.location(), ["Kyiv".to_owned(), "Lviv".to_owned()]);
    }

    #[test]
    fn test_first_technology_entry_is_dropped() {
        let html = r#"
            <ul>
              <li>Категорія:</li>
              <li><span>Category Label</span> <span>Python</span> <span>Django</span></li>
            </ul>
            <span class="location-text">Kyiv</span>
        "#;
        let job = extract(html).unwrap();
        assert_eq!(
            job.technologies(),
            Some(&["Python".to_owned(), "Django".to_owned()][..])
        );
    }

    #[test]
    fn test_only_label_means_no_technologies() {
        let html = r#"
            <ul>
              <li>Категорія:</li>
              <li><span>Category Label</span></li>
            </ul>
            <span class="location-text">Kyiv</span>
        "#;
        let job = extract(html).unwrap();
        assert_eq!(job.technologies(), None);
    }

    #[test]
    fn test_custom_category_marker() {
        let html = r#"
            <ul>
              <li>Category:</li>
              <li><span>Backend</span><span>Rust</span></li>
            </ul>
            <span class="location-text">Berlin</span>
        "#;
        let mut config = SiteConfig::default();
        config.category_marker = "Category:".to_owned();
        let job = extract_listing(html, &config).unwrap();
        assert_eq!(job.technologies(), Some(&["Rust".to_owned()][..]));
    }

    #[test]
    fn test_missing_salary_is_none() {
        let html = r#"
            <div class="detail--title-wrapper"><h1>Data Engineer</h1></div>
            <span class="location-text">Odesa</span>
        "#;
        let job = extract(html).unwrap();
        assert_eq!(job.salary(), None);
        assert_eq!(job.title(), Some("Data Engineer"));
        assert_eq!(job.company(), None);
        assert_eq!(job.technologies(), None);
    }

    #[test]
    fn test_unparseable_salary_fails() {
        let html = r#"
            <div class="public-salary-item">negotiable</div>
            <span class="location-text">Odesa</span>
        "#;
        assert!(matches!(extract(html), Err(Error::SalaryFormat(_))));
    }

    #[test]
    fn test_location_ignores_nested_badge() {
        let html = r#"<span class="location-text">Kyiv, Remote<span class="badge">Full Remote</span></span>"#;
        let job = extract(html).unwrap();
        assert_eq!(job.location(), ["Kyiv".to_owned(), "Remote".to_owned()]);
    }

    #[test]
    fn test_missing_location_fails() {
        let html = r#"<div class="detail--title-wrapper"><h1>Data Engineer</h1></div>"#;
        assert!(matches!(
            extract(html),
            Err(Error::ContentNotFound("location"))
        ));
    }
}
