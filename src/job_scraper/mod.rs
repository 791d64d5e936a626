// src/job_scraper/mod.rs
//! Adzuna job-search client, dedup, and job-description page parsing.

use crate::environment::ServiceConfig;
use crate::matcher::keywords;
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A job posting as collected from the job-search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub created: Option<String>,
    pub source: String,
}

/// Search form values. Dropdown fields use "All" to mean unfiltered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub role: String,
    pub location: String,
    pub industry: String,
    pub job_type: String,
    pub salary_min: u32,
    pub salary_max: u32,
}

impl SearchCriteria {
    fn is_all(value: &str) -> bool {
        value.trim().is_empty() || value.trim().eq_ignore_ascii_case("all")
    }
}

// Adzuna wire format
#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    title: Option<String>,
    company: Option<AdzunaCompany>,
    location: Option<AdzunaLocation>,
    description: Option<String>,
    redirect_url: Option<String>,
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaCompany {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaLocation {
    display_name: Option<String>,
}

pub struct JobSearchClient {
    client: Client,
    app_id: String,
    app_key: String,
    base_url: String,
    country: String,
    results_per_page: u32,
}

impl JobSearchClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            app_id: config.adzuna_app_id.clone(),
            app_key: config.adzuna_app_key.clone(),
            base_url: config.api_base_url.clone(),
            country: config.adzuna_country.clone(),
            results_per_page: config.results_per_page,
        })
    }

    /// Fetch jobs matching the criteria, deduplicated. API failures degrade
    /// to an empty list with a logged warning.
    pub async fn search(&self, criteria: &SearchCriteria) -> Vec<JobPosting> {
        match self.fetch_jobs(criteria).await {
            Ok(jobs) => {
                let unique = deduplicate(jobs);
                info!("Job search returned {} unique postings", unique.len());
                unique
            }
            Err(e) => {
                warn!("Job search failed, returning no results: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_jobs(&self, criteria: &SearchCriteria) -> Result<Vec<JobPosting>> {
        let url = format!("{}/{}/search/1", self.base_url, self.country);
        let query = self.build_query(criteria);

        info!("Fetching jobs for role: {}", criteria.role);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to reach job search API")?;

        if !response.status().is_success() {
            anyhow::bail!("Job search API returned HTTP {}", response.status());
        }

        let body: AdzunaResponse = response
            .json()
            .await
            .context("Failed to parse job search API response")?;

        Ok(body
            .results
            .into_iter()
            .map(|job| to_posting(job, &criteria.location))
            .collect())
    }

    fn build_query(&self, criteria: &SearchCriteria) -> Vec<(String, String)> {
        let mut query = vec![
            ("app_id".to_string(), self.app_id.clone()),
            ("app_key".to_string(), self.app_key.clone()),
            (
                "results_per_page".to_string(),
                self.results_per_page.to_string(),
            ),
            ("what".to_string(), criteria.role.clone()),
        ];

        if !SearchCriteria::is_all(&criteria.location) {
            query.push(("where".to_string(), criteria.location.clone()));
        }

        if !SearchCriteria::is_all(&criteria.job_type) {
            let full_time = if criteria.job_type.eq_ignore_ascii_case("full-time") {
                "1"
            } else {
                "0"
            };
            query.push(("full_time".to_string(), full_time.to_string()));
        }

        if criteria.salary_min > 0 {
            query.push(("salary_min".to_string(), criteria.salary_min.to_string()));
        }
        if criteria.salary_max > 0 {
            query.push(("salary_max".to_string(), criteria.salary_max.to_string()));
        }

        query
    }

    /// Fetch the posting page behind an apply link and pull out the job
    /// description text. Prefers a dedicated description node, falls back to
    /// whole-page text.
    pub async fn fetch_full_description(&self, url: &str) -> Result<String> {
        info!("Fetching job description page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job description page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;
        let document = Html::parse_document(&html);

        let description = parse_description_node(&document)
            .unwrap_or_else(|| whole_page_text(&document));

        if description.trim().is_empty() {
            anyhow::bail!("Job description page contained no text");
        }

        Ok(description)
    }
}

fn to_posting(job: AdzunaJob, fallback_location: &str) -> JobPosting {
    JobPosting {
        title: job.title.unwrap_or_else(|| "Unknown".to_string()),
        company: job
            .company
            .and_then(|c| c.display_name)
            .unwrap_or_else(|| "Unknown".to_string()),
        location: job
            .location
            .and_then(|l| l.display_name)
            .unwrap_or_else(|| fallback_location.to_string()),
        description: job.description.unwrap_or_default(),
        apply_link: job.redirect_url.unwrap_or_default(),
        created: job.created,
        source: "Adzuna".to_string(),
    }
}

/// First-wins dedup on (lowercased title, lowercased company, link),
/// preserving input order.
pub fn deduplicate(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| {
            seen.insert((
                job.title.to_lowercase(),
                job.company.to_lowercase(),
                job.apply_link.clone(),
            ))
        })
        .collect()
}

fn parse_description_node(document: &Html) -> Option<String> {
    let node_selectors = ["div.job-description", "div#job-description"];
    let item_selector = Selector::parse("p, li").ok()?;

    for selector_str in node_selectors {
        let selector = Selector::parse(selector_str).ok()?;
        if let Some(node) = document.select(&selector).next() {
            let lines: Vec<String> = node
                .select(&item_selector)
                .map(|el| clean_fragment(&el.text().collect::<Vec<_>>().join(" ")))
                .filter(|line| !line.is_empty())
                .collect();
            if !lines.is_empty() {
                return Some(lines.join("\n"));
            }
        }
    }
    None
}

fn whole_page_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_fragment(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key requirement lines of a job description: lines of at least ten
/// characters containing a known keyword, deduplicated and bulleted.
pub fn extract_key_requirements(description: &str) -> Vec<String> {
    let known = keywords::all_keywords();
    let mut seen = HashSet::new();
    let mut requirements = Vec::new();

    for line in description.lines() {
        let clean_line = line.trim();
        if clean_line.len() < 10 {
            continue;
        }
        let lower_line = clean_line.to_lowercase();
        if known
            .iter()
            .any(|kw| keywords::contains_keyword(&lower_line, kw))
            && seen.insert(clean_line.to_string())
        {
            requirements.push(format!("• {}", clean_line));
        }
    }

    if requirements.is_empty() {
        requirements.push("• No key requirements extracted.".to_string());
    }
    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServiceConfig {
        ServiceConfig {
            adzuna_app_id: "id".to_string(),
            adzuna_app_key: "key".to_string(),
            adzuna_country: "au".to_string(),
            api_base_url: "https://api.adzuna.com/v1/api/jobs".to_string(),
            export_path: std::env::temp_dir(),
            timeout_seconds: 30,
            results_per_page: 20,
        }
    }

    fn posting(title: &str, company: &str, link: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            location: "Sydney".to_string(),
            description: String::new(),
            apply_link: link.to_string(),
            created: None,
            source: "Adzuna".to_string(),
        }
    }

    #[test]
    fn test_deduplicate_removes_title_company_link_repeats() {
        let jobs = vec![
            posting("Data Architect", "Acme", "https://a"),
            posting("data architect", "ACME", "https://a"),
            posting("Data Architect", "Acme", "https://b"),
        ];
        let unique = deduplicate(jobs);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].apply_link, "https://a");
        assert_eq!(unique[1].apply_link, "https://b");
    }

    #[test]
    fn test_build_query_omits_all_sentinels_and_zero_salaries() {
        let client = JobSearchClient::new(&config()).unwrap();
        let criteria = SearchCriteria {
            role: "Data Architect".to_string(),
            location: "All".to_string(),
            industry: "All".to_string(),
            job_type: "All".to_string(),
            salary_min: 0,
            salary_max: 0,
        };
        let query = client.build_query(&criteria);
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["app_id", "app_key", "results_per_page", "what"]);
    }

    #[test]
    fn test_build_query_with_filters() {
        let client = JobSearchClient::new(&config()).unwrap();
        let criteria = SearchCriteria {
            role: "Analyst".to_string(),
            location: "Melbourne".to_string(),
            industry: "Banking and Financial Services".to_string(),
            job_type: "Full-time".to_string(),
            salary_min: 80000,
            salary_max: 150000,
        };
        let query = client.build_query(&criteria);
        assert!(query.contains(&("where".to_string(), "Melbourne".to_string())));
        assert!(query.contains(&("full_time".to_string(), "1".to_string())));
        assert!(query.contains(&("salary_min".to_string(), "80000".to_string())));
        assert!(query.contains(&("salary_max".to_string(), "150000".to_string())));
    }

    #[test]
    fn test_parse_adzuna_response() {
        let body = r#"{
            "results": [{
                "title": "Data Engineer",
                "company": { "display_name": "Acme Analytics" },
                "location": { "display_name": "Sydney NSW" },
                "description": "Build data pipelines with Python and SQL",
                "redirect_url": "https://adzuna.example/redirect/1",
                "created": "2024-05-01T00:00:00Z"
            }, {
                "title": "Mystery Role"
            }]
        }"#;
        let parsed: AdzunaResponse = serde_json::from_str(body).unwrap();
        let jobs: Vec<JobPosting> = parsed
            .results
            .into_iter()
            .map(|j| to_posting(j, "Sydney"))
            .collect();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Data Engineer");
        assert_eq!(jobs[0].company, "Acme Analytics");
        assert_eq!(jobs[0].location, "Sydney NSW");
        assert_eq!(jobs[0].source, "Adzuna");
        // missing fields fall back
        assert_eq!(jobs[1].company, "Unknown");
        assert_eq!(jobs[1].location, "Sydney");
        assert_eq!(jobs[1].apply_link, "");
    }

    #[test]
    fn test_extract_key_requirements() {
        let description = "Intro line without hits here\n\
            Strong SQL and data modeling experience required\n\
            Strong SQL and data modeling experience required\n\
            short sql\n\
            Familiarity with stakeholder management practices";
        let reqs = extract_key_requirements(description);
        assert_eq!(
            reqs,
            vec![
                "• Strong SQL and data modeling experience required".to_string(),
                "• Familiarity with stakeholder management practices".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_key_requirements_fallback() {
        let reqs = extract_key_requirements("nothing relevant whatsoever in this line");
        assert_eq!(reqs, vec!["• No key requirements extracted.".to_string()]);
    }

    #[test]
    fn test_parse_description_node_prefers_dedicated_div() {
        let html = r#"<html><body>
            <div class="job-description">
                <p>Own the data platform.</p>
                <ul><li>5+ years with SQL</li><li></li></ul>
            </div>
            <div>footer noise</div>
        </body></html>"#;
        let document = Html::parse_document(html);
        let description = parse_description_node(&document).unwrap();
        assert_eq!(description, "Own the data platform.\n5+ years with SQL");
    }
}
