// src/web/handlers.rs
//! Request handlers. Failures surface as success=false payloads with a
//! user-facing message; nothing here returns a 5xx for a bad search.

use crate::environment::ServiceConfig;
use crate::exporter::{self, JobMatchRow};
use crate::job_scraper::{self, JobSearchClient, SearchCriteria};
use crate::web::types::{
    ErrorResponse, ExportInfo, MatchSummary, SearchForm, SearchResponse, SpreadsheetResponse,
};
use crate::{cover_letter, matcher, resume, utils};
use rocket::form::Form;
use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};
use uuid::Uuid;

// Adzuna truncates descriptions; anything shorter gets the posting page fetch.
const SHORT_DESCRIPTION_LEN: usize = 120;

pub async fn search_handler(
    mut form: Form<SearchForm<'_>>,
    config: &State<ServiceConfig>,
    client: &State<JobSearchClient>,
) -> Json<SearchResponse> {
    let role = form.role.trim().to_string();
    if role.is_empty() {
        return Json(SearchResponse::warning(
            "Please enter the target role to proceed.",
        ));
    }

    let file_name = form
        .resume
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or("resume.txt")
        .to_string();

    if let Err(e) = utils::validate_file_extension(&file_name, resume::SUPPORTED_EXTENSIONS) {
        return Json(SearchResponse::warning(e.to_string()));
    }

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", Uuid::new_v4()));
    if let Err(e) = form.resume.persist_to(&temp_path).await {
        warn!("Failed to save uploaded résumé: {}", e);
        return Json(SearchResponse::warning(
            "Failed to process the uploaded résumé. Please try again.",
        ));
    }

    let resume_text = match resume::extract_text(&temp_path, &file_name).await {
        Ok(text) => text,
        Err(e) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Json(SearchResponse::warning(e.to_string()));
        }
    };
    let _ = tokio::fs::remove_file(&temp_path).await;

    if resume_text.trim().is_empty() {
        return Json(SearchResponse::warning(
            "Could not read any text from the uploaded résumé.",
        ));
    }

    let criteria = SearchCriteria {
        role,
        location: form.location.clone().unwrap_or_else(|| "All".to_string()),
        industry: form.industry.clone().unwrap_or_else(|| "All".to_string()),
        job_type: form.job_type.clone().unwrap_or_else(|| "All".to_string()),
        salary_min: form.salary_min.unwrap_or(0),
        salary_max: form.salary_max.unwrap_or(0),
    };

    info!(
        "Running job search: role={}, location={}",
        criteria.role, criteria.location
    );

    let mut jobs = client.search(&criteria).await;
    if jobs.is_empty() {
        return Json(SearchResponse::warning(
            "No jobs found. Please refine your criteria.",
        ));
    }

    // Enrich postings whose API description was truncated or missing.
    for job in &mut jobs {
        if job.description.trim().len() < SHORT_DESCRIPTION_LEN && !job.apply_link.is_empty() {
            match client.fetch_full_description(&job.apply_link).await {
                Ok(full) => job.description = full,
                Err(e) => warn!("Description fetch failed for {}: {}", job.apply_link, e),
            }
        }
    }

    let matched = matcher::match_resume_to_jobs(&resume_text, jobs);
    if matched.is_empty() {
        return Json(SearchResponse::warning(
            "No jobs matched your résumé closely enough. Try a different role or location.",
        ));
    }

    let profile = resume::parse_profile(&resume_text);

    let mut summaries = Vec::with_capacity(matched.len());
    let mut rows = Vec::with_capacity(matched.len());
    for m in &matched {
        let letter = cover_letter::generate(&resume_text, m);
        summaries.push(MatchSummary {
            title: m.job.title.clone(),
            company: m.job.company.clone(),
            location: m.job.location.clone(),
            score: m.score,
            apply_link: m.job.apply_link.clone(),
            published: m.job.created.clone(),
            strengths: m.strengths.clone(),
            gaps: m.gaps.clone(),
            key_requirements: job_scraper::extract_key_requirements(&m.job.description),
            cover_letter: letter.clone(),
        });
        rows.push(JobMatchRow {
            title: m.job.title.clone(),
            company: m.job.company.clone(),
            location: m.job.location.clone(),
            score: m.score,
            apply_link: m.job.apply_link.clone(),
            published: m.job.created.clone(),
            cover_letter: letter,
        });
    }

    let export = write_exports(config, &rows).await;

    Json(SearchResponse {
        success: true,
        message: format!("Found {} matching jobs.", summaries.len()),
        profile: Some(profile),
        matches: summaries,
        export,
    })
}

/// Write both spreadsheet formats under a fresh token. Export failure is a
/// warning, not a failed search.
async fn write_exports(config: &ServiceConfig, rows: &[JobMatchRow]) -> Option<ExportInfo> {
    let token = Uuid::new_v4().to_string();

    let xlsx = match exporter::to_xlsx(rows) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("xlsx export failed: {}", e);
            return None;
        }
    };
    let csv = match exporter::to_csv(rows) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("csv export failed: {}", e);
            return None;
        }
    };

    if let Err(e) = utils::ensure_dir_exists(&config.export_path).await {
        warn!("Export directory unavailable: {}", e);
        return None;
    }

    let xlsx_path = config.export_path.join(format!("{}.xlsx", token));
    let csv_path = config.export_path.join(format!("{}.csv", token));

    if let Err(e) = tokio::fs::write(&xlsx_path, &xlsx).await {
        warn!("Failed to store {}: {}", xlsx_path.display(), e);
        return None;
    }
    if let Err(e) = tokio::fs::write(&csv_path, &csv).await {
        warn!("Failed to store {}: {}", csv_path.display(), e);
        return None;
    }

    info!("Stored export {} ({} rows)", token, rows.len());

    Some(ExportInfo {
        token: token.clone(),
        xlsx_file: format!("{}.xlsx", token),
        csv_file: format!("{}.csv", token),
    })
}

pub async fn export_handler(
    file: &str,
    config: &State<ServiceConfig>,
) -> Result<SpreadsheetResponse, NotFound<Json<ErrorResponse>>> {
    let (token, extension) = match file.rsplit_once('.') {
        Some(parts) => parts,
        None => {
            return Err(NotFound(Json(ErrorResponse::new(
                "Export file name must end in .xlsx or .csv",
            ))))
        }
    };

    // The token must be a UUID we issued; this also rules out path tricks.
    if Uuid::parse_str(token).is_err() {
        return Err(NotFound(Json(ErrorResponse::new("Unknown export token"))));
    }

    if extension != "xlsx" && extension != "csv" {
        return Err(NotFound(Json(ErrorResponse::new(
            "Only .xlsx and .csv exports are available",
        ))));
    }

    let path = config.export_path.join(format!("{}.{}", token, extension));
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(_) => {
            return Err(NotFound(Json(ErrorResponse::new(
                "Export not found. Run a search first.",
            ))))
        }
    };

    let filename = format!("JobMatches.{}", extension);
    let response = if extension == "xlsx" {
        SpreadsheetResponse::xlsx(data, filename)
    } else {
        SpreadsheetResponse::csv(data, filename)
    };
    Ok(response)
}

pub fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "jobintel",
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
