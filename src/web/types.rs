// src/web/types.rs
use crate::matcher::Gap;
use crate::resume::ResumeProfile;
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};

/// The search form posted from the web page: one résumé file plus the
/// search criteria fields.
#[derive(FromForm)]
pub struct SearchForm<'f> {
    pub resume: TempFile<'f>,
    pub role: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
}

/// One matched job as rendered in the results table.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchSummary {
    pub title: String,
    pub company: String,
    pub location: String,
    pub score: f32,
    pub apply_link: String,
    pub published: Option<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<Gap>,
    pub key_requirements: Vec<String>,
    pub cover_letter: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ExportInfo {
    pub token: String,
    pub xlsx_file: String,
    pub csv_file: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub profile: Option<ResumeProfile>,
    pub matches: Vec<MatchSummary>,
    pub export: Option<ExportInfo>,
}

impl SearchResponse {
    /// A warning outcome: the session shows a message and no results.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            profile: None,
            matches: Vec::new(),
            export: None,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// A downloadable spreadsheet body with its content type and filename.
pub struct SpreadsheetResponse {
    pub data: Vec<u8>,
    pub content_type: ContentType,
    pub filename: String,
}

impl SpreadsheetResponse {
    pub fn xlsx(data: Vec<u8>, filename: String) -> Self {
        Self {
            data,
            content_type: ContentType::new(
                "application",
                "vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            filename,
        }
    }

    pub fn csv(data: Vec<u8>, filename: String) -> Self {
        Self {
            data,
            content_type: ContentType::new("text", "csv"),
            filename,
        }
    }
}

impl<'r> Responder<'r, 'static> for SpreadsheetResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(self.content_type)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}
