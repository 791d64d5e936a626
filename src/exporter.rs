// src/exporter.rs
//! In-memory spreadsheet serialization of match results.

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};

pub const EXPORT_COLUMNS: [&str; 7] = [
    "Job Title",
    "Company",
    "Location",
    "Score",
    "Apply Link",
    "Published",
    "Cover Letter",
];

/// One spreadsheet row: a matched job plus its generated cover letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchRow {
    pub title: String,
    pub company: String,
    pub location: String,
    pub score: f32,
    pub apply_link: String,
    pub published: Option<String>,
    pub cover_letter: String,
}

/// Serialize rows to an xlsx workbook held in memory.
pub fn to_xlsx(rows: &[JobMatchRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .context("Failed to write header row")?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.title)
            .and_then(|ws| ws.write_string(r, 1, &row.company))
            .and_then(|ws| ws.write_string(r, 2, &row.location))
            .and_then(|ws| ws.write_number(r, 3, row.score as f64))
            .and_then(|ws| ws.write_string(r, 4, &row.apply_link))
            .and_then(|ws| ws.write_string(r, 5, row.published.as_deref().unwrap_or("")))
            .and_then(|ws| ws.write_string(r, 6, &row.cover_letter))
            .context("Failed to write result row")?;
    }

    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

/// Serialize rows to CSV bytes with the same column layout.
pub fn to_csv(rows: &[JobMatchRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPORT_COLUMNS)
        .context("Failed to write CSV header")?;

    for row in rows {
        writer
            .write_record([
                row.title.as_str(),
                row.company.as_str(),
                row.location.as_str(),
                &row.score.to_string(),
                row.apply_link.as_str(),
                row.published.as_deref().unwrap_or(""),
                row.cover_letter.as_str(),
            ])
            .context("Failed to write CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV writer: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<JobMatchRow> {
        vec![JobMatchRow {
            title: "Data Architect".to_string(),
            company: "Acme".to_string(),
            location: "Sydney".to_string(),
            score: 87.5,
            apply_link: "https://example.com/apply".to_string(),
            published: Some("2024-05-01T00:00:00Z".to_string()),
            cover_letter: "Dear Acme,\nline two".to_string(),
        }]
    }

    #[test]
    fn test_to_csv_round_trips_header_and_rows() {
        let bytes = to_csv(&rows()).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), EXPORT_COLUMNS.len());
        assert_eq!(&headers[0], "Job Title");

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "Acme");
        assert_eq!(&records[0][3], "87.5");
        assert_eq!(&records[0][6], "Dear Acme,\nline two");
    }

    #[test]
    fn test_to_xlsx_produces_a_zip_container() {
        let bytes = to_xlsx(&rows()).unwrap();
        // xlsx is a zip archive; check the magic header
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_rows_still_export_headers() {
        let bytes = to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Job Title,Company,Location,Score"));
    }
}
