// src/resume/mod.rs
//! Résumé text extraction and categorized profile parsing.

use crate::matcher::keywords;
use crate::utils::get_file_extension;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

const MAX_SENTENCES_PER_CATEGORY: usize = 15;

/// Skill sentences lifted from the résumé, bucketed by keyword category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub applicant_name: String,
    pub functional: Vec<String>,
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

/// Extract raw text from an uploaded résumé file. The extension picks the
/// extractor; an unreadable file degrades to empty text with a warning.
pub async fn extract_text(path: &Path, file_name: &str) -> Result<String> {
    let ext = get_file_extension(file_name)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", file_name))?;

    let text = match ext.as_str() {
        "pdf" => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read upload: {}", path.display()))?;
            extract_pdf(&bytes)
        }
        "docx" => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read upload: {}", path.display()))?;
            extract_docx(&bytes)
        }
        "txt" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read upload: {}", path.display())),
        other => anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            other,
            SUPPORTED_EXTENSIONS
        ),
    };

    match text {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("Could not extract text from {}: {}", file_name, e);
            Ok(String::new())
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("Failed to extract text from PDF")
}

/// DOCX is a zip container; the document body lives in word/document.xml.
/// Paragraph ends become newlines, then the `<w:t>` runs are collected.
fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("Failed to open DOCX container")?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("DOCX container has no word/document.xml")?
        .read_to_string(&mut document_xml)
        .context("Failed to read word/document.xml")?;

    static RUN_RE: OnceLock<Regex> = OnceLock::new();
    let run_re = RUN_RE
        .get_or_init(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").expect("Invalid w:t regex"));

    let with_breaks = document_xml.replace("</w:p>", "</w:p>\n");
    let mut lines = Vec::new();
    for line in with_breaks.lines() {
        let text: String = run_re
            .captures_iter(line)
            .map(|cap| unescape_xml(&cap[1]))
            .collect::<Vec<_>>()
            .join("");
        let trimmed = text.trim().to_string();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }
    Ok(lines.join("\n"))
}

fn unescape_xml(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

/// First of the leading ten non-empty lines that carries no digit, email,
/// url, or contact marker; "Unknown" when none qualifies.
pub fn extract_applicant_name(resume_text: &str) -> String {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    let marker_re = MARKER_RE.get_or_init(|| {
        Regex::new(r"(?i)\d|@|http|linkedin|address|phone|email").expect("Invalid marker regex")
    });

    resume_text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(10)
        .find(|line| !marker_re.is_match(line))
        .map(|line| line.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Parse the résumé into its categorized skill profile.
pub fn parse_profile(resume_text: &str) -> ResumeProfile {
    let sentences = split_into_sentences(resume_text);

    ResumeProfile {
        applicant_name: extract_applicant_name(resume_text),
        functional: format_as_bullets(find_skill_sentences(&sentences, keywords::FUNCTIONAL)),
        technical: format_as_bullets(find_skill_sentences(&sentences, keywords::TECHNICAL)),
        soft: format_as_bullets(find_skill_sentences(&sentences, keywords::SOFT_SKILLS)),
        education: format_as_bullets(find_skill_sentences(&sentences, keywords::EDUCATION)),
        certifications: format_as_bullets(find_skill_sentences(
            &sentences,
            keywords::CERTIFICATIONS,
        )),
    }
}

/// Split on sentence punctuation and line breaks.
fn split_into_sentences(text: &str) -> Vec<String> {
    static SPLIT_RE: OnceLock<Regex> = OnceLock::new();
    let split_re =
        SPLIT_RE.get_or_init(|| Regex::new(r"(?m)(?:[.!?]\s+)|\n+").expect("Invalid split regex"));

    split_re
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn find_skill_sentences(sentences: &[String], category: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for keyword in category {
        let key_lower = keyword.to_lowercase();
        for sentence in sentences {
            if keywords::contains_keyword(&sentence.to_lowercase(), &key_lower)
                && seen.insert(sentence.clone())
            {
                found.push(sentence.clone());
                if found.len() >= MAX_SENTENCES_PER_CATEGORY {
                    return found;
                }
            }
        }
    }
    found
}

fn format_as_bullets(sentences: Vec<String>) -> Vec<String> {
    if sentences.is_empty() {
        return vec!["• Not Found".to_string()];
    }
    sentences
        .into_iter()
        .map(|s| format!("• {}", s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    const RESUME: &str = "Jane Citizen\n\
        jane@example.com | 0400 000 000\n\
        Senior analyst with python and sql across banking platforms.\n\
        Led stakeholder management for a data governance program.\n\
        MBA, University of Somewhere.\n\
        AWS certified solutions architect.";

    #[test]
    fn test_extract_applicant_name_skips_contact_lines() {
        assert_eq!(extract_applicant_name(RESUME), "Jane Citizen");
        assert_eq!(
            extract_applicant_name("jane@example.com\n0400 000 000"),
            "Unknown"
        );
        assert_eq!(extract_applicant_name(""), "Unknown");
    }

    #[test]
    fn test_parse_profile_buckets_sentences() {
        let profile = parse_profile(RESUME);
        assert_eq!(profile.applicant_name, "Jane Citizen");
        assert!(profile
            .technical
            .iter()
            .any(|s| s.contains("python and sql")));
        assert!(profile
            .functional
            .iter()
            .any(|s| s.contains("data governance")));
        assert!(profile.education.iter().any(|s| s.contains("MBA")));
        assert!(profile
            .certifications
            .iter()
            .any(|s| s.contains("AWS certified")));
    }

    #[test]
    fn test_parse_profile_marks_empty_categories() {
        let profile = parse_profile("Nothing relevant here at all");
        assert_eq!(profile.functional, vec!["• Not Found".to_string()]);
        assert_eq!(profile.certifications, vec!["• Not Found".to_string()]);
    }

    #[test]
    fn test_bullets_are_prefixed() {
        let bullets = format_as_bullets(vec!["Did a thing".to_string()]);
        assert_eq!(bullets, vec!["• Did a thing".to_string()]);
    }

    #[test]
    fn test_extract_docx_reads_paragraph_runs() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer
                .write_all(
                    br#"<w:document><w:body>
                        <w:p><w:r><w:t>Jane Citizen</w:t></w:r></w:p>
                        <w:p><w:r><w:t xml:space="preserve">Python &amp; SQL</w:t></w:r></w:p>
                    </w:body></w:document>"#,
                )
                .unwrap();
            writer.finish().unwrap();
        }
        let text = extract_docx(buf.get_ref()).unwrap();
        assert!(text.contains("Jane Citizen"));
        assert!(text.contains("Python & SQL"));
    }

    #[test]
    fn test_extract_docx_rejects_non_zip() {
        assert!(extract_docx(b"not a zip at all").is_err());
    }
}
