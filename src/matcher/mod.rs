// src/matcher/mod.rs
//! Résumé-to-job matching: ATS scoring, strengths and gap summarization.

pub mod keywords;
pub mod scoring;

use crate::job_scraper::JobPosting;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strsim::jaro_winkler;
use tracing::debug;

/// Jobs below this ATS score are not reported.
pub const MIN_MATCH_SCORE: f32 = 50.0;

const MAX_STRENGTHS: usize = 3;
const MAX_GAPS: usize = 10;
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// A job keyword the résumé does not cover, with the closest résumé token
/// when one is reasonably similar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gap {
    pub keyword: String,
    pub suggestion: Option<String>,
}

/// A job posting with its derived match fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    pub job: JobPosting,
    pub score: f32,
    pub strengths: Vec<String>,
    pub gaps: Vec<Gap>,
}

/// Score every job against the résumé, keep those at or above
/// [`MIN_MATCH_SCORE`], and sort by score descending.
pub fn match_resume_to_jobs(resume_text: &str, jobs: Vec<JobPosting>) -> Vec<MatchedJob> {
    if resume_text.trim().is_empty() || jobs.is_empty() {
        return Vec::new();
    }

    let descriptions: Vec<&str> = jobs.iter().map(|j| j.description.as_str()).collect();
    let scores = scoring::ats_scores(resume_text, &descriptions);

    let resume_tokens: HashSet<String> =
        scoring::tokenize(&scoring::clean_text(resume_text)).into_iter().collect();

    let mut matched: Vec<MatchedJob> = jobs
        .into_iter()
        .zip(scores)
        .filter(|(_, score)| *score >= MIN_MATCH_SCORE)
        .map(|(job, score)| {
            let job_keywords = scoring::extract_keywords(&job.description);
            let strengths = find_strengths(resume_text, &job_keywords);
            let gaps = find_gaps(&resume_tokens, &job_keywords);
            MatchedJob {
                job,
                score,
                strengths,
                gaps,
            }
        })
        .collect();

    matched.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!("Matched {} jobs above threshold", matched.len());
    matched
}

/// Résumé lines that mention any job-description keyword, top three.
fn find_strengths(resume_text: &str, job_keywords: &[String]) -> Vec<String> {
    let mut strengths = Vec::new();
    for line in resume_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if job_keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
            strengths.push(trimmed.to_string());
            if strengths.len() >= MAX_STRENGTHS {
                break;
            }
        }
    }
    strengths
}

/// Job keywords absent from the résumé. Each gap carries the closest résumé
/// token as a suggestion when the similarity clears the threshold.
fn find_gaps(resume_tokens: &HashSet<String>, job_keywords: &[String]) -> Vec<Gap> {
    job_keywords
        .iter()
        .filter(|kw| !resume_tokens.contains(kw.as_str()))
        .take(MAX_GAPS)
        .map(|kw| {
            let suggestion = resume_tokens
                .iter()
                .map(|token| (token, jaro_winkler(kw, token)))
                .filter(|(_, sim)| *sim >= SUGGESTION_THRESHOLD)
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(token, _)| token.clone());
            Gap {
                keyword: kw.clone(),
                suggestion,
            }
        })
        .collect()
}
