// src/matcher/scoring.rs
//! Text normalization and the ATS similarity score.
//!
//! The score is the cosine similarity of bag-of-words count vectors,
//! scaled to 0-100 and rounded to one decimal.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use strsim::normalized_levenshtein;

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("Invalid word regex"))
}

fn stop_words() -> &'static HashSet<&'static str> {
    static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        [
            "the", "and", "for", "with", "in", "of", "to", "a", "on", "as", "is", "an", "be",
            "this", "that", "are", "was", "will", "have", "has", "from", "you", "your", "our",
            "their", "they",
        ]
        .into_iter()
        .collect()
    })
}

/// Lowercase, trim, and collapse whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize into lowercased words of two or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    word_regex()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct keywords of a text: stop words removed, longer than three
/// characters, capped at twenty.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in tokenize(text) {
        if token.len() <= 3 || stop_words().contains(token.as_str()) {
            continue;
        }
        if seen.insert(token.clone()) {
            keywords.push(token);
            if keywords.len() >= 20 {
                break;
            }
        }
    }
    keywords
}

fn count_vector(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

fn cosine(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(word, count)| b.get(word).map(|other| count * other))
        .sum();
    let norm_a: f64 = a.values().map(|c| c * c).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|c| c * c).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// ATS scores for a résumé against a batch of job descriptions.
pub fn ats_scores(resume_text: &str, job_descriptions: &[&str]) -> Vec<f32> {
    let resume_tokens = tokenize(&clean_text(resume_text));
    let resume_vec = count_vector(&resume_tokens);

    job_descriptions
        .iter()
        .map(|desc| {
            let job_tokens = tokenize(&clean_text(desc));
            let job_vec = count_vector(&job_tokens);
            let score = cosine(&resume_vec, &job_vec) * 100.0;
            ((score * 10.0).round() / 10.0) as f32
        })
        .collect()
}

/// ATS score for a single résumé/job pair.
pub fn ats_score(resume_text: &str, job_description: &str) -> f32 {
    ats_scores(resume_text, &[job_description])[0]
}

/// Whole-text similarity ratio of the cleaned texts, scaled to 0-100.
///
/// Edit-distance based, so it rewards shared phrasing rather than shared
/// vocabulary; [`ats_score`] is the order-insensitive counterpart.
pub fn similarity_score(resume_text: &str, job_description: &str) -> u8 {
    let resume = clean_text(resume_text);
    let job = clean_text(job_description);
    if resume.is_empty() || job.is_empty() {
        return 0;
    }
    (normalized_levenshtein(&resume, &job) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Data\n\tArchitect  role "), "data architect role");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_identical_texts_score_100() {
        let text = "Senior data engineer with SQL, Python and Spark experience";
        assert_eq!(ats_score(text, text), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_0() {
        assert_eq!(ats_score("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn test_empty_input_scores_0() {
        assert_eq!(ats_score("", "some job description"), 0.0);
        assert_eq!(ats_score("some resume", ""), 0.0);
    }

    #[test]
    fn test_similarity_score_bounds() {
        let text = "Senior   Data Engineer with SQL";
        // whitespace and case differences disappear after cleaning
        assert_eq!(similarity_score(text, "senior data engineer with sql"), 100);
        assert_eq!(similarity_score("", "some job description"), 0);
        assert_eq!(similarity_score("some resume", ""), 0);

        let partial = similarity_score("senior data engineer", "junior data engineer");
        assert!(partial > 0 && partial < 100);
    }

    #[test]
    fn test_batch_scores_align_with_inputs() {
        let resume = "python sql spark";
        let scores = ats_scores(resume, &["python sql spark", "unrelated text here"]);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], 100.0);
        assert!(scores[1] < scores[0]);
    }

    #[test]
    fn test_extract_keywords_filters_and_caps() {
        let keywords = extract_keywords("the quick data architect and the data platform team");
        assert!(keywords.contains(&"data".to_string()));
        assert!(keywords.contains(&"architect".to_string()));
        // stop words and short words removed
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
        // distinct
        assert_eq!(
            keywords.iter().filter(|k| k.as_str() == "data").count(),
            1
        );

        let long_text = (0..50)
            .map(|i| format!("keyword{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&long_text).len(), 20);
    }
}
