// src/cover_letter.rs
//! Templated cover-letter generation.

use crate::matcher::MatchedJob;

/// Candidate display name for the letter signature: the first line of 2-4
/// words that are all capitalized, falling back to a placeholder.
pub fn candidate_display_name(resume_text: &str) -> String {
    for line in resume_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if (2..=4).contains(&words.len())
            && words
                .iter()
                .all(|w| w.chars().next().map_or(false, |c| c.is_uppercase()))
        {
            return trimmed.to_string();
        }
    }
    "Your Name".to_string()
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Fill the letter template for one matched job. Strengths come from the
/// match; a placeholder bullet stands in when none were found.
pub fn generate(resume_text: &str, matched: &MatchedJob) -> String {
    let job_title = or_placeholder(&matched.job.title, "the position");
    let company = or_placeholder(&matched.job.company, "your organization");
    let location = or_placeholder(&matched.job.location, "your location");
    let candidate_name = candidate_display_name(resume_text);

    let strengths_formatted = if matched.strengths.is_empty() {
        "- [Your key strengths here]".to_string()
    } else {
        matched
            .strengths
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Dear {company},\n\n\
        I am writing to express my strong interest in the {job_title} role based in {location}. \
        With proven experience aligned to your key requirements, I am confident in my ability to \
        contribute effectively to your team from day one.\n\n\
        Top reasons I am a strong fit for this role:\n\n\
        {strengths_formatted}\n\n\
        I am particularly drawn to {company} because of its innovation, leadership, and values \
        that align with my own. I bring a track record of delivering impactful results and \
        driving business value through data-driven solutions and cross-functional collaboration.\n\n\
        I would welcome the opportunity to contribute my expertise and energy to your \
        organization. Thank you for considering my application.\n\n\
        Warm regards,\n\
        {candidate_name}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_scraper::JobPosting;

    fn matched(title: &str, company: &str, strengths: Vec<String>) -> MatchedJob {
        MatchedJob {
            job: JobPosting {
                title: title.to_string(),
                company: company.to_string(),
                location: "Sydney".to_string(),
                description: "desc".to_string(),
                apply_link: "https://example.com".to_string(),
                created: None,
                source: "Adzuna".to_string(),
            },
            score: 75.0,
            strengths,
            gaps: Vec::new(),
        }
    }

    #[test]
    fn test_generate_fills_template() {
        let resume = "Jane Citizen\nSenior analyst";
        let letter = generate(
            resume,
            &matched(
                "Data Architect",
                "Acme",
                vec!["Led a data platform rebuild".to_string()],
            ),
        );
        assert!(letter.contains("Dear Acme,"));
        assert!(letter.contains("Data Architect role based in Sydney"));
        assert!(letter.contains("- Led a data platform rebuild"));
        assert!(letter.ends_with("Warm regards,\nJane Citizen\n"));
    }

    #[test]
    fn test_generate_uses_placeholders_for_blank_fields() {
        let letter = generate("no name line here", &matched("", "", Vec::new()));
        assert!(letter.contains("Dear your organization,"));
        assert!(letter.contains("the position role"));
        assert!(letter.contains("- [Your key strengths here]"));
        assert!(letter.contains("Your Name"));
    }

    #[test]
    fn test_candidate_display_name_rules() {
        assert_eq!(candidate_display_name("Jane Citizen\nmore"), "Jane Citizen");
        assert_eq!(
            candidate_display_name("jane citizen lowercase\nOther Line Here"),
            "Other Line Here"
        );
        assert_eq!(candidate_display_name(""), "Your Name");
        // five words is too long for a name line
        assert_eq!(
            candidate_display_name("One Two Three Four Five"),
            "Your Name"
        );
    }
}
