// src/matcher/keywords.rs
//! Keyword taxonomy used to classify résumé and job-description text.

use std::collections::HashSet;
use std::sync::OnceLock;

pub const FUNCTIONAL: &[&str] = &[
    "data modeling",
    "data governance",
    "metadata",
    "mdm",
    "master data management",
    "data quality",
    "compliance",
    "regulatory reporting",
    "audit",
    "risk management",
    "business intelligence",
    "bi",
    "forecasting",
    "planning",
    "budgeting",
    "financial analysis",
    "reporting",
    "analytics",
    "market analysis",
    "customer insights",
    "crm",
    "sales operations",
    "supply chain",
    "procurement",
    "product management",
    "process improvement",
    "process optimization",
    "project management",
    "change management",
    "stakeholder management",
    "vendor management",
    "contract negotiation",
    "service delivery",
    "organizational design",
    "performance metrics",
    "data strategy",
    "enterprise architecture",
    "business architecture",
    "portfolio management",
    "customer experience",
    "business development",
    "strategic planning",
    "transformation programs",
    "agile methodology",
    "scrum",
    "kanban",
    "lean",
    "six sigma",
    "training and development",
    "talent management",
    "employee relations",
    "human resources",
    "learning and development",
    "customer success",
    "facility management",
    "health and safety",
    "environmental compliance",
    "social media management",
    "content management",
    "product lifecycle",
    "quality assurance",
    "claims management",
    "underwriting",
    "loan processing",
    "actuarial analysis",
    "policy administration",
    "credit analysis",
    "logistics",
    "warehouse management",
    "billing",
    "payroll",
    "accounting",
    "taxation",
    "financial reporting",
    "corporate communications",
    "data asset management",
    "data stewardship",
    "metadata management",
    "service management",
    "incident management",
    "problem management",
];

pub const TECHNICAL: &[&str] = &[
    "python",
    "r",
    "sql",
    "nosql",
    "java",
    "c#",
    "c++",
    "scala",
    "go",
    "rust",
    "bash",
    "powershell",
    "html",
    "css",
    "javascript",
    "typescript",
    "azure",
    "aws",
    "gcp",
    "ibm cloud",
    "oracle cloud",
    "sap cloud",
    "azure data factory",
    "azure synapse",
    "azure purview",
    "aws lambda",
    "aws s3",
    "google bigquery",
    "google dataflow",
    "spark",
    "hadoop",
    "kafka",
    "airflow",
    "dbt",
    "databricks",
    "snowflake",
    "dataiku",
    "flink",
    "hive",
    "presto",
    "impala",
    "elasticsearch",
    "cassandra",
    "mongodb",
    "redis",
    "rabbitmq",
    "apache beam",
    "etl",
    "data warehouse",
    "data lake",
    "data mesh",
    "power bi",
    "tableau",
    "qlik",
    "looker",
    "microstrategy",
    "sas",
    "excel",
    "vba",
    "matlab",
    "spss",
    "stata",
    "jenkins",
    "git",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "puppet",
    "chef",
    "ci/cd",
    "circleci",
    "azure devops",
    "github actions",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "keras",
    "xgboost",
    "lightgbm",
    "nlp",
    "llm",
    "openai",
    "transformers",
    "machine learning",
    "deep learning",
    "computer vision",
    "reinforcement learning",
    "data science",
    "cybersecurity",
    "penetration testing",
    "networking",
    "firewalls",
    "vpn",
    "encryption",
    "cloud security",
    "identity management",
    "sap",
    "oracle",
    "salesforce",
    "workday",
    "service now",
    "jira",
    "confluence",
    "power automate",
    "robotic process automation",
    "automation anywhere",
    "blue prism",
    "virtualization",
    "microservices",
    "api management",
    "big data",
    "software development",
    "qa testing",
    "agile methodologies",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "stakeholder engagement",
    "strategic planning",
    "team leadership",
    "mentoring",
    "coaching",
    "communication",
    "collaboration",
    "cross-functional",
    "consulting",
    "business acumen",
    "change management",
    "problem solving",
    "decision making",
    "conflict resolution",
    "negotiation",
    "influencing",
    "client management",
    "vendor management",
    "presentation skills",
    "project management",
    "time management",
    "adaptability",
    "innovation",
    "customer focus",
    "results driven",
    "continuous improvement",
    "critical thinking",
    "emotional intelligence",
    "business development",
    "service delivery",
    "training and development",
    "workshop facilitation",
    "relationship building",
    "team building",
    "performance management",
    "agile mindset",
    "risk management",
];

pub const EDUCATION: &[&str] = &[
    "phd",
    "doctorate",
    "masters",
    "msc",
    "mba",
    "bachelors",
    "bsc",
    "bcom",
    "mcom",
    "cpa",
    "cfa",
    "engineering",
    "statistics",
    "mathematics",
    "economics",
    "data science",
    "computer science",
    "information systems",
    "business administration",
    "finance",
    "accounting",
    "psychology",
    "human resources",
    "supply chain",
    "public health",
    "law",
    "medicine",
    "education",
    "environmental science",
    "social work",
    "marketing",
    "communications",
    "biology",
    "chemistry",
    "physics",
    "geology",
    "nursing",
    "pharmacy",
    "architecture",
    "journalism",
    "graphic design",
    "fine arts",
    "political science",
    "international relations",
    "anthropology",
    "history",
];

pub const CERTIFICATIONS: &[&str] = &[
    "pmp",
    "prince2",
    "scrum master",
    "safe",
    "agile",
    "six sigma",
    "csm",
    "itil",
    "aws certified",
    "azure fundamentals",
    "azure data engineer",
    "google cloud certified",
    "cisa",
    "cissp",
    "cbap",
    "ccba",
    "dataiku certified",
    "tableau certified",
    "power bi certified",
    "google analytics",
    "salesforce admin",
    "sap fico",
    "sap mm",
    "workday certified",
    "python certification",
    "sql certification",
    "network+",
    "security+",
    "ccna",
    "ccnp",
    "aws solutions architect",
    "azure solutions architect",
    "machine learning certification",
    "deep learning certification",
    "risk management professional",
    "financial risk manager",
    "chartered accountant",
    "certified internal auditor",
    "human resources certification",
    "digital marketing certification",
    "leadership certification",
    "cloud practitioner",
    "cybersecurity analyst",
    "data analyst certification",
    "devops certification",
];

/// Lowercased union of every category list.
pub fn all_keywords() -> &'static HashSet<String> {
    static ALL: OnceLock<HashSet<String>> = OnceLock::new();
    ALL.get_or_init(|| {
        FUNCTIONAL
            .iter()
            .chain(TECHNICAL)
            .chain(SOFT_SKILLS)
            .chain(EDUCATION)
            .chain(CERTIFICATIONS)
            .map(|kw| kw.to_lowercase())
            .collect()
    })
}

/// Substring search constrained to word boundaries, so the one-letter
/// keywords ("r") do not match inside ordinary words.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = text[from..].find(keyword) {
        let start = from + pos;
        let end = start + keyword.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = start + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keyword_respects_boundaries() {
        assert!(contains_keyword("knows r and python", "r"));
        assert!(!contains_keyword("introductory remarks", "r"));
        assert!(contains_keyword("c++ and c# developer", "c++"));
        assert!(contains_keyword("master data management lead", "master data management"));
        assert!(!contains_keyword("database work", "data"));
    }

    #[test]
    fn test_all_keywords_is_union() {
        let all = all_keywords();
        assert!(all.contains("python"));
        assert!(all.contains("leadership"));
        assert!(all.contains("mba"));
        assert!(all.contains("pmp"));
        assert!(all.contains("data governance"));
    }

    #[test]
    fn test_all_keywords_lowercased() {
        for kw in all_keywords() {
            assert_eq!(kw, &kw.to_lowercase());
        }
    }
}
