//! Analysis orchestration: one call from two raw documents to a full report.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::{ExtractionOptions, KeywordExtractor};
use crate::analysis::linguistics::LinguisticAnalyzer;
use crate::analysis::scorer::score_match;
use crate::analysis::suggestions::generate_suggestions;
use crate::analysis::vocab::Vocabularies;

/// Full match report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// 0.0 - 100.0, one decimal place.
    pub match_score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: String,
    /// Which linguistic backend produced this report ("rule" | "basic").
    pub analyzer_backend: String,
}

/// The analysis pipeline: extract both keyword lists, score the overlap,
/// generate suggestions. Holds only `Arc`-shared immutable pieces, so one
/// engine serves concurrent requests.
pub struct MatchEngine {
    extractor: KeywordExtractor,
    vocab: Arc<Vocabularies>,
    analyzer_name: &'static str,
}

impl MatchEngine {
    pub fn new(
        analyzer: Arc<dyn LinguisticAnalyzer>,
        vocab: Arc<Vocabularies>,
        options: ExtractionOptions,
    ) -> Self {
        let analyzer_name = analyzer.name();
        Self {
            extractor: KeywordExtractor::new(analyzer, Arc::clone(&vocab), options),
            vocab,
            analyzer_name,
        }
    }

    /// Compares a resume against a job description. Infallible: empty or
    /// unusable documents produce defined scores, not errors.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchReport {
        let resume_keywords = self.extractor.extract(resume_text);
        let job_keywords = self.extractor.extract(job_text);

        let score = score_match(&resume_keywords, &job_keywords);
        let suggestions = generate_suggestions(&score.missing, &self.vocab);

        MatchReport {
            match_score: score.percentage,
            matched_keywords: score.matched,
            missing_keywords: score.missing,
            suggestions,
            analyzer_backend: self.analyzer_name.to_string(),
        }
    }

    /// Keyword extraction alone, for the preview endpoint.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::linguistics::{BasicAnalyzer, RuleBasedAnalyzer};
    use crate::analysis::scorer::round_one_decimal;

    const SAMPLE_RESUME: &str = r#"
        Jordan Reyes
        Senior Backend Engineer

        SUMMARY
        Experienced Python developer who designed and shipped microservices
        on AWS. Led a team of four engineers, built CI pipelines with Docker,
        and improved API latency by 40 percent.

        SKILLS
        Python, Django, PostgreSQL, Redis, Docker, AWS, Git, REST

        EXPERIENCE
        Built machine learning pipelines for fraud detection using Python
        and pandas. Automated deployments and monitoring. Strong
        communication and leadership across distributed teams.
    "#;

    const SAMPLE_JOB: &str = r#"
        Backend Engineer - Payments Platform

        We are looking for a Python developer to build reliable payment
        services. You will design REST APIs, deploy microservices with
        Docker and Kubernetes on AWS, and own PostgreSQL schemas.

        Requirements: Python, Django, PostgreSQL, Docker, Kubernetes, AWS,
        Terraform, strong communication and teamwork.
    "#;

    fn make_engine() -> MatchEngine {
        MatchEngine::new(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(Vocabularies::builtin()),
            ExtractionOptions::default(),
        )
    }

    fn assert_score_matches_ratio(report: &MatchReport) {
        let total = report.matched_keywords.len() + report.missing_keywords.len();
        assert!(total > 0, "job keywords expected for this fixture");
        let expected =
            round_one_decimal(report.matched_keywords.len() as f64 / total as f64 * 100.0);
        assert_eq!(report.match_score, expected);
    }

    #[test]
    fn test_overlapping_documents_report_matches_and_gaps() {
        let engine = make_engine();
        let report = engine.analyze(
            "Experienced Python developer with AWS and React skills",
            "Looking for a Python developer familiar with AWS, Docker, and React",
        );

        for expected in ["python", "aws", "react"] {
            assert!(
                report.matched_keywords.iter().any(|k| k == expected),
                "'{expected}' should be matched: {:?}",
                report.matched_keywords
            );
        }
        assert!(
            report.missing_keywords.iter().any(|k| k == "docker"),
            "'docker' should be missing: {:?}",
            report.missing_keywords
        );
        assert_score_matches_ratio(&report);
    }

    #[test]
    fn test_identical_documents_have_no_gaps() {
        let engine = make_engine();
        let report = engine.analyze(SAMPLE_JOB, SAMPLE_JOB);

        assert_eq!(report.match_score, 100.0);
        assert!(report.missing_keywords.is_empty());
        assert_eq!(
            report.suggestions,
            "Your resume already contains all the important keywords from the job \
             description. Great job!"
        );
    }

    #[test]
    fn test_empty_resume_scores_zero_and_lists_all_gaps() {
        let engine = make_engine();
        let report = engine.analyze("", "Python AWS Docker");

        assert_eq!(report.match_score, 0.0);
        assert!(report.matched_keywords.is_empty());
        for expected in ["python", "aws", "docker"] {
            assert!(
                report.missing_keywords.iter().any(|k| k == expected),
                "'{expected}' should be missing: {:?}",
                report.missing_keywords
            );
        }
        assert!(report.suggestions.contains("Consider adding your experience with"));
    }

    #[test]
    fn test_empty_job_scores_hundred() {
        let engine = make_engine();
        let report = engine.analyze("Python AWS Docker", "");

        assert_eq!(report.match_score, 100.0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(
            report.suggestions,
            "Your resume already contains all the important keywords from the job \
             description. Great job!"
        );
    }

    #[test]
    fn test_sample_documents_end_to_end() {
        let engine = make_engine();
        let report = engine.analyze(SAMPLE_RESUME, SAMPLE_JOB);

        assert!((0.0..=100.0).contains(&report.match_score));
        for expected in ["python", "django", "postgresql", "docker", "aws"] {
            assert!(
                report.matched_keywords.iter().any(|k| k == expected),
                "'{expected}' should be matched: {:?}",
                report.matched_keywords
            );
        }
        for expected in ["kubernetes", "terraform"] {
            assert!(
                report.missing_keywords.iter().any(|k| k == expected),
                "'{expected}' should be missing: {:?}",
                report.missing_keywords
            );
        }
        assert!(report.suggestions.contains("kubernetes"));
        assert_score_matches_ratio(&report);
    }

    #[test]
    fn test_report_carries_analyzer_backend() {
        let rule_report = make_engine().analyze("Python", "Python");
        assert_eq!(rule_report.analyzer_backend, "rule");

        let basic_engine = MatchEngine::new(
            Arc::new(BasicAnalyzer),
            Arc::new(Vocabularies::builtin()),
            ExtractionOptions::default(),
        );
        let basic_report = basic_engine.analyze("Python", "Python");
        assert_eq!(basic_report.analyzer_backend, "basic");
        assert_eq!(basic_report.match_score, 100.0);
    }

    #[test]
    fn test_report_serializes_with_expected_field_names() {
        let engine = make_engine();
        let report = engine.analyze("Python developer", "Rust developer");
        let value = serde_json::to_value(&report).unwrap();

        for field in [
            "match_score",
            "matched_keywords",
            "missing_keywords",
            "suggestions",
            "analyzer_backend",
        ] {
            assert!(value.get(field).is_some(), "missing field '{field}'");
        }
    }

    #[test]
    fn test_analysis_is_deterministic_across_runs() {
        let engine = make_engine();
        let first = engine.analyze(SAMPLE_RESUME, SAMPLE_JOB);
        let second = engine.analyze(SAMPLE_RESUME, SAMPLE_JOB);

        assert_eq!(first.match_score, second.match_score);
        assert_eq!(first.matched_keywords, second.matched_keywords);
        assert_eq!(first.missing_keywords, second.missing_keywords);
        assert_eq!(first.suggestions, second.suggestions);
    }
}
