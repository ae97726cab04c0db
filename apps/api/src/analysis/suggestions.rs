//! Suggestion generation: turns missing keywords into short, categorized
//! guidance sentences.

use crate::analysis::vocab::Vocabularies;

const ALL_COVERED: &str = "Your resume already contains all the important keywords \
from the job description. Great job!";

/// Builds the suggestion text for a set of gaps.
///
/// Missing keywords are bucketed into technical terms, soft skills, and
/// other, preserving their given order. Each non-empty bucket contributes
/// one sentence, always in that bucket order, joined by single spaces.
/// Technical gaps list up to three terms, soft skills up to two, other up
/// to three, with an overflow suffix when truncated.
pub fn generate_suggestions(missing: &[String], vocab: &Vocabularies) -> String {
    if missing.is_empty() {
        return ALL_COVERED.to_string();
    }

    let mut technical: Vec<&str> = Vec::new();
    let mut soft: Vec<&str> = Vec::new();
    let mut other: Vec<&str> = Vec::new();

    for keyword in missing {
        if vocab.is_technical(keyword) {
            technical.push(keyword);
        } else if vocab.is_soft_skill(keyword) {
            soft.push(keyword);
        } else {
            other.push(keyword);
        }
    }

    let mut sentences: Vec<String> = Vec::new();

    if !technical.is_empty() {
        let mut listed = quote_head(&technical, 3);
        if technical.len() > 3 {
            listed.push_str(&format!(
                ", and {} more technical skills",
                technical.len() - 3
            ));
        }
        sentences.push(format!(
            "Consider adding your experience with {listed} to better align with the technical requirements."
        ));
    }

    if !soft.is_empty() {
        let mut listed = quote_head(&soft, 2);
        if soft.len() > 2 {
            listed.push_str(", and other soft skills");
        }
        sentences.push(format!(
            "Highlight your {listed} skills, which are valued in this role."
        ));
    }

    if !other.is_empty() {
        let mut listed = quote_head(&other, 3);
        if other.len() > 3 {
            listed.push_str(", and other relevant keywords");
        }
        sentences.push(format!("Include experience related to {listed} if you have it."));
    }

    sentences.join(" ")
}

fn quote_head(items: &[&str], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_no_gaps_returns_congratulation() {
        let vocab = Vocabularies::builtin();
        assert_eq!(
            generate_suggestions(&[], &vocab),
            "Your resume already contains all the important keywords from the job \
             description. Great job!"
        );
    }

    #[test]
    fn test_technical_gaps_sentence() {
        let vocab = Vocabularies::builtin();
        let text = generate_suggestions(&missing(&["docker", "kubernetes"]), &vocab);
        assert_eq!(
            text,
            "Consider adding your experience with 'docker', 'kubernetes' to better \
             align with the technical requirements."
        );
    }

    #[test]
    fn test_technical_overflow_counts_the_rest() {
        let vocab = Vocabularies::builtin();
        let text = generate_suggestions(
            &missing(&["aws", "azure", "gcp", "docker", "kubernetes"]),
            &vocab,
        );
        assert!(text.contains("'aws', 'azure', 'gcp', and 2 more technical skills"));
    }

    #[test]
    fn test_soft_skill_sentence_and_overflow() {
        let vocab = Vocabularies::builtin();

        let two = generate_suggestions(&missing(&["communication", "leadership"]), &vocab);
        assert_eq!(
            two,
            "Highlight your 'communication', 'leadership' skills, which are valued \
             in this role."
        );

        let three = generate_suggestions(
            &missing(&["communication", "leadership", "teamwork"]),
            &vocab,
        );
        assert!(three.contains("'communication', 'leadership', and other soft skills"));
    }

    #[test]
    fn test_other_keywords_sentence_and_overflow() {
        let vocab = Vocabularies::builtin();

        let few = generate_suggestions(&missing(&["mentorship", "orchestration"]), &vocab);
        assert_eq!(
            few,
            "Include experience related to 'mentorship', 'orchestration' if you have it."
        );

        let many = generate_suggestions(
            &missing(&["mentorship", "orchestration", "roadmap", "budgeting"]),
            &vocab,
        );
        assert!(many.contains("'mentorship', 'orchestration', 'roadmap', and other relevant keywords"));
    }

    #[test]
    fn test_buckets_appear_in_fixed_order() {
        let vocab = Vocabularies::builtin();
        // given order mixes the categories; output regroups them
        let text = generate_suggestions(
            &missing(&["mentorship", "communication", "docker"]),
            &vocab,
        );

        let tech_at = text.find("Consider adding").unwrap();
        let soft_at = text.find("Highlight your").unwrap();
        let other_at = text.find("Include experience").unwrap();
        assert!(tech_at < soft_at && soft_at < other_at);
        assert!(!text.contains("  "), "sentences join with single spaces");
    }

    #[test]
    fn test_bucket_order_preserves_input_order_within_bucket() {
        let vocab = Vocabularies::builtin();
        let text = generate_suggestions(&missing(&["kafka", "redis", "docker"]), &vocab);
        assert!(text.contains("'kafka', 'redis', 'docker'"));
    }
}
