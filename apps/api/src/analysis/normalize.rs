//! Text normalization, the first stage of every analysis pass.
//!
//! Both documents go through the same scrub before tokenization so keyword
//! comparison happens over a canonical form.

/// Normalizes raw document text into canonical matching form.
///
/// Algorithm:
/// 1. Lowercase the whole text.
/// 2. Replace every ASCII punctuation character with a space.
/// 3. Collapse whitespace runs to a single space and trim the ends.
///
/// Never fails; empty input yields an empty string. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let scrubbed: String = lowered
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    scrubbed.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Senior Rust Engineer (Backend)!"),
            "senior rust engineer backend"
        );
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(
            normalize("  python,,,   aws \n\t docker  "),
            "python aws docker"
        );
    }

    #[test]
    fn test_empty_and_blank_input_yield_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_punctuation_only_input_yields_empty_output() {
        assert_eq!(normalize("!!! ??? ... ---"), "");
    }

    #[test]
    fn test_splits_compound_punctuation_tokens() {
        assert_eq!(
            normalize("CI/CD pipelines, ASP.NET"),
            "ci cd pipelines asp net"
        );
    }

    #[test]
    fn test_idempotent_on_messy_input() {
        let once = normalize("C++/C# Developer -- 5+ years!");
        assert_eq!(normalize(&once), once);
    }

    mod proptest_normalize {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn output_has_no_ascii_punctuation(text in ".{0,200}") {
                let out = normalize(&text);
                prop_assert!(!out.chars().any(|c| c.is_ascii_punctuation()));
            }

            #[test]
            fn output_has_no_double_spaces_or_edge_whitespace(text in ".{0,200}") {
                let out = normalize(&text);
                prop_assert!(!out.contains("  "));
                prop_assert_eq!(out.trim(), out.as_str());
            }

            #[test]
            fn normalize_is_idempotent(text in ".{0,200}") {
                let once = normalize(&text);
                prop_assert_eq!(normalize(&once), once.clone());
            }
        }
    }
}
