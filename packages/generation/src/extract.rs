//! Entity extraction from free-text business descriptions.
//!
//! Pattern rules pull a business name, main service, selling point, and
//! target audience out of prose. Extraction is best-effort by design: the
//! rules are heuristic, a miss yields `None`, and nothing here ever errors.
//! Downstream consumers treat absent fields as "use the generic default".

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// "for|called|named <Capitalized Phrase>"
    static ref BUSINESS_NAME: Regex = Regex::new(
        r"(?:\bfor|\bcalled|\bnamed)\s+((?:[A-Z][A-Za-z0-9'&]*)(?:\s+[A-Z][A-Za-z0-9'&]*)*)"
    )
    .unwrap();

    /// Fallback: first capitalized multi-word run anywhere in the text.
    static ref CAPITALIZED_RUN: Regex = Regex::new(
        r"\b([A-Z][A-Za-z0-9'&]*(?:\s+[A-Z][A-Za-z0-9'&]*)+)\b"
    )
    .unwrap();

    static ref MAIN_SERVICE: Regex = Regex::new(
        r"(?i)(?:offers|provides|specializes in|focused on)\s+([^.,;:!?\n]+)"
    )
    .unwrap();

    static ref SELLING_POINT: Regex = Regex::new(
        r"(?i)(?:known for|famous for|unique|best|special|exceptional)\s+([^.,;:!?\n]+)"
    )
    .unwrap();

    static ref AUDIENCE: Regex = Regex::new(
        r"(?i)(?:\bfor|targeting|aimed at|designed for)\s+([^.,;:!?\n]+)"
    )
    .unwrap();
}

/// Business facts pulled out of a description.
///
/// Every field is optional; absence is a valid, common state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub business_name: Option<String>,
    pub main_service: Option<String>,
    pub unique_selling_point: Option<String>,
    pub target_audience: Option<String>,
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract business facts from a free-text description.
///
/// First matching rule wins per field. The name rule falls back to the
/// first capitalized multi-word run when no introducing phrase is present.
pub fn extract_business_info(description: &str) -> ExtractedInfo {
    let business_name =
        capture(&BUSINESS_NAME, description).or_else(|| capture(&CAPITALIZED_RUN, description));

    ExtractedInfo {
        business_name,
        main_service: capture(&MAIN_SERVICE, description),
        unique_selling_point: capture(&SELLING_POINT, description),
        target_audience: capture(&AUDIENCE, description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extracts_named_business() {
        let info = extract_business_info(
            "A website for Bella Vista, an Italian restaurant that offers wood-fired pizza.",
        );
        assert_eq!(info.business_name.as_deref(), Some("Bella Vista"));
        assert_eq!(info.main_service.as_deref(), Some("wood-fired pizza"));
    }

    #[test]
    fn test_name_falls_back_to_capitalized_run() {
        let info = extract_business_info("Iron Peak Gym helps athletes train harder.");
        assert_eq!(info.business_name.as_deref(), Some("Iron Peak Gym"));
    }

    #[test]
    fn test_selling_point() {
        let info = extract_business_info("We are known for our sourdough bread.");
        assert_eq!(info.unique_selling_point.as_deref(), Some("our sourdough bread"));
    }

    #[test]
    fn test_audience() {
        let info = extract_business_info("A quiet cafe designed for busy commuters.");
        assert_eq!(info.target_audience.as_deref(), Some("busy commuters"));
    }

    #[test]
    fn test_no_match_yields_none() {
        let info = extract_business_info("a quiet little shop on the corner");
        assert_eq!(info.business_name, None);
        assert_eq!(info.main_service, None);
        assert_eq!(info.unique_selling_point, None);
        assert_eq!(info.target_audience, None);
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(extract_business_info(""), ExtractedInfo::default());
    }

    proptest! {
        // Extraction is total: any input text yields a (possibly empty)
        // ExtractedInfo and never panics.
        #[test]
        fn extraction_never_panics(text in ".*") {
            let _ = extract_business_info(&text);
        }
    }
}
