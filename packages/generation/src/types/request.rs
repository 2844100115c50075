//! The generation request as the library consumes it.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::registry::Tier;

/// Everything the pipeline needs to build a document.
///
/// `website_name`, `industry`, and `description` are the only required
/// inputs; everything else is an optional hint that sharpens matching and
/// copy synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub website_name: String,
    pub industry: String,
    pub description: String,

    /// Visual style, e.g. "modern", "classic", "bold", "minimal".
    #[serde(default)]
    pub style: Option<String>,

    /// Name of the content provider to attempt, or "none"/absent to skip
    /// the provider entirely.
    #[serde(default)]
    pub ai_provider: Option<String>,

    /// Replace placeholder image markers with real images.
    #[serde(default)]
    pub include_images: bool,

    #[serde(default)]
    pub target_audience: Option<String>,

    #[serde(default)]
    pub business_goals: Option<String>,

    #[serde(default)]
    pub unique_selling_points: Option<String>,

    /// Opt into a registry tier section set instead of keyword inference.
    #[serde(default)]
    pub tier: Option<Tier>,
}

impl GenerationRequest {
    pub fn new(website_name: &str, industry: &str, description: &str) -> Self {
        Self {
            website_name: website_name.to_string(),
            industry: industry.to_string(),
            description: description.to_string(),
            style: None,
            ai_provider: None,
            include_images: false,
            target_audience: None,
            business_goals: None,
            unique_selling_points: None,
            tier: None,
        }
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn with_ai_provider(mut self, provider: &str) -> Self {
        self.ai_provider = Some(provider.to_string());
        self
    }

    pub fn with_images(mut self) -> Self {
        self.include_images = true;
        self
    }

    pub fn with_target_audience(mut self, audience: &str) -> Self {
        self.target_audience = Some(audience.to_string());
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Effective style, defaulting to "modern".
    pub fn style_or_default(&self) -> &str {
        self.style.as_deref().filter(|s| !s.is_empty()).unwrap_or("modern")
    }

    /// Whether the caller asked for a provider attempt.
    pub fn wants_provider(&self) -> bool {
        matches!(self.ai_provider.as_deref(), Some(name) if !name.is_empty() && name != "none")
    }

    /// Check the three required fields are present and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.website_name.trim().is_empty() {
            return Err(GenerationError::MissingField {
                field: "websiteName",
            });
        }
        if self.industry.trim().is_empty() {
            return Err(GenerationError::MissingField { field: "industry" });
        }
        if self.description.trim().is_empty() {
            return Err(GenerationError::MissingField {
                field: "description",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        let ok = GenerationRequest::new("Bella Vista", "restaurant", "An Italian restaurant");
        assert!(ok.validate().is_ok());

        let missing = GenerationRequest::new("", "restaurant", "An Italian restaurant");
        assert!(matches!(
            missing.validate(),
            Err(GenerationError::MissingField {
                field: "websiteName"
            })
        ));

        let blank = GenerationRequest::new("Bella Vista", "   ", "An Italian restaurant");
        assert!(missing.validate().is_err());
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_wants_provider() {
        let req = GenerationRequest::new("A", "b", "c");
        assert!(!req.wants_provider());
        assert!(!req.clone().with_ai_provider("none").wants_provider());
        assert!(!req.clone().with_ai_provider("").wants_provider());
        assert!(req.with_ai_provider("ollama").wants_provider());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"websiteName":"Bella Vista","industry":"restaurant",
                "description":"An Italian restaurant","style":"modern",
                "includeImages":true,"targetAudience":"families"}"#,
        )
        .unwrap();
        assert_eq!(req.website_name, "Bella Vista");
        assert!(req.include_images);
        assert_eq!(req.target_audience.as_deref(), Some("families"));
        assert_eq!(req.style_or_default(), "modern");
    }
}
