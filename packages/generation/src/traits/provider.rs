//! Content provider trait for LLM-backed generation.
//!
//! A provider may produce partial output: any subset of title, description,
//! colors, and sections. The orchestrator merges whatever arrives with the
//! template pipeline's document, so a provider never has to be complete —
//! and never gets to be fatal.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::types::{ColorPalette, Section};

/// What the provider is asked to generate from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub website_name: String,
    pub industry: String,
    pub style: String,
    pub description: String,
}

/// Partial website content produced by a provider.
///
/// Every field is optional; an empty value contributes nothing to the
/// merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub colors: Option<ColorPalette>,
    pub sections: Vec<Section>,
}

impl SiteContent {
    /// True when the provider produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.colors.is_none()
            && self.sections.is_empty()
    }
}

/// Content provider seam.
///
/// Implementations wrap specific LLM backends and handle prompting and
/// response parsing. Callers bound both methods with a timeout and treat
/// timeout identically to "unavailable".
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Cheap health check before attempting generation.
    async fn check_availability(&self) -> bool;

    /// Generate partial website content.
    async fn generate_content(&self, request: &ContentRequest) -> Result<SiteContent>;
}

/// Mock content provider for testing.
#[derive(Default)]
pub struct MockContentProvider {
    available: bool,
    failing: bool,
    content: SiteContent,
}

impl MockContentProvider {
    /// Create an available provider that returns empty content.
    pub fn new() -> Self {
        Self {
            available: true,
            ..Default::default()
        }
    }

    /// Provider whose health check fails.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Provider that is available but errors on every call.
    pub fn failing() -> Self {
        Self {
            available: true,
            failing: true,
            ..Default::default()
        }
    }

    /// Set the content returned by `generate_content`.
    pub fn with_content(mut self, content: SiteContent) -> Self {
        self.content = content;
        self
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn check_availability(&self) -> bool {
        self.available
    }

    async fn generate_content(&self, _request: &ContentRequest) -> Result<SiteContent> {
        if self.failing {
            return Err(GenerationError::Provider(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock provider failure",
            ))));
        }
        Ok(self.content.clone())
    }
}

/// Ollama-backed content provider.
///
/// Talks to a local Ollama instance over HTTP and asks for JSON-formatted
/// output matching [`SiteContent`].
pub struct OllamaContentProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaContentProvider {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

fn build_prompt(request: &ContentRequest) -> String {
    format!(
        "You are generating website content as JSON.\n\
         Business: {name}\nIndustry: {industry}\nStyle: {style}\nDescription: {description}\n\n\
         Respond with a single JSON object: {{\"title\": string, \"description\": string, \
         \"colors\": {{\"primary\": string, \"secondary\": string, \"accent\": string}}, \
         \"sections\": [{{\"type\": string, \"variant\": string, \"props\": object}}]}}.\n\
         Section types: header, hero, features, testimonials, pricing, cta, faq, stats, team, \
         newsletter, footer, menu, productShowcase, bookingSystem, gallery, about, contact.\n\
         Use \"placeholder://\" URLs for any images.",
        name = request.website_name,
        industry = request.industry,
        style = request.style,
        description = request.description,
    )
}

/// Strip a Markdown code fence if the model wrapped its JSON in one.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Parse a provider's raw text into [`SiteContent`].
pub(crate) fn parse_site_content(raw: &str) -> Result<SiteContent> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|e| GenerationError::ProviderContent {
        reason: e.to_string(),
    })
}

#[async_trait]
impl ContentProvider for OllamaContentProvider {
    async fn check_availability(&self) -> bool {
        match self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate_content(&self, request: &ContentRequest) -> Result<SiteContent> {
        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            prompt: String,
            stream: bool,
            format: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            response: String,
        }

        let body = Request {
            model: &self.model,
            prompt: build_prompt(request),
            stream: false,
            format: "json",
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(GenerationError::Provider(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Ollama API error: {}", response.status()),
            ))));
        }

        let payload: Response = response
            .json()
            .await
            .map_err(|e| GenerationError::Http(Box::new(e)))?;

        parse_site_content(&payload.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionType;

    #[tokio::test]
    async fn test_mock_provider_availability() {
        assert!(MockContentProvider::new().check_availability().await);
        assert!(!MockContentProvider::unavailable().check_availability().await);
    }

    #[tokio::test]
    async fn test_mock_provider_failure() {
        let provider = MockContentProvider::failing();
        let request = ContentRequest {
            website_name: "A".to_string(),
            industry: "b".to_string(),
            style: "modern".to_string(),
            description: "c".to_string(),
        };
        assert!(provider.generate_content(&request).await.is_err());
    }

    #[test]
    fn test_parse_plain_json() {
        let content =
            parse_site_content(r#"{"title": "Acme", "sections": []}"#).unwrap();
        assert_eq!(content.title.as_deref(), Some("Acme"));
        assert!(content.sections.is_empty());
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"title\": \"Acme\", \"sections\": [{\"type\": \"hero\", \"variant\": \"standard\"}]}\n```";
        let content = parse_site_content(raw).unwrap();
        assert_eq!(content.sections.len(), 1);
        assert_eq!(content.sections[0].section_type, SectionType::Hero);
    }

    #[test]
    fn test_parse_garbage_is_provider_content_error() {
        let err = parse_site_content("not json at all").unwrap_err();
        assert!(matches!(err, GenerationError::ProviderContent { .. }));
    }
}
