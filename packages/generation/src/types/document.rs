//! The website document: the single artifact the pipeline produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::{sort_canonical, Section, SectionType};

/// Color values the renderer applies as the site theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ColorPalette {
    pub fn new(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        }
    }
}

impl Default for ColorPalette {
    /// Neutral palette used when no industry/style palette applies.
    fn default() -> Self {
        Self::new("#1f2937", "#374151", "#3b82f6")
    }
}

/// Which path produced the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationSource {
    #[serde(rename = "ai")]
    Ai,

    #[serde(rename = "template-fallback")]
    TemplateFallback,
}

/// Document-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    pub industry: String,
    pub style: String,
    pub ai_used: GenerationSource,
    pub generated_at: DateTime<Utc>,
}

/// Ordered, typed, parameterized sections plus metadata and theme colors.
///
/// Invariant: `sections` always contains at least a header, a hero, a
/// features-equivalent, and a footer, with the header first and the footer
/// last. The orchestrator enforces this on every path, including total
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteDocument {
    pub sections: Vec<Section>,
    pub metadata: DocumentMetadata,
    pub colors: ColorPalette,
}

impl WebsiteDocument {
    /// First section of the given type, if present.
    pub fn section(&self, section_type: SectionType) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.section_type == section_type)
    }

    /// Whether any section of the given type is present.
    pub fn has_section(&self, section_type: SectionType) -> bool {
        self.section(section_type).is_some()
    }

    /// Re-sort sections into canonical render order.
    pub fn sort_canonical(&mut self) {
        sort_canonical(&mut self.sections);
    }
}
