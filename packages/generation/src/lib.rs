//! Website Document Generation Library
//!
//! Turns a short natural-language business description (plus optional
//! structured hints) into a website document: an ordered list of typed,
//! parameterized sections a separate renderer displays.
//!
//! # Design Philosophy
//!
//! **"Never fail the caller"**
//!
//! - Extraction is heuristic and best-effort, never blocking
//! - Every provider failure degrades to the template pipeline
//! - Every internal failure degrades to a minimal generic document
//! - Reference data (industry registry, component dataset) is immutable,
//!   built once, and dependency-injected — never a mutable singleton
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use generation::{GenerationRequest, Generator, IndustryRegistry};
//!
//! let registry = Arc::new(IndustryRegistry::builtin());
//! let generator = Generator::new(registry);
//!
//! let request = GenerationRequest::new(
//!     "Bella Vista",
//!     "restaurant",
//!     "An Italian restaurant with fresh pasta",
//! )
//! .with_style("modern");
//!
//! let outcome = generator.generate(&request).await;
//! assert!(outcome.document.sections.len() >= 4);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Document, section, and request types
//! - [`extract`] - Regex-based entity extraction from free text
//! - [`infer`] - Keyword-driven section inference
//! - [`registry`] - Industry template registry (read-only reference data)
//! - [`dataset`] - Fixed library of pre-authored components
//! - [`matcher`] - Scoring-based component matching
//! - [`props`] - Default-prop synthesis
//! - [`generator`] - Provider/fallback orchestration
//! - [`enrich`] - Post-hoc image enrichment
//! - [`traits`] - Provider seams (content, images) with mocks

pub mod dataset;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod generator;
pub mod infer;
pub mod matcher;
pub mod props;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{GenerationError, Result};
pub use extract::{extract_business_info, ExtractedInfo};
pub use generator::{fallback_document, GenerationOutcome, Generator};
pub use registry::{IndustryConfig, IndustryRegistry, Tier};
pub use traits::{
    images::{ImageAsset, ImageProvider, MockImageProvider, PexelsImageProvider},
    provider::{
        ContentProvider, ContentRequest, MockContentProvider, OllamaContentProvider, SiteContent,
    },
};
pub use types::{
    ColorPalette, DocumentMetadata, GenerationRequest, GenerationSource, PropMap, Section,
    SectionType, WebsiteDocument,
};
