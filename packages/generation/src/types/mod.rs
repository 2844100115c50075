//! Data types for the generation pipeline.

pub mod document;
pub mod request;
pub mod section;

pub use document::{ColorPalette, DocumentMetadata, GenerationSource, WebsiteDocument};
pub use request::GenerationRequest;
pub use section::{sort_canonical, PropMap, Section, SectionType};
