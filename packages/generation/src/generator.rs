//! Generation orchestrator.
//!
//! Sequences provider attempt → template fallback → merge → image
//! enrichment → emit. The contract is "never fail the caller": every error
//! on the way degrades to a more generic document, down to a minimal
//! hard-coded one, and is logged rather than surfaced.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{error, warn};

use crate::dataset::{builtin_dataset, DatasetRecord};
use crate::enrich::enrich_images;
use crate::error::Result;
use crate::extract::{extract_business_info, ExtractedInfo};
use crate::infer::infer_sections;
use crate::matcher::{match_components, MatchQuery};
use crate::props::{merge_props, synthesize_props};
use crate::registry::IndustryRegistry;
use crate::traits::images::ImageProvider;
use crate::traits::provider::{ContentProvider, ContentRequest, SiteContent};
use crate::types::{
    ColorPalette, DocumentMetadata, GenerationRequest, GenerationSource, PropMap, Section,
    SectionType, WebsiteDocument,
};

/// Sections every document must carry, no matter what produced it.
const MANDATORY_SECTIONS: [SectionType; 4] = [
    SectionType::Header,
    SectionType::Hero,
    SectionType::Features,
    SectionType::Footer,
];

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub document: WebsiteDocument,

    /// Whether image enrichment actually ran.
    pub images_included: bool,

    /// True when the minimal generic document was emitted after an
    /// unexpected internal error.
    pub fallback_used: bool,
}

/// The generation pipeline, wired once per process.
///
/// Registry and dataset are immutable reference data shared across
/// requests; the providers are optional seams.
pub struct Generator {
    registry: Arc<IndustryRegistry>,
    dataset: Vec<DatasetRecord>,
    provider: Option<Arc<dyn ContentProvider>>,
    images: Option<Arc<dyn ImageProvider>>,
    external_timeout: Duration,
    image_count: usize,
}

impl Generator {
    pub fn new(registry: Arc<IndustryRegistry>) -> Self {
        Self {
            registry,
            dataset: builtin_dataset(),
            provider: None,
            images: None,
            external_timeout: Duration::from_secs(10),
            image_count: 10,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_image_provider(mut self, images: Arc<dyn ImageProvider>) -> Self {
        self.images = Some(images);
        self
    }

    /// Timeout applied to each outbound provider call.
    pub fn with_external_timeout(mut self, timeout: Duration) -> Self {
        self.external_timeout = timeout;
        self
    }

    pub fn with_image_count(mut self, count: usize) -> Self {
        self.image_count = count;
        self
    }

    /// Generate a document. Infallible by contract.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        match self.generate_inner(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "generation failed, emitting generic fallback document");
                GenerationOutcome {
                    document: fallback_document(),
                    images_included: false,
                    fallback_used: true,
                }
            }
        }
    }

    async fn generate_inner(&self, request: &GenerationRequest) -> Result<GenerationOutcome> {
        let info = effective_info(request);

        let ai_content = if request.wants_provider() {
            self.attempt_provider(request).await
        } else {
            None
        };

        let mut document = self.build_template_document(request, &info);

        if let Some(content) = ai_content.filter(|c| !c.is_empty()) {
            merge_content(&mut document, content);
            document.metadata.ai_used = GenerationSource::Ai;
        }

        self.ensure_mandatory_sections(&mut document, request, &info);
        document.sort_canonical();

        let mut images_included = false;
        if request.include_images {
            if let Some(provider) = &self.images {
                if provider.is_configured() {
                    document = enrich_images(&document, provider.as_ref(), self.image_count).await;
                    images_included = true;
                }
            }
        }

        Ok(GenerationOutcome {
            document,
            images_included,
            fallback_used: false,
        })
    }

    /// Try the content provider; any failure falls through to the template
    /// pipeline. Timeouts are treated identically to "unavailable".
    async fn attempt_provider(&self, request: &GenerationRequest) -> Option<SiteContent> {
        let provider = self.provider.as_ref()?;

        match timeout(self.external_timeout, provider.check_availability()).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("content provider unavailable, using template fallback");
                return None;
            }
            Err(_) => {
                warn!("content provider availability check timed out, using template fallback");
                return None;
            }
        }

        let content_request = ContentRequest {
            website_name: request.website_name.clone(),
            industry: request.industry.clone(),
            style: request.style_or_default().to_string(),
            description: request.description.clone(),
        };

        match timeout(self.external_timeout, provider.generate_content(&content_request)).await {
            Ok(Ok(content)) => Some(content),
            Ok(Err(e)) => {
                warn!(error = %e, "content provider failed, using template fallback");
                None
            }
            Err(_) => {
                warn!("content provider call timed out, using template fallback");
                None
            }
        }
    }

    /// Build a complete document from the template pipeline alone.
    fn build_template_document(
        &self,
        request: &GenerationRequest,
        info: &ExtractedInfo,
    ) -> WebsiteDocument {
        let industry = request.industry.as_str();
        let style = request.style_or_default();
        let config = self.registry.config(industry);

        let mut section_types = match request.tier {
            Some(tier) => self.registry.sections_for_tier(industry, tier),
            None => infer_sections(&request.description, industry),
        };

        let mut match_query = MatchQuery::new(&request.description)
            .with_industry(industry)
            .with_tone(style);
        if let Some(audience) = &request.target_audience {
            match_query = match_query.with_audience(audience);
        }
        for hint in [&request.business_goals, &request.unique_selling_points]
            .into_iter()
            .flatten()
        {
            match_query.query.push(' ');
            match_query.query.push_str(hint);
        }
        let matched = match_components(&self.dataset, &match_query);

        for record in &matched {
            if !section_types.contains(&record.section_type) {
                section_types.push(record.section_type);
            }
        }

        let by_type: HashMap<SectionType, &DatasetRecord> =
            matched.iter().map(|r| (r.section_type, *r)).collect();

        let mut sections = Vec::with_capacity(section_types.len());
        for section_type in section_types {
            let (variant, base) = match by_type.get(&section_type) {
                Some(record) => (record.variant.to_string(), record.props.clone()),
                None => (self.registry.variant(industry, section_type), PropMap::new()),
            };
            let synthesized = synthesize_props(section_type, &variant, info, config, industry);
            let mut props = merge_props(&base, &synthesized);

            if section_type == SectionType::Cta {
                if let Some(goals) = request
                    .business_goals
                    .as_deref()
                    .filter(|g| !g.trim().is_empty())
                {
                    props
                        .entry("subtitle")
                        .or_insert_with(|| Value::String(goals.trim().to_string()));
                }
            }

            sections.push(Section::new(section_type, &variant, props));
        }

        let mut document = WebsiteDocument {
            sections,
            metadata: DocumentMetadata {
                title: request.website_name.clone(),
                description: request.description.clone(),
                industry: industry.to_string(),
                style: style.to_string(),
                ai_used: GenerationSource::TemplateFallback,
                generated_at: Utc::now(),
            },
            colors: self.registry.palette(industry, style),
        };
        document.sort_canonical();
        document
    }

    /// Fill any mandatory section the merge left missing.
    fn ensure_mandatory_sections(
        &self,
        document: &mut WebsiteDocument,
        request: &GenerationRequest,
        info: &ExtractedInfo,
    ) {
        let config = self.registry.config(&request.industry);
        for section_type in MANDATORY_SECTIONS {
            if !document.has_section(section_type) {
                let variant = self.registry.variant(&request.industry, section_type);
                let props =
                    synthesize_props(section_type, &variant, info, config, &request.industry);
                document
                    .sections
                    .push(Section::new(section_type, &variant, props));
            }
        }
    }
}

/// Extraction output with explicit request hints layered on top.
///
/// The website name is required input, so it always wins over whatever the
/// extractor guessed from prose.
fn effective_info(request: &GenerationRequest) -> ExtractedInfo {
    let mut info = extract_business_info(&request.description);
    info.business_name = Some(request.website_name.clone());
    if let Some(audience) = &request.target_audience {
        info.target_audience = Some(audience.clone());
    }
    if let Some(usp) = &request.unique_selling_points {
        info.unique_selling_point = Some(usp.clone());
    }
    info
}

/// Overlay provider output on the template document.
///
/// Provider sections replace template sections of the same type; types the
/// provider omitted keep their template version. Variants are re-validated
/// since the provider is free-form.
fn merge_content(document: &mut WebsiteDocument, content: SiteContent) {
    if let Some(title) = content.title.filter(|t| !t.trim().is_empty()) {
        document.metadata.title = title;
    }
    if let Some(description) = content.description.filter(|d| !d.trim().is_empty()) {
        document.metadata.description = description;
    }
    if let Some(colors) = content.colors {
        document.colors = colors;
    }

    for incoming in content.sections {
        let incoming = Section::new(incoming.section_type, &incoming.variant, incoming.props);
        match document
            .sections
            .iter_mut()
            .find(|s| s.section_type == incoming.section_type)
        {
            Some(existing) => *existing = incoming,
            None => document.sections.push(incoming),
        }
    }
}

/// The minimal generic document emitted after an unrecoverable error.
///
/// Deliberately self-contained: only pure synthesis, nothing that can fail.
pub fn fallback_document() -> WebsiteDocument {
    let info = ExtractedInfo {
        business_name: Some("My Website".to_string()),
        ..Default::default()
    };

    let sections = MANDATORY_SECTIONS
        .iter()
        .map(|&section_type| {
            let variant = section_type.default_variant();
            let props = synthesize_props(section_type, variant, &info, None, "business");
            Section::new(section_type, variant, props)
        })
        .collect();

    WebsiteDocument {
        sections,
        metadata: DocumentMetadata {
            title: "My Website".to_string(),
            description: "A simple website for a local business".to_string(),
            industry: "business".to_string(),
            style: "modern".to_string(),
            ai_used: GenerationSource::TemplateFallback,
            generated_at: Utc::now(),
        },
        colors: ColorPalette::default(),
    }
}
