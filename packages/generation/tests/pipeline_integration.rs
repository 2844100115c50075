//! End-to-end pipeline tests using the mock providers.

use std::sync::Arc;

use generation::{
    GenerationRequest, GenerationSource, Generator, IndustryRegistry, MockContentProvider,
    MockImageProvider, PropMap, Section, SectionType, SiteContent, Tier,
};
use serde_json::{json, Value};

fn generator() -> Generator {
    Generator::new(Arc::new(IndustryRegistry::builtin()))
}

fn bella_vista() -> GenerationRequest {
    GenerationRequest::new("Bella Vista", "restaurant", "An Italian restaurant")
        .with_style("modern")
}

#[tokio::test]
async fn restaurant_request_without_provider_uses_template_fallback() {
    let outcome = generator().generate(&bella_vista()).await;
    let doc = &outcome.document;

    assert!(!outcome.fallback_used);
    assert_eq!(doc.metadata.ai_used, GenerationSource::TemplateFallback);

    // Menu comes from the restaurant template set.
    assert!(doc.has_section(SectionType::Menu));

    // Colors equal the restaurant/modern palette.
    let registry = IndustryRegistry::builtin();
    assert_eq!(doc.colors, registry.palette("restaurant", "modern"));

    // Header first, footer last.
    assert_eq!(doc.sections.first().unwrap().section_type, SectionType::Header);
    assert_eq!(doc.sections.last().unwrap().section_type, SectionType::Footer);

    // Business name flows into the synthesized props.
    let hero = doc.section(SectionType::Hero).unwrap();
    assert_eq!(hero.props["title"], "Welcome to Bella Vista");
}

#[tokio::test]
async fn unknown_industry_still_produces_complete_document() {
    let request = GenerationRequest::new(
        "Quiet Pages",
        "rare bookbinding",
        "A tiny workshop restoring antique books",
    );
    let outcome = generator().generate(&request).await;
    let doc = &outcome.document;

    assert_eq!(doc.sections.first().unwrap().section_type, SectionType::Header);
    assert_eq!(doc.sections.last().unwrap().section_type, SectionType::Footer);
    assert!(doc.has_section(SectionType::Hero));
    assert!(doc.has_section(SectionType::Features));

    let footer = doc.section(SectionType::Footer).unwrap();
    assert_eq!(footer.props["companyName"], "Quiet Pages");
}

#[tokio::test]
async fn unavailable_provider_falls_back_to_templates() {
    let generator = generator().with_provider(Arc::new(MockContentProvider::unavailable()));
    let request = bella_vista().with_ai_provider("ollama");

    let outcome = generator.generate(&request).await;
    assert_eq!(
        outcome.document.metadata.ai_used,
        GenerationSource::TemplateFallback
    );
    assert!(outcome.document.has_section(SectionType::Menu));
}

#[tokio::test]
async fn failing_provider_falls_back_to_templates() {
    let generator = generator().with_provider(Arc::new(MockContentProvider::failing()));
    let request = bella_vista().with_ai_provider("ollama");

    let outcome = generator.generate(&request).await;
    assert_eq!(
        outcome.document.metadata.ai_used,
        GenerationSource::TemplateFallback
    );
}

#[tokio::test]
async fn provider_not_attempted_unless_requested() {
    // An available provider with content must be ignored when the request
    // never asked for one.
    let content = SiteContent {
        title: Some("AI Title".to_string()),
        ..Default::default()
    };
    let generator =
        generator().with_provider(Arc::new(MockContentProvider::new().with_content(content)));

    let outcome = generator.generate(&bella_vista()).await;
    assert_eq!(
        outcome.document.metadata.ai_used,
        GenerationSource::TemplateFallback
    );
    assert_eq!(outcome.document.metadata.title, "Bella Vista");
}

#[tokio::test]
async fn provider_sections_take_precedence_and_gaps_are_filled() {
    let mut props = PropMap::new();
    props.insert(
        "title".to_string(),
        Value::String("Handmade pasta, nightly".to_string()),
    );
    let content = SiteContent {
        title: Some("Bella Vista — Cucina Italiana".to_string()),
        sections: vec![Section::new(SectionType::Hero, "split", props)],
        ..Default::default()
    };

    let generator =
        generator().with_provider(Arc::new(MockContentProvider::new().with_content(content)));
    let request = bella_vista().with_ai_provider("ollama");

    let outcome = generator.generate(&request).await;
    let doc = &outcome.document;

    assert_eq!(doc.metadata.ai_used, GenerationSource::Ai);
    assert_eq!(doc.metadata.title, "Bella Vista — Cucina Italiana");

    // The provider's hero replaced the template hero.
    let hero = doc.section(SectionType::Hero).unwrap();
    assert_eq!(hero.props["title"], "Handmade pasta, nightly");

    // Everything the provider omitted is still there.
    assert!(doc.has_section(SectionType::Header));
    assert!(doc.has_section(SectionType::Features));
    assert!(doc.has_section(SectionType::Footer));
    assert_eq!(doc.sections.last().unwrap().section_type, SectionType::Footer);
}

#[tokio::test]
async fn empty_provider_output_counts_as_fallback() {
    let generator = generator().with_provider(Arc::new(MockContentProvider::new()));
    let request = bella_vista().with_ai_provider("ollama");

    let outcome = generator.generate(&request).await;
    assert_eq!(
        outcome.document.metadata.ai_used,
        GenerationSource::TemplateFallback
    );
}

#[tokio::test]
async fn image_enrichment_replaces_placeholders() {
    let images = MockImageProvider::new().with_urls(&[
        "https://img.example/a.jpg",
        "https://img.example/b.jpg",
    ]);
    let generator = generator().with_image_provider(Arc::new(images));
    let request = bella_vista().with_images();

    let outcome = generator.generate(&request).await;
    assert!(outcome.images_included);

    let rendered = serde_json::to_string(&outcome.document).unwrap();
    assert!(!rendered.contains("placeholder://"));
    assert!(rendered.contains("https://img.example/"));
}

#[tokio::test]
async fn image_enrichment_skipped_without_provider() {
    let outcome = generator().generate(&bella_vista().with_images()).await;
    assert!(!outcome.images_included);

    let rendered = serde_json::to_string(&outcome.document).unwrap();
    assert!(rendered.contains("placeholder://"));
}

#[tokio::test]
async fn tier_request_uses_registry_section_sets() {
    let request = bella_vista().with_tier(Tier::Enterprise);
    let outcome = generator().generate(&request).await;

    // Enterprise restaurant includes the industry-specific booking system.
    assert!(outcome.document.has_section(SectionType::BookingSystem));

    let basic = generator()
        .generate(&bella_vista().with_tier(Tier::Basic))
        .await;
    assert!(!basic.document.has_section(SectionType::BookingSystem));
}

#[tokio::test]
async fn generation_is_deterministic_apart_from_timestamps() {
    let first = generator().generate(&bella_vista()).await;
    let second = generator().generate(&bella_vista()).await;

    let strip = |doc: &generation::WebsiteDocument| -> Value {
        let mut v = serde_json::to_value(doc).unwrap();
        v["metadata"]["generatedAt"] = json!(null);
        v
    };
    assert_eq!(strip(&first.document), strip(&second.document));
}
