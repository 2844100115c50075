//! Fixed library of pre-authored components.
//!
//! Each record pairs a section type and variant with authored default props
//! and the keywords the matcher scores against. Built once at startup and
//! never mutated; dataset order is the tie-break for equal scores.

use serde_json::{json, Value};

use crate::types::{PropMap, SectionType};

/// One pre-authored component the matcher can select.
#[derive(Debug, Clone)]
pub struct DatasetRecord {
    pub section_type: SectionType,
    pub variant: &'static str,
    pub keywords: &'static [&'static str],
    pub props: PropMap,
}

fn record(
    section_type: SectionType,
    variant: &'static str,
    keywords: &'static [&'static str],
    props: Value,
) -> DatasetRecord {
    let props = match props {
        Value::Object(map) => map,
        _ => PropMap::new(),
    };
    DatasetRecord {
        section_type,
        variant,
        keywords,
        props,
    }
}

/// The built-in component library.
pub fn builtin_dataset() -> Vec<DatasetRecord> {
    vec![
        record(
            SectionType::Header,
            "minimal",
            &["clean", "simple", "minimal", "modern", "landing", "portfolio"],
            json!({ "links": ["Home", "About", "Contact"] }),
        ),
        record(
            SectionType::Header,
            "navigation",
            &["shop", "store", "retail", "corporate", "multi", "pages"],
            json!({ "links": ["Home", "Shop", "About", "Contact"], "showCart": true }),
        ),
        record(
            SectionType::Hero,
            "standard",
            &["business", "startup", "modern", "service", "local", "welcome"],
            json!({ "cta": "Learn More", "image": "placeholder://hero" }),
        ),
        record(
            SectionType::Hero,
            "split",
            &["restaurant", "food", "photo", "visual", "showcase", "product"],
            json!({ "cta": "See More", "image": "placeholder://hero-split" }),
        ),
        record(
            SectionType::Hero,
            "video",
            &["video", "motion", "launch", "event", "film"],
            json!({ "cta": "Watch", "poster": "placeholder://hero-video" }),
        ),
        record(
            SectionType::Features,
            "grid",
            &["features", "services", "benefits", "tech", "software", "modern"],
            json!({ "columns": 3 }),
        ),
        record(
            SectionType::Features,
            "list",
            &["process", "steps", "details", "how", "explain"],
            json!({ "numbered": true }),
        ),
        record(
            SectionType::Testimonials,
            "cards",
            &["reviews", "testimonials", "customers", "feedback", "trust", "rated"],
            json!({
                "items": [
                    { "quote": "Exactly what we needed.", "author": "A happy customer" }
                ]
            }),
        ),
        record(
            SectionType::Testimonials,
            "carousel",
            &["rotating", "quotes", "stories", "clients"],
            json!({ "autoplay": true }),
        ),
        record(
            SectionType::Pricing,
            "tiers",
            &["pricing", "plans", "subscription", "membership", "saas", "gym"],
            json!({
                "items": [
                    { "name": "Starter", "price": "$9", "period": "month" },
                    { "name": "Pro", "price": "$29", "period": "month" }
                ]
            }),
        ),
        record(
            SectionType::Cta,
            "banner",
            &["signup", "started", "contact", "conversion", "join", "trial"],
            json!({ "button": "Get Started" }),
        ),
        record(
            SectionType::Faq,
            "accordion",
            &["faq", "questions", "answers", "help", "support"],
            json!({
                "items": [
                    { "question": "How do I get started?", "answer": "Reach out and we'll walk you through it." }
                ]
            }),
        ),
        record(
            SectionType::Stats,
            "counters",
            &["stats", "numbers", "metrics", "results", "achievements", "experience"],
            json!({
                "items": [
                    { "label": "Happy clients", "value": "500+" },
                    { "label": "Years in business", "value": "10" }
                ]
            }),
        ),
        record(
            SectionType::Team,
            "grid",
            &["team", "staff", "people", "trainers", "doctors", "founders"],
            json!({
                "items": [
                    { "name": "Team Member", "role": "Role", "image": "placeholder://team-1" }
                ]
            }),
        ),
        record(
            SectionType::Newsletter,
            "inline",
            &["newsletter", "subscribe", "email", "updates", "list"],
            json!({ "placeholder": "you@example.com", "button": "Subscribe" }),
        ),
        record(
            SectionType::Footer,
            "columns",
            &["footer", "links", "corporate", "sitemap", "business"],
            json!({ "columns": ["Company", "Resources", "Legal"] }),
        ),
        record(
            SectionType::Footer,
            "simple",
            &["simple", "minimal", "compact", "portfolio"],
            json!({}),
        ),
        record(
            SectionType::Menu,
            "classic",
            &["menu", "restaurant", "food", "dishes", "cuisine", "italian", "cafe"],
            json!({
                "items": [
                    { "name": "House Special", "description": "Ask your server", "price": "$16", "image": "placeholder://menu-item" }
                ]
            }),
        ),
        record(
            SectionType::ProductShowcase,
            "grid",
            &["products", "shop", "retail", "catalog", "store", "collection"],
            json!({
                "items": [
                    { "name": "Featured Item", "price": "$25", "image": "placeholder://product" }
                ]
            }),
        ),
        record(
            SectionType::BookingSystem,
            "calendar",
            &["booking", "appointment", "reservation", "schedule", "classes"],
            json!({ "slotMinutes": 30 }),
        ),
        record(
            SectionType::Gallery,
            "masonry",
            &["gallery", "photos", "portfolio", "work", "images", "visual"],
            json!({
                "images": ["placeholder://gallery-1", "placeholder://gallery-2"]
            }),
        ),
    ]
}
