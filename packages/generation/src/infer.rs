//! Section inference from description keywords.
//!
//! Maps description text to section-type mentions via per-type keyword
//! tables, then guarantees the minimal mandatory set. Scan order is just
//! table order; the orchestrator re-sorts into canonical order later.

use crate::types::SectionType;

const MENU_KEYWORDS: &[&str] = &[
    "menu", "dish", "dishes", "food", "cuisine", "meal", "chef", "restaurant", "cafe",
];

const TESTIMONIAL_KEYWORDS: &[&str] = &[
    "testimonial",
    "review",
    "reviews",
    "customers say",
    "feedback",
    "rated",
    "trusted by",
];

const PRICING_KEYWORDS: &[&str] = &[
    "pricing",
    "price",
    "plan",
    "plans",
    "subscription",
    "membership",
    "package",
];

const FAQ_KEYWORDS: &[&str] = &["faq", "frequently asked", "questions", "how does it work"];

const STATS_KEYWORDS: &[&str] = &[
    "stats",
    "statistics",
    "years of experience",
    "clients served",
    "award",
    "milestones",
];

const TEAM_KEYWORDS: &[&str] = &[
    "team", "staff", "founder", "founders", "instructors", "trainers", "doctors",
];

const NEWSLETTER_KEYWORDS: &[&str] = &["newsletter", "subscribe", "mailing list", "stay updated"];

const BOOKING_KEYWORDS: &[&str] = &[
    "booking",
    "book a",
    "appointment",
    "reservation",
    "reservations",
    "schedule a",
];

const GALLERY_KEYWORDS: &[&str] = &["gallery", "photos", "portfolio", "our work", "showcase"];

const PRODUCT_KEYWORDS: &[&str] = &[
    "product", "products", "shop", "store", "catalog", "merchandise", "collection",
];

const CTA_KEYWORDS: &[&str] = &[
    "sign up",
    "get started",
    "contact us",
    "call now",
    "join",
    "free trial",
];

const ABOUT_KEYWORDS: &[&str] = &["about us", "our story", "our history", "our mission"];

const CONTACT_KEYWORDS: &[&str] = &["contact", "reach us", "visit us", "location", "directions"];

/// Keyword table in scan order.
const SECTION_KEYWORDS: &[(SectionType, &[&str])] = &[
    (SectionType::Menu, MENU_KEYWORDS),
    (SectionType::Testimonials, TESTIMONIAL_KEYWORDS),
    (SectionType::Pricing, PRICING_KEYWORDS),
    (SectionType::Faq, FAQ_KEYWORDS),
    (SectionType::Stats, STATS_KEYWORDS),
    (SectionType::Team, TEAM_KEYWORDS),
    (SectionType::Newsletter, NEWSLETTER_KEYWORDS),
    (SectionType::BookingSystem, BOOKING_KEYWORDS),
    (SectionType::Gallery, GALLERY_KEYWORDS),
    (SectionType::ProductShowcase, PRODUCT_KEYWORDS),
    (SectionType::Cta, CTA_KEYWORDS),
    (SectionType::About, ABOUT_KEYWORDS),
    (SectionType::Contact, CONTACT_KEYWORDS),
];

/// Infer the section-type list for a description.
///
/// A type is "mentioned" when any of its keywords appears in the lowercased
/// description or industry string. Header and hero are positionally pinned
/// at the front; features and footer are appended if absent.
pub fn infer_sections(description: &str, industry: &str) -> Vec<SectionType> {
    let text = format!("{} {}", description, industry).to_lowercase();

    let mut sections: Vec<SectionType> = SECTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(section_type, _)| *section_type)
        .collect();

    if !sections.contains(&SectionType::Hero) {
        sections.insert(0, SectionType::Hero);
    }
    if !sections.contains(&SectionType::Header) {
        sections.insert(0, SectionType::Header);
    }
    if !sections.contains(&SectionType::Features) {
        sections.push(SectionType::Features);
    }
    if !sections.contains(&SectionType::Footer) {
        sections.push(SectionType::Footer);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_sections_always_present() {
        let sections = infer_sections("", "");
        assert_eq!(sections[0], SectionType::Header);
        assert_eq!(sections[1], SectionType::Hero);
        assert!(sections.contains(&SectionType::Features));
        assert_eq!(*sections.last().unwrap(), SectionType::Footer);
    }

    #[test]
    fn test_restaurant_description_mentions_menu() {
        let sections = infer_sections(
            "An Italian restaurant with a seasonal menu and online reservations",
            "restaurant",
        );
        assert!(sections.contains(&SectionType::Menu));
        assert!(sections.contains(&SectionType::BookingSystem));
    }

    #[test]
    fn test_industry_string_contributes_keywords() {
        let sections = infer_sections("A cozy neighborhood spot", "restaurant");
        assert!(sections.contains(&SectionType::Menu));
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let sections = infer_sections("Read our CUSTOMER Reviews and PRICING", "technology");
        assert!(sections.contains(&SectionType::Testimonials));
        assert!(sections.contains(&SectionType::Pricing));
    }

    #[test]
    fn test_header_and_hero_pinned_in_front() {
        let sections = infer_sections("our team, gallery and newsletter", "portfolio");
        assert_eq!(sections[0], SectionType::Header);
        assert_eq!(sections[1], SectionType::Hero);
    }
}
