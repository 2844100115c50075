//! Default-prop synthesis.
//!
//! Pure functions, no I/O. Merges three layers, later wins: generic
//! hard-coded fallbacks, industry content templates, and extracted business
//! facts substituted into `{business}`/`{service}`/`{industry}`
//! placeholders. Guarantees the renderer always gets a non-empty
//! `header.logo`, `footer.companyName`, and `hero.title`.

use serde_json::{json, Value};

use crate::extract::ExtractedInfo;
use crate::registry::IndustryConfig;
use crate::types::{PropMap, SectionType};

/// Shallow merge of two prop maps; `overlay` keys win.
pub fn merge_props(base: &PropMap, overlay: &PropMap) -> PropMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn business_name(info: &ExtractedInfo, industry: &str) -> String {
    if let Some(name) = info.business_name.as_deref() {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    let industry = industry.trim();
    if industry.is_empty() {
        "My Business".to_string()
    } else {
        format!("{} Business", capitalize(industry))
    }
}

fn main_service(info: &ExtractedInfo) -> String {
    info.main_service
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("quality products and services")
        .to_string()
}

/// Substitute `{business}`/`{service}`/`{industry}` in every string value.
fn substitute(value: &mut Value, vars: &[(&str, &str)]) {
    match value {
        Value::String(s) => {
            for (placeholder, replacement) in vars {
                if s.contains(placeholder) {
                    *s = s.replace(placeholder, replacement);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                substitute(item, vars);
            }
        }
        Value::Object(map) => {
            for v in map.values_mut() {
                substitute(v, vars);
            }
        }
        _ => {}
    }
}

fn ensure_non_empty(props: &mut PropMap, key: &str, fallback: &str) {
    let missing = match props.get(key) {
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => true,
    };
    if missing {
        props.insert(key.to_string(), Value::String(fallback.to_string()));
    }
}

fn generic_feature_items() -> Value {
    json!([
        { "title": "Quality First", "description": "Work we stand behind, every time." },
        { "title": "Local and Trusted", "description": "Serving our community for years." },
        { "title": "Here to Help", "description": "Questions answered by real people." }
    ])
}

fn generic_props(
    section_type: SectionType,
    variant: &str,
    info: &ExtractedInfo,
    config: Option<&IndustryConfig>,
) -> Value {
    match section_type {
        SectionType::Header => json!({
            "logo": "{business}",
            "links": ["Home", "About", "Contact"],
            "cta": "Get in Touch"
        }),
        SectionType::Hero => {
            let mut hero = json!({
                "title": "Welcome to {business}",
                "subtitle": "We provide {service}.",
                "cta": "Learn More",
                "image": "placeholder://hero"
            });
            if let Some(usp) = info
                .unique_selling_point
                .as_deref()
                .filter(|s| !s.trim().is_empty())
            {
                hero["highlight"] = Value::String(format!("Known for {}", usp.trim()));
            }
            hero
        }
        SectionType::Features => {
            let items = config
                .filter(|c| !c.feature_list.is_empty())
                .and_then(|c| serde_json::to_value(&c.feature_list).ok())
                .unwrap_or_else(generic_feature_items);
            json!({
                "title": "Why Choose {business}",
                "items": items,
                "layout": if variant == "list" { "numbered" } else { "columns" }
            })
        }
        SectionType::Menu => json!({
            "title": "Our Menu",
            "items": [
                {
                    "name": "House Favorite",
                    "description": "Ask us what's fresh today",
                    "price": "$15",
                    "image": "placeholder://menu-item"
                }
            ]
        }),
        SectionType::Testimonials => json!({
            "title": "What People Say",
            "items": [
                {
                    "quote": "{business} exceeded our expectations.",
                    "author": "A satisfied customer"
                }
            ]
        }),
        SectionType::Cta => json!({
            "title": "Ready to work with {business}?",
            "button": "Contact Us"
        }),
        SectionType::Footer => json!({
            "companyName": "{business}",
            "tagline": "Quality {industry} services.",
            "links": ["Privacy", "Terms"]
        }),
        // Other types rely on renderer-level defaults (or industry content,
        // applied by the caller of this match).
        _ => json!({}),
    }
}

/// Synthesize the props object for a section.
///
/// Layering: generic fallback ← industry content template ← placeholder
/// substitution from extracted facts. Never fails, never returns missing
/// mandatory text fields for header/hero/footer.
pub fn synthesize_props(
    section_type: SectionType,
    variant: &str,
    info: &ExtractedInfo,
    config: Option<&IndustryConfig>,
    industry: &str,
) -> PropMap {
    let business = business_name(info, industry);
    let service = main_service(info);
    let industry_title = if industry.trim().is_empty() {
        "business".to_string()
    } else {
        industry.trim().to_lowercase()
    };
    let vars: [(&str, &str); 3] = [
        ("{business}", &business),
        ("{service}", &service),
        ("{industry}", &industry_title),
    ];

    let mut merged = match generic_props(section_type, variant, info, config) {
        Value::Object(map) => map,
        _ => PropMap::new(),
    };

    if let Some(Value::Object(template)) = config.and_then(|c| c.content_for(section_type)) {
        merged = merge_props(&merged, template);
    }

    let mut value = Value::Object(merged);
    substitute(&mut value, &vars);
    let mut props = match value {
        Value::Object(map) => map,
        _ => PropMap::new(),
    };

    match section_type {
        SectionType::Header => ensure_non_empty(&mut props, "logo", &business),
        SectionType::Hero => ensure_non_empty(&mut props, "title", &format!("Welcome to {}", business)),
        SectionType::Footer => ensure_non_empty(&mut props, "companyName", &business),
        _ => {}
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::IndustryRegistry;

    fn info_with_name(name: &str) -> ExtractedInfo {
        ExtractedInfo {
            business_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_industry_still_has_mandatory_fields() {
        let info = ExtractedInfo::default();

        let header = synthesize_props(SectionType::Header, "minimal", &info, None, "plumbing");
        assert_eq!(header["logo"], "Plumbing Business");

        let hero = synthesize_props(SectionType::Hero, "standard", &info, None, "plumbing");
        assert!(!hero["title"].as_str().unwrap().is_empty());

        let footer = synthesize_props(SectionType::Footer, "columns", &info, None, "plumbing");
        assert_eq!(footer["companyName"], "Plumbing Business");
    }

    #[test]
    fn test_empty_industry_falls_back_to_generic_name() {
        let header =
            synthesize_props(SectionType::Header, "minimal", &ExtractedInfo::default(), None, "");
        assert_eq!(header["logo"], "My Business");
    }

    #[test]
    fn test_extracted_name_substituted_into_templates() {
        let registry = IndustryRegistry::builtin();
        let config = registry.config("restaurant");
        let hero = synthesize_props(
            SectionType::Hero,
            "split",
            &info_with_name("Bella Vista"),
            config,
            "restaurant",
        );
        assert_eq!(hero["title"], "Welcome to Bella Vista");
    }

    #[test]
    fn test_industry_content_overrides_generic() {
        let registry = IndustryRegistry::builtin();
        let config = registry.config("restaurant");
        let menu = synthesize_props(
            SectionType::Menu,
            "classic",
            &ExtractedInfo::default(),
            config,
            "restaurant",
        );
        // Industry template supplies the real menu items.
        let items = menu["items"].as_array().unwrap();
        assert_eq!(items[0]["name"], "Margherita");
    }

    #[test]
    fn test_features_use_industry_feature_list() {
        let registry = IndustryRegistry::builtin();
        let config = registry.config("fitness");
        let features = synthesize_props(
            SectionType::Features,
            "grid",
            &ExtractedInfo::default(),
            config,
            "fitness",
        );
        let items = features["items"].as_array().unwrap();
        assert_eq!(items[0]["title"], "Personal Coaching");
    }

    #[test]
    fn test_unknown_section_type_yields_empty() {
        let props = synthesize_props(
            SectionType::Stats,
            "counters",
            &ExtractedInfo::default(),
            None,
            "technology",
        );
        assert!(props.is_empty());
    }

    #[test]
    fn test_merge_props_overlay_wins() {
        let base = match json!({ "a": 1, "b": 2 }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let overlay = match json!({ "b": 3, "c": 4 }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        let merged = merge_props(&base, &overlay);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 3);
        assert_eq!(merged["c"], 4);
    }
}
