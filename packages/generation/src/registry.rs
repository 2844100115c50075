//! Industry template registry.
//!
//! Read-only reference data: per-industry section sets, style palettes,
//! default variants, and content snippets. Built once at process start and
//! shared behind an `Arc`; unknown industries yield `None` and every
//! consumer falls back to generic defaults instead of failing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::{ColorPalette, SectionType};

/// Template tier. Each tier is an additive superset of the one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Standard,
    Premium,
    Enterprise,
}

/// Per-industry section lists, grouped by tier contribution.
#[derive(Debug, Clone, Default)]
pub struct SectionSets {
    pub required: Vec<SectionType>,
    pub optional: Vec<SectionType>,
    pub advanced: Vec<SectionType>,
    pub industry_specific: Vec<SectionType>,
}

impl SectionSets {
    /// Resolve the section list for a tier.
    ///
    /// basic = required; standard = + first 2 optional; premium = + all
    /// optional + first 2 advanced; enterprise = everything including
    /// industry-specific. Order-preserving, duplicates removed.
    pub fn for_tier(&self, tier: Tier) -> Vec<SectionType> {
        let mut out: Vec<SectionType> = Vec::new();
        let push = |types: &[SectionType], out: &mut Vec<SectionType>| {
            for t in types {
                if !out.contains(t) {
                    out.push(*t);
                }
            }
        };

        push(&self.required, &mut out);
        match tier {
            Tier::Basic => {}
            Tier::Standard => {
                push(&self.optional[..self.optional.len().min(2)], &mut out);
            }
            Tier::Premium => {
                push(&self.optional, &mut out);
                push(&self.advanced[..self.advanced.len().min(2)], &mut out);
            }
            Tier::Enterprise => {
                push(&self.optional, &mut out);
                push(&self.advanced, &mut out);
                push(&self.industry_specific, &mut out);
            }
        }
        out
    }
}

/// A title/description pair used to fill feature grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSnippet {
    pub title: String,
    pub description: String,
}

impl FeatureSnippet {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Immutable configuration for one industry.
///
/// Content snippets may contain `{business}`, `{service}`, and `{industry}`
/// placeholders; the props synthesizer substitutes them.
#[derive(Debug, Clone)]
pub struct IndustryConfig {
    pub name: String,
    palettes: HashMap<String, ColorPalette>,
    pub components: SectionSets,
    pub feature_list: Vec<FeatureSnippet>,
    content: HashMap<SectionType, Value>,
    variants: HashMap<SectionType, String>,
}

impl IndustryConfig {
    /// Content template for a section type, if this industry defines one.
    pub fn content_for(&self, section_type: SectionType) -> Option<&Value> {
        self.content.get(&section_type)
    }

    /// Industry-preferred variant for a section type.
    pub fn variant_for(&self, section_type: SectionType) -> Option<&str> {
        self.variants.get(&section_type).map(String::as_str)
    }

    /// Palette for a style, falling back to the industry's modern palette.
    pub fn palette_for(&self, style: &str) -> Option<&ColorPalette> {
        self.palettes
            .get(&style.to_lowercase())
            .or_else(|| self.palettes.get("modern"))
    }
}

/// Lookup table over all built-in industries.
pub struct IndustryRegistry {
    industries: HashMap<String, IndustryConfig>,
}

impl IndustryRegistry {
    /// Build the registry with all built-in industries.
    pub fn builtin() -> Self {
        let configs = [
            restaurant(),
            fitness(),
            technology(),
            retail(),
            healthcare(),
            portfolio(),
        ];
        let industries = configs
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        Self { industries }
    }

    /// Config for an industry, keyed by lowercased name. Unknown ⇒ `None`.
    pub fn config(&self, industry: &str) -> Option<&IndustryConfig> {
        self.industries.get(industry.trim().to_lowercase().as_str())
    }

    /// Section list for an industry at a tier.
    ///
    /// Unknown industries get the generic section sets so tier resolution
    /// still works (and stays monotonic).
    pub fn sections_for_tier(&self, industry: &str, tier: Tier) -> Vec<SectionType> {
        match self.config(industry) {
            Some(config) => config.components.for_tier(tier),
            None => generic_sections().for_tier(tier),
        }
    }

    /// Default variant for a section type in an industry.
    pub fn variant(&self, industry: &str, section_type: SectionType) -> String {
        self.config(industry)
            .and_then(|c| c.variant_for(section_type))
            .unwrap_or(section_type.default_variant())
            .to_string()
    }

    /// Palette for an industry/style pair, with generic fallback.
    pub fn palette(&self, industry: &str, style: &str) -> ColorPalette {
        self.config(industry)
            .and_then(|c| c.palette_for(style))
            .cloned()
            .unwrap_or_default()
    }

    /// Names of all registered industries.
    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.industries.keys().map(String::as_str)
    }
}

/// Section sets used when the industry is unknown.
fn generic_sections() -> SectionSets {
    SectionSets {
        required: vec![
            SectionType::Header,
            SectionType::Hero,
            SectionType::Features,
            SectionType::Footer,
        ],
        optional: vec![SectionType::Testimonials, SectionType::About, SectionType::Cta],
        advanced: vec![SectionType::Faq, SectionType::Stats, SectionType::Newsletter],
        industry_specific: vec![],
    }
}

fn palettes(entries: &[(&str, ColorPalette)]) -> HashMap<String, ColorPalette> {
    entries
        .iter()
        .map(|(style, palette)| (style.to_string(), palette.clone()))
        .collect()
}

fn variants(entries: &[(SectionType, &str)]) -> HashMap<SectionType, String> {
    entries
        .iter()
        .map(|(section_type, variant)| (*section_type, variant.to_string()))
        .collect()
}

fn content(entries: Vec<(SectionType, Value)>) -> HashMap<SectionType, Value> {
    entries.into_iter().collect()
}

fn restaurant() -> IndustryConfig {
    IndustryConfig {
        name: "restaurant".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#7f1d1d", "#1c1917", "#f59e0b")),
            ("classic", ColorPalette::new("#713f12", "#44403c", "#b45309")),
            ("bold", ColorPalette::new("#b91c1c", "#111827", "#fbbf24")),
            ("minimal", ColorPalette::new("#292524", "#57534e", "#a8a29e")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::Menu,
                SectionType::Features,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::Testimonials,
                SectionType::Gallery,
                SectionType::About,
            ],
            advanced: vec![
                SectionType::Newsletter,
                SectionType::Stats,
                SectionType::Faq,
            ],
            industry_specific: vec![SectionType::BookingSystem],
        },
        feature_list: vec![
            FeatureSnippet::new(
                "Seasonal Kitchen",
                "Menus built around what the market brings in each week.",
            ),
            FeatureSnippet::new(
                "Warm Atmosphere",
                "A dining room that works for date nights and family tables alike.",
            ),
            FeatureSnippet::new(
                "Private Events",
                "Host dinners and celebrations with a dedicated menu.",
            ),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "Welcome to {business}",
                    "subtitle": "Seasonal cooking, warm service, and a table waiting for you.",
                    "cta": "View Menu",
                    "image": "placeholder://hero-restaurant"
                }),
            ),
            (
                SectionType::Menu,
                json!({
                    "title": "Our Menu",
                    "items": [
                        {
                            "name": "Margherita",
                            "description": "San Marzano tomatoes, fior di latte, basil",
                            "price": "$14",
                            "image": "placeholder://menu-1"
                        },
                        {
                            "name": "Tagliatelle al Ragù",
                            "description": "Slow-braised beef, hand-cut pasta",
                            "price": "$19",
                            "image": "placeholder://menu-2"
                        },
                        {
                            "name": "Tiramisù",
                            "description": "Espresso-soaked savoiardi, mascarpone",
                            "price": "$9",
                            "image": "placeholder://menu-3"
                        }
                    ]
                }),
            ),
            (
                SectionType::Cta,
                json!({
                    "title": "Book a table at {business}",
                    "button": "Reserve Now"
                }),
            ),
            (
                SectionType::Testimonials,
                json!({
                    "title": "What our guests say",
                    "items": [
                        {
                            "quote": "The pasta is the best in the neighborhood, full stop.",
                            "author": "Maria L."
                        },
                        {
                            "quote": "Booked for a birthday dinner and the staff made the night.",
                            "author": "James T."
                        }
                    ]
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Header, "centered"),
            (SectionType::Hero, "split"),
            (SectionType::Menu, "classic"),
            (SectionType::Footer, "columns"),
        ]),
    }
}

fn fitness() -> IndustryConfig {
    IndustryConfig {
        name: "fitness".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#0f172a", "#1e293b", "#84cc16")),
            ("classic", ColorPalette::new("#1e3a8a", "#334155", "#f97316")),
            ("bold", ColorPalette::new("#dc2626", "#0f172a", "#facc15")),
            ("minimal", ColorPalette::new("#18181b", "#3f3f46", "#22c55e")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::Features,
                SectionType::Pricing,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::Testimonials,
                SectionType::Team,
                SectionType::Stats,
            ],
            advanced: vec![SectionType::Faq, SectionType::Newsletter],
            industry_specific: vec![SectionType::BookingSystem],
        },
        feature_list: vec![
            FeatureSnippet::new(
                "Personal Coaching",
                "One-on-one programs tailored to your goals.",
            ),
            FeatureSnippet::new(
                "Group Classes",
                "Daily classes from strength to mobility, all levels welcome.",
            ),
            FeatureSnippet::new(
                "Open 24/7",
                "Train on your schedule with round-the-clock access.",
            ),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "Train with {business}",
                    "subtitle": "Coaching, community, and a plan that fits your life.",
                    "cta": "Start Free Week",
                    "image": "placeholder://hero-fitness"
                }),
            ),
            (
                SectionType::Pricing,
                json!({
                    "title": "Memberships",
                    "items": [
                        {"name": "Drop-in", "price": "$15", "period": "visit"},
                        {"name": "Monthly", "price": "$59", "period": "month"},
                        {"name": "Annual", "price": "$590", "period": "year"}
                    ]
                }),
            ),
            (
                SectionType::Cta,
                json!({
                    "title": "Your first week is on us",
                    "button": "Claim Free Week"
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Hero, "fullscreen"),
            (SectionType::Pricing, "tiers"),
            (SectionType::Stats, "counters"),
        ]),
    }
}

fn technology() -> IndustryConfig {
    IndustryConfig {
        name: "technology".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#0f172a", "#1e40af", "#38bdf8")),
            ("classic", ColorPalette::new("#1e3a8a", "#312e81", "#6366f1")),
            ("bold", ColorPalette::new("#4c1d95", "#111827", "#a855f7")),
            ("minimal", ColorPalette::new("#111827", "#374151", "#60a5fa")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::Features,
                SectionType::Cta,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::Pricing,
                SectionType::Testimonials,
                SectionType::Faq,
            ],
            advanced: vec![
                SectionType::Stats,
                SectionType::Team,
                SectionType::Newsletter,
            ],
            industry_specific: vec![SectionType::ProductShowcase],
        },
        feature_list: vec![
            FeatureSnippet::new(
                "Ship Faster",
                "Automate the busywork and get releases out the door.",
            ),
            FeatureSnippet::new(
                "Secure by Default",
                "SSO, audit logs, and encryption at rest on every plan.",
            ),
            FeatureSnippet::new(
                "Integrates Everywhere",
                "Connect the tools your team already uses in minutes.",
            ),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "{business} — {service}",
                    "subtitle": "The platform teams reach for when spreadsheets stop scaling.",
                    "cta": "Start Free Trial",
                    "image": "placeholder://hero-technology"
                }),
            ),
            (
                SectionType::Cta,
                json!({
                    "title": "Ready to try {business}?",
                    "button": "Get Started"
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Hero, "split"),
            (SectionType::Features, "grid"),
            (SectionType::Pricing, "comparison"),
        ]),
    }
}

fn retail() -> IndustryConfig {
    IndustryConfig {
        name: "retail".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#831843", "#1f2937", "#f472b6")),
            ("classic", ColorPalette::new("#78350f", "#292524", "#d97706")),
            ("bold", ColorPalette::new("#be123c", "#111827", "#fb7185")),
            ("minimal", ColorPalette::new("#1c1917", "#44403c", "#e7e5e4")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::ProductShowcase,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::Features,
                SectionType::Testimonials,
                SectionType::Newsletter,
            ],
            advanced: vec![SectionType::Stats, SectionType::Faq],
            industry_specific: vec![SectionType::Gallery],
        },
        feature_list: vec![
            FeatureSnippet::new("Free Shipping", "On every order over $50, no code needed."),
            FeatureSnippet::new("Easy Returns", "30 days, no questions asked."),
            FeatureSnippet::new(
                "Curated Collections",
                "New drops every season, picked by our buyers.",
            ),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "Shop {business}",
                    "subtitle": "Pieces you'll actually wear, made to last.",
                    "cta": "Browse the Collection",
                    "image": "placeholder://hero-retail"
                }),
            ),
            (
                SectionType::ProductShowcase,
                json!({
                    "title": "Featured Products",
                    "items": [
                        {"name": "The Staple Tee", "price": "$28", "image": "placeholder://product-1"},
                        {"name": "Everyday Tote", "price": "$42", "image": "placeholder://product-2"},
                        {"name": "Wool Beanie", "price": "$24", "image": "placeholder://product-3"}
                    ]
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Header, "navigation"),
            (SectionType::ProductShowcase, "grid"),
            (SectionType::Newsletter, "boxed"),
        ]),
    }
}

fn healthcare() -> IndustryConfig {
    IndustryConfig {
        name: "healthcare".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#0c4a6e", "#164e63", "#2dd4bf")),
            ("classic", ColorPalette::new("#1e3a8a", "#075985", "#38bdf8")),
            ("bold", ColorPalette::new("#0e7490", "#0f172a", "#5eead4")),
            ("minimal", ColorPalette::new("#134e4a", "#334155", "#99f6e4")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::Features,
                SectionType::Contact,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::Team,
                SectionType::Testimonials,
                SectionType::Faq,
            ],
            advanced: vec![SectionType::Stats, SectionType::Newsletter],
            industry_specific: vec![SectionType::BookingSystem],
        },
        feature_list: vec![
            FeatureSnippet::new(
                "Same-Week Appointments",
                "Most new patients are seen within five business days.",
            ),
            FeatureSnippet::new(
                "Insurance Friendly",
                "We work with all major insurance networks.",
            ),
            FeatureSnippet::new(
                "Patient Portal",
                "Results, records, and refills in one place.",
            ),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "Care you can count on at {business}",
                    "subtitle": "Modern medicine with an old-fashioned bedside manner.",
                    "cta": "Book an Appointment",
                    "image": "placeholder://hero-healthcare"
                }),
            ),
            (
                SectionType::Contact,
                json!({
                    "title": "Visit Us",
                    "phoneLabel": "Call the front desk",
                    "hours": "Mon–Fri 8am–6pm, Sat 9am–1pm"
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Hero, "standard"),
            (SectionType::Contact, "map"),
            (SectionType::Team, "grid"),
        ]),
    }
}

fn portfolio() -> IndustryConfig {
    IndustryConfig {
        name: "portfolio".to_string(),
        palettes: palettes(&[
            ("modern", ColorPalette::new("#18181b", "#27272a", "#eab308")),
            ("classic", ColorPalette::new("#1c1917", "#44403c", "#c084fc")),
            ("bold", ColorPalette::new("#111827", "#312e81", "#f43f5e")),
            ("minimal", ColorPalette::new("#0a0a0a", "#404040", "#d4d4d4")),
        ]),
        components: SectionSets {
            required: vec![
                SectionType::Header,
                SectionType::Hero,
                SectionType::Gallery,
                SectionType::Footer,
            ],
            optional: vec![
                SectionType::About,
                SectionType::Testimonials,
                SectionType::Contact,
            ],
            advanced: vec![SectionType::Stats, SectionType::Newsletter],
            industry_specific: vec![SectionType::ProductShowcase],
        },
        feature_list: vec![
            FeatureSnippet::new("Selected Work", "A decade of projects across print and digital."),
            FeatureSnippet::new("Process First", "Every engagement starts with research, not mockups."),
            FeatureSnippet::new("Collaborations", "Open to commissions and studio partnerships."),
        ],
        content: content(vec![
            (
                SectionType::Hero,
                json!({
                    "title": "{business}",
                    "subtitle": "Selected work and ongoing projects.",
                    "cta": "See the Work",
                    "image": "placeholder://hero-portfolio"
                }),
            ),
            (
                SectionType::Gallery,
                json!({
                    "title": "Selected Work",
                    "images": [
                        "placeholder://gallery-1",
                        "placeholder://gallery-2",
                        "placeholder://gallery-3",
                        "placeholder://gallery-4"
                    ]
                }),
            ),
        ]),
        variants: variants(&[
            (SectionType::Header, "minimal"),
            (SectionType::Hero, "fullscreen"),
            (SectionType::Gallery, "masonry"),
            (SectionType::Footer, "simple"),
        ]),
    }
}
