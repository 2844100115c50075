//! Section types and the section record itself.
//!
//! A section is the unit the renderer consumes: a type from a closed
//! enumeration, a presentational variant, and an open props bag. Props stay
//! permissive on purpose (shapes vary per variant and partial data is
//! valid); the closed type enum and variant validation are the boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open string-keyed props for a section.
pub type PropMap = Map<String, Value>;

/// Closed set of section types the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    Header,
    Hero,
    Features,
    Testimonials,
    Pricing,
    Cta,
    Faq,
    Stats,
    Team,
    Newsletter,
    Footer,
    Menu,
    ProductShowcase,
    BookingSystem,
    Gallery,
    About,
    Contact,
}

impl SectionType {
    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Testimonials => "testimonials",
            Self::Pricing => "pricing",
            Self::Cta => "cta",
            Self::Faq => "faq",
            Self::Stats => "stats",
            Self::Team => "team",
            Self::Newsletter => "newsletter",
            Self::Footer => "footer",
            Self::Menu => "menu",
            Self::ProductShowcase => "productShowcase",
            Self::BookingSystem => "bookingSystem",
            Self::Gallery => "gallery",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Default presentational variant when neither the industry config nor
    /// the dataset names one.
    pub fn default_variant(&self) -> &'static str {
        match self {
            Self::Header => "minimal",
            Self::Hero => "standard",
            Self::Features => "grid",
            _ => "default",
        }
    }

    /// Known presentational variants per type.
    ///
    /// Always includes the type default; an unrecognized variant string
    /// falls back to [`SectionType::default_variant`].
    pub fn known_variants(&self) -> &'static [&'static str] {
        match self {
            Self::Header => &["minimal", "navigation", "centered"],
            Self::Hero => &["standard", "split", "video", "fullscreen"],
            Self::Features => &["grid", "list", "alternating"],
            Self::Testimonials => &["default", "cards", "carousel", "quotes"],
            Self::Pricing => &["default", "tiers", "comparison"],
            Self::Cta => &["default", "banner", "boxed"],
            Self::Faq => &["default", "accordion", "two-column"],
            Self::Stats => &["default", "counters", "inline"],
            Self::Team => &["default", "grid", "carousel"],
            Self::Newsletter => &["default", "inline", "boxed"],
            Self::Footer => &["default", "columns", "simple"],
            Self::Menu => &["default", "classic", "tabbed", "cards"],
            Self::ProductShowcase => &["default", "grid", "featured"],
            Self::BookingSystem => &["default", "calendar", "form"],
            Self::Gallery => &["default", "masonry", "grid", "slider"],
            Self::About => &["default", "split"],
            Self::Contact => &["default", "map"],
        }
    }

    /// Validate a variant string against the known set, falling back to the
    /// type default.
    pub fn validated_variant(&self, variant: &str) -> String {
        if self.known_variants().contains(&variant) {
            variant.to_string()
        } else {
            self.default_variant().to_string()
        }
    }

    /// Position in the canonical render order.
    ///
    /// Header first, footer last; types outside the fixed canonical list
    /// keep their scan order between cta and footer.
    pub(crate) fn canonical_rank(&self) -> u8 {
        match self {
            Self::Header => 0,
            Self::Hero => 1,
            Self::Features => 2,
            Self::Testimonials => 3,
            Self::Cta => 4,
            Self::Footer => 6,
            _ => 5,
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable unit of the website document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section type from the closed enumeration.
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Presentational skin. Always one of the type's known variants.
    pub variant: String,

    /// Open props bag consumed by the renderer.
    #[serde(default)]
    pub props: PropMap,
}

impl Section {
    /// Create a section, validating the variant against the type.
    pub fn new(section_type: SectionType, variant: &str, props: PropMap) -> Self {
        Self {
            section_type,
            variant: section_type.validated_variant(variant),
            props,
        }
    }
}

/// Sort sections into canonical render order.
///
/// Stable: ties (including everything outside the fixed canonical list)
/// keep their existing relative order.
pub fn sort_canonical(sections: &mut [Section]) {
    sections.sort_by_key(|s| s.section_type.canonical_rank());
}
