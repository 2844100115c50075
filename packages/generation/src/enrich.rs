//! Post-hoc image enrichment.
//!
//! Walks a finished document and swaps placeholder image markers for real
//! URLs, assigned round-robin from a fetched pool. One image index advances
//! across the whole traversal (threaded explicitly, never module state) so
//! repeated slots get different images. Best-effort throughout: any failure
//! returns the original document untouched.

use serde_json::Value;
use tracing::warn;

use crate::traits::images::{ImageAsset, ImageProvider};
use crate::types::{PropMap, WebsiteDocument};

/// Whether a string prop is a placeholder marker.
pub fn is_placeholder(value: &str) -> bool {
    value.to_ascii_lowercase().contains("placeholder")
}

fn next_image(pool: &[ImageAsset], index: &mut usize) -> String {
    let url = pool[*index % pool.len()].url.clone();
    *index += 1;
    url
}

/// Replace placeholders in one props object.
///
/// Handles, in order: `image` (string), entries of `images` (string or
/// `{src}` object), `.image` on entries of `items`, then recurses into any
/// nested plain-object prop.
fn enrich_object(props: &mut PropMap, pool: &[ImageAsset], index: &mut usize) {
    let replace_image =
        matches!(props.get("image"), Some(Value::String(s)) if is_placeholder(s));
    if replace_image {
        let url = next_image(pool, index);
        props.insert("image".to_string(), Value::String(url));
    }

    if let Some(Value::Array(images)) = props.get_mut("images") {
        for entry in images.iter_mut() {
            match entry {
                Value::String(s) if is_placeholder(s) => {
                    *entry = Value::String(next_image(pool, index));
                }
                Value::Object(obj) => {
                    let replace =
                        matches!(obj.get("src"), Some(Value::String(s)) if is_placeholder(s));
                    if replace {
                        let url = next_image(pool, index);
                        obj.insert("src".to_string(), Value::String(url));
                    }
                }
                _ => {}
            }
        }
    }

    if let Some(Value::Array(items)) = props.get_mut("items") {
        for entry in items.iter_mut() {
            if let Value::Object(obj) = entry {
                let replace =
                    matches!(obj.get("image"), Some(Value::String(s)) if is_placeholder(s));
                if replace {
                    let url = next_image(pool, index);
                    obj.insert("image".to_string(), Value::String(url));
                }
            }
        }
    }

    for value in props.values_mut() {
        if let Value::Object(nested) = value {
            enrich_object(nested, pool, index);
        }
    }
}

/// Replace placeholders across a document using an already-fetched pool.
///
/// Operates on a deep copy; the input document is never mutated. Selection
/// is `pool[index % len]`, so repeated runs against the same pool are
/// reproducible.
pub fn enrich_with_pool(document: &WebsiteDocument, pool: &[ImageAsset]) -> WebsiteDocument {
    let mut enriched = document.clone();
    if pool.is_empty() {
        return enriched;
    }
    let mut image_index = 0usize;
    for section in &mut enriched.sections {
        enrich_object(&mut section.props, pool, &mut image_index);
    }
    enriched
}

/// Fetch an image pool and enrich the document with it.
///
/// Unconfigured provider, empty pool, or fetch failure all return the
/// document unchanged — enrichment must never fail the overall generation.
pub async fn enrich_images(
    document: &WebsiteDocument,
    provider: &dyn ImageProvider,
    count: usize,
) -> WebsiteDocument {
    if !provider.is_configured() {
        return document.clone();
    }

    match provider.industry_images(&document.metadata.industry, count).await {
        Ok(pool) if !pool.is_empty() => enrich_with_pool(document, &pool),
        Ok(_) => document.clone(),
        Err(e) => {
            warn!(error = %e, "image fetch failed, returning un-enriched document");
            document.clone()
        }
    }
}
