//! Image provider trait for post-hoc image enrichment.
//!
//! The enricher asks for a pool of industry-relevant images and assigns
//! them round-robin to placeholder slots. An unconfigured provider or an
//! empty pool simply means no enrichment — never an error the caller sees.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// One image from the provider's pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    pub alt: Option<String>,
}

impl ImageAsset {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Image search seam.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Whether the provider has credentials to make real calls.
    fn is_configured(&self) -> bool;

    /// Fetch up to `count` images relevant to an industry.
    async fn industry_images(&self, industry: &str, count: usize) -> Result<Vec<ImageAsset>>;
}

/// Mock image provider for testing.
#[derive(Default)]
pub struct MockImageProvider {
    configured: bool,
    failing: bool,
    images: Vec<ImageAsset>,
}

impl MockImageProvider {
    /// Configured provider with an empty pool.
    pub fn new() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    /// Provider that reports itself unconfigured.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Configured provider whose fetch always fails.
    pub fn failing() -> Self {
        Self {
            configured: true,
            failing: true,
            ..Default::default()
        }
    }

    /// Add pool images by URL.
    pub fn with_urls(mut self, urls: &[&str]) -> Self {
        self.images
            .extend(urls.iter().map(|u| ImageAsset::new(*u)));
        self
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn industry_images(&self, _industry: &str, count: usize) -> Result<Vec<ImageAsset>> {
        if self.failing {
            return Err(GenerationError::ImageFetch(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock image provider failure",
            ))));
        }
        Ok(self.images.iter().take(count).cloned().collect())
    }
}

/// Pexels-backed image provider.
pub struct PexelsImageProvider {
    api_key: SecretString,
    client: reqwest::Client,
}

impl PexelsImageProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            api_key: SecretBox::new(Box::from(api_key.as_str())),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageProvider for PexelsImageProvider {
    fn is_configured(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    async fn industry_images(&self, industry: &str, count: usize) -> Result<Vec<ImageAsset>> {
        #[derive(Deserialize)]
        struct Response {
            photos: Vec<Photo>,
        }

        #[derive(Deserialize)]
        struct Photo {
            src: PhotoSrc,
            alt: Option<String>,
        }

        #[derive(Deserialize)]
        struct PhotoSrc {
            large: String,
        }

        let per_page = count.clamp(1, 80).to_string();
        let response = self
            .client
            .get("https://api.pexels.com/v1/search")
            .query(&[("query", industry), ("per_page", per_page.as_str())])
            .header("Authorization", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| GenerationError::ImageFetch(Box::new(e)))?;

        if !response.status().is_success() {
            return Err(GenerationError::ImageFetch(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Pexels API error: {}", response.status()),
            ))));
        }

        let payload: Response = response
            .json()
            .await
            .map_err(|e| GenerationError::ImageFetch(Box::new(e)))?;

        Ok(payload
            .photos
            .into_iter()
            .map(|p| {
                let mut asset = ImageAsset::new(p.src.large);
                if let Some(alt) = p.alt {
                    asset = asset.with_alt(alt);
                }
                asset
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_pool_respects_count() {
        let provider = MockImageProvider::new().with_urls(&[
            "https://img.example/1.jpg",
            "https://img.example/2.jpg",
            "https://img.example/3.jpg",
        ]);
        let pool = provider.industry_images("restaurant", 2).await.unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_mock() {
        assert!(!MockImageProvider::unconfigured().is_configured());
        assert!(MockImageProvider::new().is_configured());
    }

    #[test]
    fn test_pexels_key_never_in_debug_output() {
        let provider = PexelsImageProvider::new("super-secret-key");
        assert!(provider.is_configured());
        assert!(!format!("{:?}", provider.api_key).contains("super-secret-key"));
    }
}
