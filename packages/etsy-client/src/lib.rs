//! Pure Etsy Open API v3 client.
//!
//! A minimal client for the two read-only endpoints needed to look at a
//! storefront: shop lookup by name and the first page of active listings.
//! Response bodies are loosely shaped, so every record is normalized into
//! [`Shop`] / [`Listing`] here, before it reaches calling code.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_client::EtsyClient;
//!
//! let client = EtsyClient::new();
//!
//! let shops = client.find_shops_by_name(&api_key, "CoolShop").await?;
//! if let Some(shop_id) = shops.first().and_then(|shop| shop.shop_id.as_ref()) {
//!     let listings = client.active_listings(&api_key, shop_id, 50).await?;
//!     for listing in &listings {
//!         println!("{}", listing.title.as_deref().unwrap_or("(untitled)"));
//!     }
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{EtsyError, Result};
pub use types::{Collection, Listing, Shop, ShopId};

use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://openapi.etsy.com/v3/application";

/// Header Etsy reads the application key from.
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone)]
pub struct EtsyClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for EtsyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EtsyClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at another host (a proxy, or a stub in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Look up shops by name, in upstream order (best match first).
    pub async fn find_shops_by_name(&self, api_key: &str, shop_name: &str) -> Result<Vec<Shop>> {
        let url = format!("{}/shops", self.base_url);
        let records = self
            .get_collection(api_key, &url, &[("shop_name", shop_name.to_string())])
            .await?;

        let shops: Vec<Shop> = records.iter().map(Shop::from_record).collect();
        tracing::debug!(shop_name, count = shops.len(), "Fetched shops");
        Ok(shops)
    }

    /// Fetch one page of a shop's active listings.
    pub async fn active_listings(
        &self,
        api_key: &str,
        shop_id: &ShopId,
        limit: u32,
    ) -> Result<Vec<Listing>> {
        let url = format!("{}/shops/{}/listings/active", self.base_url, shop_id);
        let records = self
            .get_collection(api_key, &url, &[("limit", limit.to_string())])
            .await?;

        let listings: Vec<Listing> = records.iter().map(Listing::from_record).collect();
        tracing::debug!(shop_id = %shop_id, count = listings.len(), "Fetched active listings");
        Ok(listings)
    }

    async fn get_collection(
        &self,
        api_key: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>> {
        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(url, status = status.as_u16(), "Etsy returned an error");
            return Err(EtsyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let collection: Collection = resp.json().await?;
        Ok(collection.into_records())
    }
}
