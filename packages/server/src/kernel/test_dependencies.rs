// TestDependencies - mock implementations for testing
//
// Provides a mock marketplace and in-memory secrets that can be injected into
// ServerDeps for tests.

use async_trait::async_trait;
use etsy_client::{EtsyError, Listing, Shop, ShopId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseMarketplace, BaseSecrets, ServerDeps};

// =============================================================================
// Mock Marketplace
// =============================================================================

/// Canned answer for one endpoint
#[derive(Debug, Clone)]
enum MockReply<T> {
    Items(Vec<T>),
    Status { status: u16, body: String },
}

impl<T: Clone> MockReply<T> {
    fn to_result(&self) -> Result<Vec<T>, EtsyError> {
        match self {
            MockReply::Items(items) => Ok(items.clone()),
            MockReply::Status { status, body } => Err(EtsyError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// A call made against the mock, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum MarketplaceCall {
    FindShops {
        api_key: String,
        shop_name: String,
    },
    ActiveListings {
        api_key: String,
        shop_id: String,
        limit: u32,
    },
}

pub struct MockMarketplace {
    shops: MockReply<Shop>,
    listings: MockReply<Listing>,
    calls: Arc<Mutex<Vec<MarketplaceCall>>>,
}

impl Default for MockMarketplace {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketplace {
    /// Mock answering every lookup with an empty collection
    pub fn new() -> Self {
        Self {
            shops: MockReply::Items(Vec::new()),
            listings: MockReply::Items(Vec::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_shops(mut self, shops: Vec<Shop>) -> Self {
        self.shops = MockReply::Items(shops);
        self
    }

    pub fn with_listings(mut self, listings: Vec<Listing>) -> Self {
        self.listings = MockReply::Items(listings);
        self
    }

    /// Make the shop lookup answer with a non-success status
    pub fn with_shops_error(mut self, status: u16, body: &str) -> Self {
        self.shops = MockReply::Status {
            status,
            body: body.to_string(),
        };
        self
    }

    /// Make the listings lookup answer with a non-success status
    pub fn with_listings_error(mut self, status: u16, body: &str) -> Self {
        self.listings = MockReply::Status {
            status,
            body: body.to_string(),
        };
        self
    }

    /// Get all calls in the order they were made
    pub fn calls(&self) -> Vec<MarketplaceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMarketplace for MockMarketplace {
    async fn find_shops(&self, api_key: &str, shop_name: &str) -> Result<Vec<Shop>, EtsyError> {
        self.calls.lock().unwrap().push(MarketplaceCall::FindShops {
            api_key: api_key.to_string(),
            shop_name: shop_name.to_string(),
        });
        self.shops.to_result()
    }

    async fn active_listings(
        &self,
        api_key: &str,
        shop_id: &ShopId,
        limit: u32,
    ) -> Result<Vec<Listing>, EtsyError> {
        self.calls.lock().unwrap().push(MarketplaceCall::ActiveListings {
            api_key: api_key.to_string(),
            shop_id: shop_id.to_string(),
            limit,
        });
        self.listings.to_result()
    }
}

// =============================================================================
// Mock Secrets
// =============================================================================

/// In-memory secret store; values can change while deps are in use
#[derive(Default)]
pub struct MockSecrets {
    values: Mutex<HashMap<String, String>>,
}

impl MockSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl BaseSecrets for MockSecrets {
    fn secret(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub marketplace: Arc<MockMarketplace>,
    pub secrets: Arc<MockSecrets>,
    pub api_key_var: String,
}

impl TestDependencies {
    /// Dependencies looking the API key up under `api_key_var`, initially unset.
    pub fn new(api_key_var: impl Into<String>) -> Self {
        Self {
            marketplace: Arc::new(MockMarketplace::new()),
            secrets: Arc::new(MockSecrets::new()),
            api_key_var: api_key_var.into(),
        }
    }

    /// Set a mock marketplace
    pub fn mock_marketplace(mut self, marketplace: MockMarketplace) -> Self {
        self.marketplace = Arc::new(marketplace);
        self
    }

    /// Store an API key under `api_key_var`
    pub fn with_api_key(self, key: &str) -> Self {
        self.secrets.set(&self.api_key_var, key);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.marketplace.clone(),
            self.secrets.clone(),
            self.api_key_var.clone(),
        )
    }
}
