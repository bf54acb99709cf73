//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to the grading domain.
//! The marketplace sits behind a trait so tests can swap in a mock.

use async_trait::async_trait;
use etsy_client::{EtsyClient, EtsyError, Listing, Shop, ShopId};
use std::sync::Arc;

use crate::kernel::{BaseMarketplace, BaseSecrets};

// =============================================================================
// EtsyClient Adapter (implements BaseMarketplace trait)
// =============================================================================

/// Wrapper around EtsyClient that implements BaseMarketplace trait
pub struct EtsyAdapter(pub EtsyClient);

impl EtsyAdapter {
    pub fn new(client: EtsyClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseMarketplace for EtsyAdapter {
    async fn find_shops(&self, api_key: &str, shop_name: &str) -> Result<Vec<Shop>, EtsyError> {
        self.0.find_shops_by_name(api_key, shop_name).await
    }

    async fn active_listings(
        &self,
        api_key: &str,
        shop_id: &ShopId,
        limit: u32,
    ) -> Result<Vec<Listing>, EtsyError> {
        self.0.active_listings(api_key, shop_id, limit).await
    }
}

// =============================================================================
// Process environment (implements BaseSecrets trait)
// =============================================================================

/// Secrets read from the process environment
pub struct EnvSecrets;

impl BaseSecrets for EnvSecrets {
    fn secret(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain activities
#[derive(Clone)]
pub struct ServerDeps {
    pub marketplace: Arc<dyn BaseMarketplace>,
    pub secrets: Arc<dyn BaseSecrets>,
    /// Name of the secret holding the marketplace API key.
    pub api_key_var: String,
}

impl ServerDeps {
    pub fn new(
        marketplace: Arc<dyn BaseMarketplace>,
        secrets: Arc<dyn BaseSecrets>,
        api_key_var: impl Into<String>,
    ) -> Self {
        Self {
            marketplace,
            secrets,
            api_key_var: api_key_var.into(),
        }
    }

    /// Current marketplace API key. Read on every call; blank counts as unset.
    pub fn marketplace_api_key(&self) -> Option<String> {
        self.secrets
            .secret(&self.api_key_var)
            .filter(|key| !key.trim().is_empty())
    }
}
