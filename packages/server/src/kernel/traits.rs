// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Grading logic lives in domains/grading and talks to upstream through these.
//
// Naming convention: Base* for trait names (e.g., BaseMarketplace)

use async_trait::async_trait;
use etsy_client::{EtsyError, Listing, Shop, ShopId};

// =============================================================================
// Marketplace Trait (Infrastructure - storefront lookups)
// =============================================================================

#[async_trait]
pub trait BaseMarketplace: Send + Sync {
    /// Shops matching a name, already normalized. Empty when nothing matched.
    async fn find_shops(&self, api_key: &str, shop_name: &str) -> Result<Vec<Shop>, EtsyError>;

    /// First page of a shop's active listings, at most `limit` entries requested.
    async fn active_listings(
        &self,
        api_key: &str,
        shop_id: &ShopId,
        limit: u32,
    ) -> Result<Vec<Listing>, EtsyError>;
}

// =============================================================================
// Secrets Trait (Infrastructure - credential lookup)
// =============================================================================

pub trait BaseSecrets: Send + Sync {
    /// Value stored under `name`, if any. Looked up on every call.
    fn secret(&self, name: &str) -> Option<String>;
}
