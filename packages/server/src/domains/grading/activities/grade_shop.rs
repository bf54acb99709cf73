use crate::domains::grading::activities::{resolve_shop_name, score_listings};
use crate::domains::grading::error::{GradeError, UpstreamStage};
use crate::domains::grading::models::GradeResult;
use crate::kernel::ServerDeps;

/// Listings requested from upstream. Only the first page is ever read.
pub const LISTINGS_PAGE_SIZE: u32 = 50;

/// Grade a shop from raw user input (storefront URL or shop name).
///
/// Runs resolve → shop lookup → listings lookup → score, strictly in order.
/// Any failure aborts the whole run.
pub async fn grade_shop(
    shop_input: Option<&str>,
    deps: &ServerDeps,
) -> Result<GradeResult, GradeError> {
    let shop_input = shop_input
        .filter(|s| !s.is_empty())
        .ok_or(GradeError::MissingShop)?;

    let api_key = deps
        .marketplace_api_key()
        .ok_or_else(|| GradeError::MissingApiKey {
            var: deps.api_key_var.clone(),
        })?;

    let shop_name = resolve_shop_name(shop_input);
    if shop_name.is_empty() {
        return Err(GradeError::MissingShop);
    }

    tracing::info!(shop_input, shop_name = %shop_name, "Grading shop");

    let shops = deps
        .marketplace
        .find_shops(&api_key, &shop_name)
        .await
        .map_err(|e| GradeError::from_etsy(UpstreamStage::ShopLookup, e))?;

    // Only the best match is graded; a later record is a different shop.
    let Some(shop) = shops.into_iter().next() else {
        return Err(GradeError::ShopNotFound { shop_name });
    };
    let Some(shop_id) = shop.shop_id else {
        tracing::warn!(shop_name = %shop_name, "Best shop match has no identifier");
        return Err(GradeError::ShopNotFound { shop_name });
    };

    tracing::debug!(
        shop_name = %shop_name,
        matched_name = shop.shop_name.as_deref().unwrap_or_default(),
        shop_id = %shop_id,
        "Resolved shop"
    );

    let mut listings = deps
        .marketplace
        .active_listings(&api_key, &shop_id, LISTINGS_PAGE_SIZE)
        .await
        .map_err(|e| GradeError::from_etsy(UpstreamStage::ListingsFetch, e))?;
    listings.truncate(LISTINGS_PAGE_SIZE as usize);

    let result = score_listings(shop_id, &listings);

    tracing::info!(
        shop_name = %shop_name,
        score = result.score,
        letter = %result.letter,
        listings_sampled = result.metrics.listings_sampled,
        "Shop graded"
    );

    Ok(result)
}
