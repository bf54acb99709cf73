//! Heuristic storefront rubric.
//!
//! Four independently capped terms summed into a 0–100 score:
//!
//! | Term          | Formula                      | Cap |
//! |---------------|------------------------------|-----|
//! | Volume        | listings × 2                 | 40  |
//! | Title hygiene | max(0, avg title length − 24)| 20  |
//! | Tag usage     | avg tags × 2                 | 20  |
//! | Price spread  | max price − min price        | 20  |
//!
//! The weights are starter heuristics, kept as literal constants.

use etsy_client::{Listing, ShopId};

use crate::domains::grading::models::{GradeMetrics, GradeResult, Letter, PriceRange};

const VOLUME_POINTS_PER_LISTING: f64 = 2.0;
const VOLUME_CAP: f64 = 40.0;
const TITLE_LENGTH_BASELINE: f64 = 24.0;
const TITLE_CAP: f64 = 20.0;
const TAG_POINTS_PER_TAG: f64 = 2.0;
const TAG_CAP: f64 = 20.0;
const PRICE_SPREAD_CAP: f64 = 20.0;

const TIP_MIN_LISTINGS: usize = 10;
const TIP_MIN_TITLE_LENGTH: u32 = 40;
const TIP_MIN_TAGS: u32 = 10;
const TIP_MIN_PRICE_SPREAD: f64 = 5.0;

const TIP_ADD_LISTINGS: &str =
    "Add more listings (aim 20+) to look active and capture more search terms.";
const TIP_ENRICH_TITLES: &str =
    "Enrich titles with primary keywords + attributes (material, size, style).";
const TIP_MORE_TAGS: &str = "Use more tags (think synonyms & gift occasions).";
const TIP_VARY_PRICES: &str =
    "Offer varied price points (entry, mid, premium) to widen audience.";

/// Aggregates the rubric reads from a listings sample.
#[derive(Debug, Clone, PartialEq)]
struct ListingStats {
    total: usize,
    avg_title_len: u32,
    avg_tags: u32,
    price_range: PriceRange,
}

impl ListingStats {
    fn collect(listings: &[Listing]) -> Self {
        let total = listings.len();
        let title_chars: usize = listings.iter().map(Listing::title_len).sum();
        let tags: usize = listings.iter().map(|l| l.tag_count).sum();
        let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();

        Self {
            total,
            avg_title_len: rounded_average(title_chars, total),
            avg_tags: rounded_average(tags, total),
            price_range: PriceRange::from_prices(&prices),
        }
    }

    fn score(&self) -> u8 {
        let volume = (self.total as f64 * VOLUME_POINTS_PER_LISTING).min(VOLUME_CAP);
        let titles = (f64::from(self.avg_title_len) - TITLE_LENGTH_BASELINE).clamp(0.0, TITLE_CAP);
        let tags = (f64::from(self.avg_tags) * TAG_POINTS_PER_TAG).min(TAG_CAP);
        let spread = self.price_range.spread().min(PRICE_SPREAD_CAP);

        (volume + titles + tags + spread).round().clamp(0.0, 100.0) as u8
    }

    fn tips(&self) -> Vec<String> {
        let checks = [
            (self.total < TIP_MIN_LISTINGS, TIP_ADD_LISTINGS),
            (self.avg_title_len < TIP_MIN_TITLE_LENGTH, TIP_ENRICH_TITLES),
            (self.avg_tags < TIP_MIN_TAGS, TIP_MORE_TAGS),
            (self.price_range.spread() < TIP_MIN_PRICE_SPREAD, TIP_VARY_PRICES),
        ];

        checks
            .into_iter()
            .filter(|(fires, _)| *fires)
            .map(|(_, tip)| tip.to_string())
            .collect()
    }
}

/// `sum / max(count, 1)`, rounded half up.
fn rounded_average(sum: usize, count: usize) -> u32 {
    (sum as f64 / count.max(1) as f64).round() as u32
}

/// Grade a listings sample. Pure: the same input always yields the same result.
pub fn score_listings(shop_id: ShopId, listings: &[Listing]) -> GradeResult {
    let stats = ListingStats::collect(listings);
    let score = stats.score();

    GradeResult {
        letter: Letter::from_score(score),
        score,
        tips: stats.tips(),
        metrics: GradeMetrics {
            shop_id,
            listings_sampled: stats.total,
            avg_title_length: stats.avg_title_len,
            avg_tags_per_listing: stats.avg_tags,
            price_range: stats.price_range,
        },
    }
}
