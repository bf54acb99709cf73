pub mod grade_shop;
pub mod resolve_shop_name;
pub mod score_listings;

pub use grade_shop::{grade_shop, LISTINGS_PAGE_SIZE};
pub use resolve_shop_name::resolve_shop_name;
pub use score_listings::score_listings;
