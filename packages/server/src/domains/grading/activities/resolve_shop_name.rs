use url::Url;

/// Path marker preceding the shop name in storefront URLs.
const SHOP_SEGMENT: &str = "/shop/";

/// Turn user input into a shop name.
///
/// Accepts a storefront URL (`https://www.etsy.com/shop/CoolShop`, including
/// deeper paths below it) or a bare name. Anything that is not a URL with a
/// `/shop/` segment comes back trimmed, so this never fails.
pub fn resolve_shop_name(input: &str) -> String {
    let Ok(url) = Url::parse(input) else {
        return input.trim().to_string();
    };

    // Serialized paths are percent-encoded ASCII, so lowercasing keeps offsets.
    let path = url.path();
    match path.to_ascii_lowercase().find(SHOP_SEGMENT) {
        Some(idx) => path[idx + SHOP_SEGMENT.len()..]
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string(),
        None => input.trim().to_string(),
    }
}
