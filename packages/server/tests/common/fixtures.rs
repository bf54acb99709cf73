//! Upstream payload fixtures, shaped the way Etsy answers.

use serde_json::{json, Value};

/// One active listing record with a minor-unit price
pub fn listing_record(title: &str, tags: usize, amount: i64) -> Value {
    let tags: Vec<String> = (0..tags).map(|i| format!("tag {}", i)).collect();
    json!({
        "listing_id": 1000 + amount,
        "title": title,
        "tags": tags,
        "price": { "amount": amount, "divisor": 100, "currency_code": "USD" },
        "state": "active"
    })
}

/// A dozen mugs: 34-char titles, 8 tags each, priced $12.00 to $23.00
pub fn mug_listings() -> Vec<Value> {
    (0..12)
        .map(|i| listing_record("Speckled stoneware mug with handle", 8, 1200 + i * 100))
        .collect()
}

/// Shop lookup body wrapped in `results`, as Etsy v3 returns it
pub fn shops_body(shop_id: i64, shop_name: &str) -> Value {
    json!({
        "count": 1,
        "results": [{ "shop_id": shop_id, "shop_name": shop_name }]
    })
}
