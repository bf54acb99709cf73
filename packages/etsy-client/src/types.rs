use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys a shop record may carry its identifier under, in priority order.
const SHOP_ID_KEYS: [&str; 3] = ["shop_id", "shopId", "id"];

/// Divisor assumed when a price object carries an amount but no usable divisor.
const DEFAULT_PRICE_DIVISOR: f64 = 100.0;

/// Top-level body of a collection endpoint.
///
/// Etsy (and proxies in front of it) answer with a bare array, or wrap the
/// array in `results` or `data`. Variants are tried in declaration order, so
/// an object whose `results` is not an array still gets a chance at `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Collection {
    Bare(Vec<Value>),
    Results { results: Vec<Value> },
    Data { data: Vec<Value> },
    Unrecognized(Value),
}

impl Collection {
    /// Unwrap into the record list. Unrecognized shapes are an empty list.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Collection::Bare(records)
            | Collection::Results { results: records }
            | Collection::Data { data: records } => records,
            Collection::Unrecognized(_) => Vec::new(),
        }
    }
}

/// Shop identifier, kept in whatever shape upstream sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ShopId {
    Numeric(serde_json::Number),
    Text(String),
}

impl ShopId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(ShopId::Numeric(n.clone())),
            Value::String(s) if !s.trim().is_empty() => Some(ShopId::Text(s.trim().to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopId::Numeric(n) => write!(f, "{}", n),
            ShopId::Text(s) => f.write_str(s),
        }
    }
}

/// A shop record normalized from the `/shops` lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    /// First populated identifier key; `None` when the record carries none.
    pub shop_id: Option<ShopId>,
    pub shop_name: Option<String>,
}

impl Shop {
    /// Normalize an untyped shop record. Never fails, so records keep their
    /// upstream position.
    pub fn from_record(record: &Value) -> Self {
        Self {
            shop_id: SHOP_ID_KEYS
                .iter()
                .find_map(|key| record.get(*key).and_then(ShopId::from_value)),
            shop_name: record
                .get("shop_name")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// An active listing normalized from `/shops/{shop_id}/listings/active`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub title: Option<String>,
    /// Number of tags; zero when `tags` is missing or not an array.
    pub tag_count: usize,
    /// Price in major units, present only when it resolved to a finite number.
    pub price: Option<f64>,
}

impl Listing {
    /// Normalize an untyped listing record. Never fails: unusable fields
    /// simply come out empty.
    pub fn from_record(record: &Value) -> Self {
        Self {
            title: record
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_owned),
            tag_count: record
                .get("tags")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            price: record.get("price").and_then(extract_price),
        }
    }

    /// Title length in UTF-16 code units, the way browsers measure strings.
    pub fn title_len(&self) -> usize {
        self.title
            .as_deref()
            .map_or(0, |title| title.encode_utf16().count())
    }
}

/// Resolve a price field to a number.
///
/// Accepted shapes, first match wins:
/// 1. a plain number
/// 2. `{ amount: <number>, divisor: <number> }`
/// 3. `{ amount: <non-zero number or numeric string>, divisor?: ... }`,
///    dividing by 100 when the divisor is missing, zero or empty
fn extract_price(price: &Value) -> Option<f64> {
    let value = match price {
        Value::Number(n) => n.as_f64()?,
        Value::Object(fields) => {
            let amount = fields.get("amount");
            let divisor = fields.get("divisor");
            match (
                amount.and_then(Value::as_f64),
                divisor.and_then(Value::as_f64),
            ) {
                (Some(amount), Some(divisor)) => amount / divisor,
                _ => {
                    let amount = amount.and_then(truthy_number)?;
                    let divisor = divisor
                        .and_then(truthy_number)
                        .unwrap_or(DEFAULT_PRICE_DIVISOR);
                    amount / divisor
                }
            }
        }
        _ => return None,
    };

    value.is_finite().then_some(value)
}

/// Numeric value of a non-zero number or a non-empty string.
///
/// Strings that do not parse yield NaN so the final finiteness check drops
/// the price instead of falling back to a default.
fn truthy_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| *v != 0.0 && !v.is_nan()),
        Value::String(s) if !s.is_empty() => Some(s.trim().parse().unwrap_or(f64::NAN)),
        _ => None,
    }
}
