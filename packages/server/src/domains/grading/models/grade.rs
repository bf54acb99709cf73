use std::fmt;

use etsy_client::ShopId;
use serde::{Serialize, Serializer};

/// Coarse A–F bucket of a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    /// Map a 0–100 score to its letter. Each band includes its lower bound.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Letter::A,
            80..=89 => Letter::B,
            70..=79 => Letter::C,
            60..=69 => Letter::D,
            _ => Letter::F,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        };
        f.write_str(letter)
    }
}

/// Lowest and highest listing price, when any listing had a usable price.
///
/// Serializes as its display string: `$12.00–$48.50`, or `n/a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceRange {
    Unavailable,
    Range { min: f64, max: f64 },
}

impl PriceRange {
    /// Range over `prices`; `Unavailable` for an empty slice.
    pub fn from_prices(prices: &[f64]) -> Self {
        let mut iter = prices.iter().copied();
        let Some(first) = iter.next() else {
            return PriceRange::Unavailable;
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        PriceRange::Range { min, max }
    }

    /// `max - min`, zero when unavailable.
    pub fn spread(&self) -> f64 {
        match self {
            PriceRange::Unavailable => 0.0,
            PriceRange::Range { min, max } => max - min,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRange::Unavailable => f.write_str("n/a"),
            PriceRange::Range { min, max } => write!(f, "${:.2}–${:.2}", min, max),
        }
    }
}

impl Serialize for PriceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summary numbers shown next to the grade. Field order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeMetrics {
    pub shop_id: ShopId,
    pub listings_sampled: usize,
    pub avg_title_length: u32,
    pub avg_tags_per_listing: u32,
    pub price_range: PriceRange,
}

/// Response body of a successful grading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub letter: Letter,
    pub score: u8,
    pub metrics: GradeMetrics,
    pub tips: Vec<String>,
}
