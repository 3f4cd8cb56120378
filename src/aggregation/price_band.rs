//! Counting records in fixed price bands.
//!
//! The bands partition the non-negative prices into ten ranges with inclusive
//! upper edges: `[0, 100]`, `(100, 200]`, ..., `(800, 900]` and `(900, ∞)`.

use serde::Serialize;

use crate::record::Record;

/// The number of price bands.
pub const PRICE_BAND_COUNT: usize = 10;

/// The width of every bounded price band.
const BAND_WIDTH: u32 = 100;

/// One of the fixed price ranges, identified by its position in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand(usize);

impl PriceBand {
    /// All price bands in ascending order.
    pub fn all() -> impl Iterator<Item = PriceBand> {
        (0..PRICE_BAND_COUNT).map(PriceBand)
    }

    /// Get the band that `price` falls in.
    ///
    /// Prices on a band's upper edge belong to that band, e.g. 100 is in the
    /// first band and 100.01 is in the second. Anything at or below 100,
    /// including invalid negative prices, is in the first band.
    pub fn for_price(price: f64) -> PriceBand {
        PriceBand::all()
            .find(|band| band.max().is_none_or(|max| price <= f64::from(max)))
            .unwrap_or(PriceBand(PRICE_BAND_COUNT - 1))
    }

    /// The position of the band in ascending order, starting at zero.
    pub fn index(self) -> usize {
        self.0
    }

    /// The smallest whole price shown for the band.
    ///
    /// This is 0 for the first band and one more than the previous band's
    /// upper edge otherwise, e.g. 101 for the second band.
    pub fn min(self) -> u32 {
        match self.0 {
            0 => 0,
            index => index as u32 * BAND_WIDTH + 1,
        }
    }

    /// The inclusive upper edge of the band, or `None` for the open-ended last band.
    pub fn max(self) -> Option<u32> {
        if self.0 + 1 < PRICE_BAND_COUNT {
            Some((self.0 as u32 + 1) * BAND_WIDTH)
        } else {
            None
        }
    }

    /// The display label of the band, e.g. "101-200" or "901-above".
    pub fn label(self) -> String {
        match self.max() {
            Some(max) => format!("{}-{max}", self.min()),
            None => format!("{}-above", self.min()),
        }
    }
}

/// The number of records in a price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCount {
    /// The price band.
    pub band: PriceBand,
    /// The number of records in the band.
    pub count: usize,
}

/// A band count in the shape of the bar chart API, e.g. `{"range": "0-100", "count": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledBandCount {
    /// The band label, e.g. "101-200".
    pub range: String,
    /// The number of records in the band.
    pub count: usize,
}

/// A band count in the shape of the price range API, e.g. `{"min": 0, "max": 100, "count": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedBandCount {
    /// The smallest whole price shown for the band.
    pub min: u32,
    /// The inclusive upper edge, `None` for the open-ended last band.
    pub max: Option<u32>,
    /// The number of records in the band.
    pub count: usize,
}

impl From<BandCount> for LabelledBandCount {
    fn from(value: BandCount) -> Self {
        Self {
            range: value.band.label(),
            count: value.count,
        }
    }
}

impl From<BandCount> for BoundedBandCount {
    fn from(value: BandCount) -> Self {
        Self {
            min: value.band.min(),
            max: value.band.max(),
            count: value.count,
        }
    }
}

/// Count the records in each price band.
///
/// Always returns every band in ascending order, including bands with no records.
pub fn bucket_by_price<'a, I>(records: I) -> [BandCount; PRICE_BAND_COUNT]
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = [0; PRICE_BAND_COUNT];

    for record in records {
        counts[PriceBand::for_price(record.price).index()] += 1;
    }

    std::array::from_fn(|index| BandCount {
        band: PriceBand(index),
        count: counts[index],
    })
}
