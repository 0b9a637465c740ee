use serde::Serialize;

/// Latest close plus intraday change for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRecord {
    /// Latest close, rounded to 2 decimals.
    pub price: f64,
    /// `close - open` of the latest row, rounded to 2 decimals.
    pub change: f64,
    /// `change / open * 100`, rounded to 2 decimals.
    pub change_percent: f64,
}

impl PriceRecord {
    /// Failure sentinel. Provider errors, malformed payloads, and genuinely
    /// empty data all collapse to this record, so callers cannot tell the
    /// cases apart. Known limitation of the contract.
    pub const ZERO: Self = Self {
        price: 0.0,
        change: 0.0,
        change_percent: 0.0,
    };
}
