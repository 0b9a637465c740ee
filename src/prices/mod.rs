//! Batch price fetcher for the fixed macro instrument table.
//!
//! Walks the table strictly in order, one chart request per instrument with a
//! fixed courtesy pause in between. A failed instrument never fails the
//! batch: non-success statuses and malformed payloads are logged and recorded
//! as [`PriceRecord::ZERO`].

mod api;
mod instruments;
mod model;
mod wire;

pub use instruments::DEFAULT_INSTRUMENTS;
pub use model::PriceRecord;

use std::collections::HashMap;
use std::time::Duration;

use crate::client::FeedClient;
use crate::error::FeedError;

/// Fixed pause before each chart request.
const REQUEST_DELAY: Duration = Duration::from_secs(1);

/// A builder for fetching the latest price and intraday change of every
/// instrument in a name→ticker table.
pub struct MarketPricesBuilder {
    client: FeedClient,
    instruments: Vec<(String, String)>,
    delay: Duration,
}

impl MarketPricesBuilder {
    /// Creates a builder over [`DEFAULT_INSTRUMENTS`] with the default 1-second
    /// pacing.
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
            instruments: DEFAULT_INSTRUMENTS
                .iter()
                .map(|&(name, ticker)| (name.to_string(), ticker.to_string()))
                .collect(),
            delay: REQUEST_DELAY,
        }
    }

    /// Replace the instrument table. Entries are fetched in iteration order.
    #[must_use]
    pub fn instruments<I, S>(mut self, instruments: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.instruments = instruments
            .into_iter()
            .map(|(name, ticker)| (name.into(), ticker.into()))
            .collect();
        self
    }

    /// Override the pause before each provider request (default 1 s).
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetches a [`PriceRecord`] for every instrument in the table, strictly
    /// sequentially.
    ///
    /// This blocks the caller for roughly `(delay + request latency) ×
    /// instruments`. Per-instrument failures degrade to [`PriceRecord::ZERO`]
    /// for that name only; `Err` is reserved for failures outside the
    /// per-instrument loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument table is empty.
    pub async fn fetch(&self) -> Result<HashMap<String, PriceRecord>, FeedError> {
        if self.instruments.is_empty() {
            return Err(FeedError::Data("no instruments configured".into()));
        }

        let mut prices = HashMap::with_capacity(self.instruments.len());
        for (name, ticker) in &self.instruments {
            tokio::time::sleep(self.delay).await;
            tracing::info!(%name, %ticker, "fetching market data");

            let record = match api::fetch_chart(&self.client, ticker).await {
                Ok(rows) => match latest_record(&rows) {
                    Some(record) => record,
                    None => {
                        tracing::warn!(%name, %ticker, "empty chart data");
                        PriceRecord::ZERO
                    }
                },
                Err(e) => {
                    tracing::error!(%name, %ticker, error = %e, "failed to fetch market data");
                    PriceRecord::ZERO
                }
            };
            prices.insert(name.clone(), record);
        }

        Ok(prices)
    }
}

/// Reduce chart rows to the latest close and its change from the day's open.
/// `None` when there are no rows, the last row lacks an open or close, or the
/// open is zero (no finite percent change exists).
fn latest_record(rows: &[api::ChartRow]) -> Option<PriceRecord> {
    let last = rows.last()?;
    tracing::debug!(
        ts = last.ts,
        high = ?last.high,
        low = ?last.low,
        volume = ?last.volume,
        "latest chart row"
    );

    let close = last.close?;
    let open = last.open?;
    let change = close - open;
    let change_percent = change / open * 100.0;
    // A zero open would put inf/NaN in the record; treat it like missing data.
    if !change_percent.is_finite() {
        return None;
    }

    Some(PriceRecord {
        price: round2(close),
        change: round2(change),
        change_percent: round2(change_percent),
    })
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
