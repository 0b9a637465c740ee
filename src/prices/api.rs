use crate::client::FeedClient;
use crate::error::FeedError;
use crate::prices::wire::{ChartEnvelope, QuoteBlock};

/// One OHLCV row of the one-day chart, keyed by its epoch timestamp.
#[derive(Debug)]
pub(crate) struct ChartRow {
    pub(crate) ts: i64,
    pub(crate) open: Option<f64>,
    pub(crate) high: Option<f64>,
    pub(crate) low: Option<f64>,
    pub(crate) close: Option<f64>,
    pub(crate) volume: Option<u64>,
}

/// Fetch the one-day chart for a single ticker and flatten it into rows.
pub(super) async fn fetch_chart(
    client: &FeedClient,
    symbol: &str,
) -> Result<Vec<ChartRow>, FeedError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("interval", "1d")
        .append_pair("includePrePost", "true")
        .append_pair("events", "div,splits,capitalGains");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<Vec<ChartRow>, FeedError> {
    let parsed: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| FeedError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| FeedError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(FeedError::Data(format!(
            "provider error: {} - {}",
            err.code, err.description
        )));
    }

    let r0 = chart
        .result
        .ok_or_else(|| FeedError::Data("missing result".into()))?
        .into_iter()
        .next()
        .ok_or_else(|| FeedError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| FeedError::Data("missing quote".into()))?;

    Ok(assemble_rows(&ts, &quote))
}

/// Zip the timestamp axis with the quote arrays. Field arrays shorter than
/// the axis yield `None` cells instead of failing the decode.
fn assemble_rows(ts: &[i64], quote: &QuoteBlock) -> Vec<ChartRow> {
    ts.iter()
        .enumerate()
        .map(|(i, &ts)| ChartRow {
            ts,
            open: value_at(&quote.open, i),
            high: value_at(&quote.high, i),
            low: value_at(&quote.low, i),
            close: value_at(&quote.close, i),
            volume: value_at(&quote.volume, i),
        })
        .collect()
}

fn value_at<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
    values.get(i).copied().flatten()
}
