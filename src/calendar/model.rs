use serde::Serialize;

/// A single normalized economic-calendar entry.
///
/// Serialized field names match the dashboard payload the frontend consumes
/// (`publishedDate` rather than snake case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The event headline; also the deduplication key within one fetch.
    pub title: String,
    /// Link to the provider's event page.
    pub link: String,
    /// Constant provider label (`"JB-News"`).
    pub source: String,
    /// The event date as reported by the provider.
    #[serde(rename = "publishedDate")]
    pub published_date: String,
    /// Provider category (e.g. "Interest Rate").
    pub category: String,
    /// Human-readable `Forecast/Previous/Actual` summary line.
    pub summary: String,
}
