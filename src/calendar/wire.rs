use serde::Deserialize;
use serde_json::Value;

/// One raw calendar event as returned by the provider.
///
/// Every field is optional: the provider omits fields freely and a single
/// malformed event must not sink the batch. Forecast/previous/actual arrive
/// as numbers or strings depending on the event, so they stay `Value` until
/// formatting.
#[derive(Deserialize)]
pub(crate) struct CalendarEvent {
    #[serde(rename = "Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "Event_ID", default)]
    pub(crate) event_id: Option<i64>,
    #[serde(rename = "Date", default)]
    pub(crate) date: Option<String>,
    #[serde(rename = "Category", default)]
    pub(crate) category: Option<String>,
    #[serde(rename = "Forecast", default)]
    pub(crate) forecast: Value,
    #[serde(rename = "Previous", default)]
    pub(crate) previous: Value,
    #[serde(rename = "Actual", default)]
    pub(crate) actual: Value,
}
