use crate::calendar::wire::CalendarEvent;
use crate::client::FeedClient;
use crate::error::FeedError;

/// Fetch one day's worth of raw calendar events.
///
/// `day` is either the literal `"today"` or an explicit `YYYY-MM-DD` date,
/// mirroring the provider's two query forms.
pub(super) async fn fetch_calendar(
    client: &FeedClient,
    api_key: &str,
    day: &str,
) -> Result<Vec<CalendarEvent>, FeedError> {
    let url = client.base_calendar().join(&format!("{day}/"))?;

    let resp = client
        .http()
        .get(url.clone())
        .header("Authorization", format!("Api-Key {api_key}"))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    let events: Vec<CalendarEvent> =
        serde_json::from_str(&body).map_err(|e| FeedError::Data(format!("json parse error: {e}")))?;

    Ok(events)
}
