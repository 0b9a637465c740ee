//! Economic-calendar fetcher with a TTL cache and a hard rate-limit window.
//!
//! [`CalendarFetcher::fetch`] never returns an error: a missing credential, a
//! provider failure, or an unparseable payload all degrade to an empty list
//! (with the previous cache contents left intact). Callers that need to
//! distinguish "provider down" from "no events today" cannot: the empty list
//! covers both, a limitation carried over from the service this replaces.

mod api;
mod model;
mod wire;

pub use model::NewsItem;

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::client::FeedClient;

const NEWS_SOURCE: &str = "JB-News";
const EVENT_LINK_BASE: &str = "https://www.jblanked.com/news/event/";

/// Minimum spacing between provider calls (free-tier limit: one call per
/// five minutes).
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(300);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Cache state. `items` is non-empty only if `last_updated` is set;
/// `last_api_call` tracks attempts, not successes, so a failed call still
/// counts against the rate limit.
#[derive(Debug, Default)]
struct NewsCache {
    items: Vec<NewsItem>,
    last_updated: Option<Instant>,
    last_api_call: Option<Instant>,
}

/// Fetches and caches economic-calendar events for today and tomorrow.
///
/// Owns its cache; create one instance per process (or otherwise serialize
/// access) so the rate-limit window is actually respected.
pub struct CalendarFetcher {
    client: FeedClient,
    cache: NewsCache,
    rate_limit_window: Duration,
    cache_ttl: Duration,
    max_retries: u32,
}

impl CalendarFetcher {
    /// Creates a fetcher with an empty cache, a 1-hour cache TTL, and the
    /// provider's 5-minute rate-limit window.
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
            cache: NewsCache::default(),
            rate_limit_window: RATE_LIMIT_WINDOW,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_retries: 3,
        }
    }

    /// Override how long cached events are served before a refresh.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Override the minimum spacing between provider calls (default 5 min).
    #[must_use]
    pub const fn rate_limit_window(mut self, window: Duration) -> Self {
        self.rate_limit_window = window;
        self
    }

    /// Accepted for parity with the provider SDK surface; failed calls are
    /// currently not retried.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Returns today's and tomorrow's calendar events, deduplicated by title.
    ///
    /// Serves from cache when the last successful fetch is younger than the
    /// TTL. Otherwise this call blocks: if the previous provider call (failed
    /// or not) was less than the rate-limit window ago, it sleeps out the
    /// remainder, up to the full window, before issuing the request. Async
    /// callers that cannot afford the wait should offload this future.
    pub async fn fetch(&mut self) -> Vec<NewsItem> {
        if let Some(updated) = self.cache.last_updated
            && !self.cache.items.is_empty()
            && updated.elapsed() < self.cache_ttl
        {
            tracing::info!(
                items = self.cache.items.len(),
                "returning cached calendar events"
            );
            return self.cache.items.clone();
        }

        if let Some(last_call) = self.cache.last_api_call {
            let since = last_call.elapsed();
            if since < self.rate_limit_window {
                let wait = self.rate_limit_window - since;
                tracing::warn!(
                    wait_ms = wait.as_millis() as u64,
                    "rate limit: delaying next calendar call"
                );
                tokio::time::sleep(wait).await;
            }
        }

        let Some(api_key) = self.client.calendar_api_key().map(str::to_owned) else {
            tracing::error!("NEWS_API_KEY not set; skipping calendar fetch");
            return Vec::new();
        };

        tracing::debug!(max_retries = self.max_retries, "refreshing calendar events");

        // Attempt recorded before the request so a failure still counts
        // against the rate limit.
        self.cache.last_api_call = Some(Instant::now());

        let today = match api::fetch_calendar(&self.client, &api_key, "today").await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch today's calendar");
                return Vec::new();
            }
        };
        tracing::debug!(events = today.len(), "received calendar events for today");

        let tomorrow_date = (Utc::now() + chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let tomorrow = match api::fetch_calendar(&self.client, &api_key, &tomorrow_date).await {
            Ok(events) => {
                tracing::debug!(events = events.len(), "received calendar events for tomorrow");
                events
            }
            Err(e) => {
                // Non-fatal: today's events are already in hand.
                tracing::warn!(error = %e, "failed to fetch tomorrow's calendar");
                Vec::new()
            }
        };

        let mut items: Vec<NewsItem> = Vec::new();
        for event in today.into_iter().chain(tomorrow) {
            let Some(item) = normalize(event) else {
                tracing::warn!("skipping calendar event with missing fields");
                continue;
            };
            // First occurrence wins.
            if !items.iter().any(|existing| existing.title == item.title) {
                items.push(item);
            }
        }

        if items.is_empty() {
            // Stale-but-available: keep whatever the cache already holds.
            tracing::warn!("no calendar events found");
        } else {
            self.cache.items = items.clone();
            self.cache.last_updated = Some(Instant::now());
            tracing::info!(items = items.len(), "updated calendar cache");
        }

        items
    }
}

/// Builds a [`NewsItem`] from a raw event, or `None` if a required field is
/// missing.
fn normalize(event: wire::CalendarEvent) -> Option<NewsItem> {
    let title = event.name?;
    let event_id = event.event_id?;
    let published_date = event.date?;
    let category = event.category?;

    Some(NewsItem {
        link: format!("{EVENT_LINK_BASE}{event_id}"),
        source: NEWS_SOURCE.to_string(),
        published_date,
        category,
        summary: format!(
            "Forecast: {}, Previous: {}, Actual: {}",
            summary_value(&event.forecast),
            summary_value(&event.previous),
            summary_value(&event.actual)
        ),
        title,
    })
}

/// Renders a forecast/previous/actual field for the summary line. Absent
/// fields print as `None`, strings print bare (no quotes).
fn summary_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "None".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
