//! Shared HTTP client + builder.
//!
//! Both fetchers borrow a [`FeedClient`]; it owns the `reqwest` client and the
//! provider base URLs (overridable so tests can point at a mock server).

use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::FeedError;

const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
const DEFAULT_BASE_CALENDAR: &str = "https://www.jblanked.com/news/api/calendar/";

/// Environment variable consulted for the calendar provider key when the
/// builder is not given one explicitly.
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0";

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_chart: Url,
    base_calendar: Url,
    calendar_api_key: Option<String>,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /* -------- internal getters used by the fetcher modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_calendar(&self) -> &Url {
        &self.base_calendar
    }
    pub(crate) fn calendar_api_key(&self) -> Option<&str> {
        self.calendar_api_key.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_calendar: Option<Url>,
    calendar_api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the economic-calendar API base.
    #[must_use]
    pub fn base_calendar(mut self, url: Url) -> Self {
        self.base_calendar = Some(url);
        self
    }

    /// Provide the calendar provider key directly instead of reading
    /// `NEWS_API_KEY` from the environment.
    #[must_use]
    pub fn calendar_api_key(mut self, key: impl Into<String>) -> Self {
        self.calendar_api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_calendar = self
            .base_calendar
            .unwrap_or(Url::parse(DEFAULT_BASE_CALENDAR)?);

        let calendar_api_key = self
            .calendar_api_key
            .or_else(|| env::var(NEWS_API_KEY_VAR).ok())
            .filter(|k| !k.is_empty());

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(FeedClient {
            http: httpb.build()?,
            base_chart,
            base_calendar,
            calendar_api_key,
        })
    }
}
