//! macrofeed: data feeds for a macro market dashboard.
//!
//! Two independent fetchers, both strictly sequential:
//! - [`CalendarFetcher`] pulls economic-calendar events for today and tomorrow
//!   from the JBlanked news API, deduplicates them by title, and serves repeat
//!   calls from a TTL cache behind a fixed rate-limit window.
//! - [`MarketPricesBuilder`] walks a fixed table of macro instruments, pulls a
//!   one-day chart per ticker from the Yahoo Finance v8 endpoint, and reduces
//!   each to latest close plus intraday change.

pub mod calendar;
pub mod client;
pub mod error;
pub mod prices;

pub use calendar::{CalendarFetcher, NewsItem};
pub use client::FeedClient;
pub use error::FeedError;
pub use prices::{DEFAULT_INSTRUMENTS, MarketPricesBuilder, PriceRecord};
