//! Narrow interfaces the card depends on, with the default implementations used by the server.
//!
//! The card never reads the clock, builds URLs, or formats numbers on its own; every such
//! concern comes in through one of these traits so classification and layout stay pure.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::theme::Theme;

/// Addressable detail page for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationTarget {
    href: String,
}

impl NavigationTarget {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// Builds the navigation target for a slug.
pub trait DetailRouter: Send + Sync {
    fn detail_target(&self, slug: &str) -> NavigationTarget;
}

/// Turns a numeric amount into display text.
pub trait PriceFormatter: Send + Sync {
    fn format_price(&self, amount: f64) -> String;
}

/// Produces `"{count} {unit}"` with the right number agreement.
pub trait Pluralizer: Send + Sync {
    fn pluralize(&self, unit_label: &str, count: u32) -> String;
}

/// Decides whether a release date counts as new.
pub trait ReleaseRecency: Send + Sync {
    fn is_recent_release(&self, release_date: DateTime<Utc>) -> bool;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> ReleaseRecency for F
where
    F: Fn(DateTime<Utc>) -> bool + Send + Sync,
{
    fn is_recent_release(&self, release_date: DateTime<Utc>) -> bool {
        self(release_date)
    }
}

impl<F> Pluralizer for F
where
    F: Fn(&str, u32) -> String + Send + Sync,
{
    fn pluralize(&self, unit_label: &str, count: u32) -> String {
        self(unit_label, count)
    }
}

impl<F> PriceFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format_price(&self, amount: f64) -> String {
        self(amount)
    }
}

/// Detail pages live under a fixed path prefix, e.g. `/shoe/{slug}`.
#[derive(Debug, Clone)]
pub struct PathRouter {
    prefix: String,
}

impl PathRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for PathRouter {
    fn default() -> Self {
        Self::new("/shoe")
    }
}

impl DetailRouter for PathRouter {
    fn detail_target(&self, slug: &str) -> NavigationTarget {
        NavigationTarget::new(format!("{}/{slug}", self.prefix))
    }
}

/// Formats minor-unit amounts with a currency symbol.
///
/// `15000` with two minor units renders as `$150`; fractional results keep only the digits
/// the value needs (`$129.99`, `$10.5`).
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    minor_units: u32,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, minor_units: u32) -> Self {
        Self {
            symbol: symbol.into(),
            minor_units,
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$", 2)
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format_price(&self, amount: f64) -> String {
        let scale = 10_f64.powi(i32::try_from(self.minor_units).unwrap_or(i32::MAX));
        format!("{}{}", self.symbol, amount / scale)
    }
}

/// Appends `s` to the unit for any count other than one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, unit_label: &str, count: u32) -> String {
        if count == 1 {
            format!("{count} {unit_label}")
        } else {
            format!("{count} {unit_label}s")
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A release is new while it is younger than `window`.
pub struct RecencyWindow {
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl RecencyWindow {
    pub const DEFAULT_DAYS: i64 = 30;

    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { window, clock }
    }

    /// Window of `days` days. Values beyond what a [`Duration`] can hold saturate.
    pub fn days(days: i64, clock: Arc<dyn Clock>) -> Self {
        let window = Duration::try_days(days).unwrap_or(if days < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        });
        Self::new(window, clock)
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS, Arc::new(SystemClock))
    }
}

impl fmt::Debug for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyWindow")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl ReleaseRecency for RecencyWindow {
    fn is_recent_release(&self, release_date: DateTime<Utc>) -> bool {
        self.clock.now() - release_date < self.window
    }
}

/// Everything a card needs from the outside world for one render.
#[derive(Clone)]
pub struct CardEnv {
    pub router: Arc<dyn DetailRouter>,
    pub formatter: Arc<dyn PriceFormatter>,
    pub pluralizer: Arc<dyn Pluralizer>,
    pub recency: Arc<dyn ReleaseRecency>,
    pub theme: Theme,
}

impl Default for CardEnv {
    fn default() -> Self {
        Self {
            router: Arc::new(PathRouter::default()),
            formatter: Arc::new(CurrencyFormatter::default()),
            pluralizer: Arc::new(EnglishPluralizer),
            recency: Arc::new(RecencyWindow::default()),
            theme: Theme::default(),
        }
    }
}

impl CardEnv {
    #[must_use]
    pub fn with_router(mut self, router: impl DetailRouter + 'static) -> Self {
        self.router = Arc::new(router);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl PriceFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn with_pluralizer(mut self, pluralizer: impl Pluralizer + 'static) -> Self {
        self.pluralizer = Arc::new(pluralizer);
        self
    }

    #[must_use]
    pub fn with_recency(mut self, recency: impl ReleaseRecency + 'static) -> Self {
        self.recency = Arc::new(recency);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl fmt::Debug for CardEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardEnv")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
