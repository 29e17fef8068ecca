//! Click analytics aggregation.
//!
//! Pure functions that fold a link's click history into a report of
//! time-series and top-N breakdowns. Keeping this layer free of I/O lets
//! every classification rule be unit tested with hand-built click lists.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::domain::entities::{Click, Link};

/// Breakdowns larger than this are cut to the highest counts.
const TOP_LIMIT: usize = 10;

/// Time window for filtering click history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last90Days,
    #[default]
    All,
}

impl TimeRange {
    /// Inclusive lower bound of the window, or `None` for all time.
    pub fn start(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeRange::Last7Days => Some(now - Duration::days(7)),
            TimeRange::Last30Days => Some(now - Duration::days(30)),
            TimeRange::Last90Days => Some(now - Duration::days(90)),
            TimeRange::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
            TimeRange::All => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unrecognized values fall back to the all-time window instead of
// rejecting the request.
impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "7d" => TimeRange::Last7Days,
            "30d" => TimeRange::Last30Days,
            "90d" => TimeRange::Last90Days,
            _ => TimeRange::All,
        })
    }
}

/// One day of click activity, dates formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyClicks {
    pub date: String,
    pub clicks: u64,
}

/// Clicks landing within one hour of the day (0-23, UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyClicks {
    pub hour: u32,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferrerCount {
    pub referrer: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserCount {
    pub browser: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsCount {
    pub os: String,
    pub count: u64,
}

/// Full analytics report for one link over a time window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub short_code: String,
    pub long_url: String,
    /// Lifetime clicks, independent of the requested window.
    pub total_clicks: i64,
    /// Clicks that fall inside the requested window.
    pub filtered_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub time_range: TimeRange,
    pub daily_clicks: Vec<DailyClicks>,
    pub hourly_clicks: Vec<HourlyClicks>,
    pub top_referrers: Vec<ReferrerCount>,
    pub top_countries: Vec<CountryCount>,
    pub top_devices: Vec<DeviceCount>,
    pub top_browsers: Vec<BrowserCount>,
    pub top_operating_systems: Vec<OsCount>,
}

/// Builds the analytics report for `link` from its full click history.
///
/// Clicks outside `range` (relative to `now`) are discarded first. When no
/// clicks survive the filter, every breakdown is empty, including the hourly
/// distribution.
pub fn build_report(
    link: &Link,
    clicks: &[Click],
    range: TimeRange,
    now: DateTime<Utc>,
) -> AnalyticsReport {
    let filtered: Vec<&Click> = match range.start(now) {
        Some(start) => clicks.iter().filter(|c| c.accessed_at >= start).collect(),
        None => clicks.iter().collect(),
    };

    let (daily, hourly, referrers, countries, devices, browsers, operating_systems) =
        if filtered.is_empty() {
            Default::default()
        } else {
            (
                daily_clicks(&filtered),
                hourly_distribution(&filtered),
                top_referrers(&filtered),
                top_countries(&filtered),
                top_devices(&filtered),
                top_browsers(&filtered),
                top_operating_systems(&filtered),
            )
        };

    AnalyticsReport {
        short_code: link.code.clone(),
        long_url: link.long_url.clone(),
        total_clicks: link.click_count,
        filtered_clicks: filtered.len() as u64,
        created_at: link.created_at,
        expires_at: link.expires_at,
        time_range: range,
        daily_clicks: daily,
        hourly_clicks: hourly,
        top_referrers: referrers,
        top_countries: countries,
        top_devices: devices,
        top_browsers: browsers,
        top_operating_systems: operating_systems,
    }
}

/// Per-day totals in ascending date order.
fn daily_clicks(clicks: &[&Click]) -> Vec<DailyClicks> {
    let mut per_day: BTreeMap<chrono::NaiveDate, u64> = BTreeMap::new();
    for click in clicks {
        *per_day.entry(click.accessed_at.date_naive()).or_default() += 1;
    }

    per_day
        .into_iter()
        .map(|(date, clicks)| DailyClicks {
            date: date.format("%Y-%m-%d").to_string(),
            clicks,
        })
        .collect()
}

/// All 24 hour buckets, in order, zeros included.
fn hourly_distribution(clicks: &[&Click]) -> Vec<HourlyClicks> {
    let mut buckets = [0u64; 24];
    for click in clicks {
        buckets[click.accessed_at.hour() as usize] += 1;
    }

    buckets
        .iter()
        .enumerate()
        .map(|(hour, &clicks)| HourlyClicks {
            hour: hour as u32,
            clicks,
        })
        .collect()
}

/// Counts occurrences of a label per click, preserving first-encounter order
/// among equal counts, then sorts by count descending.
fn counted_labels<F>(clicks: &[&Click], label_of: F) -> Vec<(String, u64)>
where
    F: Fn(&Click) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for &click in clicks {
        let label = label_of(click);
        counts
            .entry(label.clone())
            .and_modify(|c| *c += 1)
            .or_insert_with(|| {
                order.push(label);
                1
            });
    }

    let mut out: Vec<(String, u64)> = order
        .into_iter()
        .map(|label| {
            let count = counts[&label];
            (label, count)
        })
        .collect();
    // Stable sort keeps first-seen labels ahead on ties.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

fn top_referrers(clicks: &[&Click]) -> Vec<ReferrerCount> {
    let mut out: Vec<ReferrerCount> = counted_labels(clicks, |c| referrer_label(&c.referrer))
        .into_iter()
        .map(|(referrer, count)| ReferrerCount { referrer, count })
        .collect();
    out.truncate(TOP_LIMIT);
    out
}

/// Collapses referrer URLs to their host; the `Direct` and `Unknown`
/// sentinels and unparseable values pass through untouched.
fn referrer_label(referrer: &str) -> String {
    if referrer == "Direct" || referrer == "Unknown" {
        return referrer.to_string();
    }

    match Url::parse(referrer) {
        Ok(url) => url
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| referrer.to_string()),
        Err(_) => referrer.to_string(),
    }
}

fn top_countries(clicks: &[&Click]) -> Vec<CountryCount> {
    let mut out: Vec<CountryCount> =
        counted_labels(clicks, |c| country_label(c.ip_address.as_deref()))
            .into_iter()
            .map(|(country, count)| CountryCount { country, count })
            .collect();
    out.truncate(TOP_LIMIT);
    out
}

/// Coarse origin classification from the IP address. Private ranges map to
/// `Local Network`, anything else routable to `International`; no GeoIP
/// lookup is performed.
fn country_label(ip: Option<&str>) -> String {
    match ip {
        Some(ip) => {
            if ip.starts_with("192.168.") || ip.starts_with("10.") || ip.starts_with("172.") {
                "Local Network".to_string()
            } else {
                "International".to_string()
            }
        }
        None => "Unknown".to_string(),
    }
}

fn top_devices(clicks: &[&Click]) -> Vec<DeviceCount> {
    counted_labels(clicks, |c| device_label(c.user_agent.as_deref()))
        .into_iter()
        .map(|(device, count)| DeviceCount { device, count })
        .collect()
}

const MOBILE_SIGNATURES: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Device class from the user agent. Signatures match case-insensitively;
/// iPad is the only tablet signal.
fn device_label(user_agent: Option<&str>) -> String {
    let ua = user_agent.unwrap_or_default().to_ascii_lowercase();

    if MOBILE_SIGNATURES.iter().any(|sig| ua.contains(sig)) {
        if ua.contains("ipad") {
            "Tablet".to_string()
        } else {
            "Mobile".to_string()
        }
    } else {
        "Desktop".to_string()
    }
}

fn top_browsers(clicks: &[&Click]) -> Vec<BrowserCount> {
    counted_labels(clicks, |c| browser_label(c.user_agent.as_deref()))
        .into_iter()
        .map(|(browser, count)| BrowserCount { browser, count })
        .collect()
}

/// Browser family from the user agent. Token checks are case sensitive and
/// ordered, so Chrome wins over the Safari token it also carries.
fn browser_label(user_agent: Option<&str>) -> String {
    let ua = user_agent.unwrap_or_default();

    for token in ["Chrome", "Firefox", "Safari", "Edge", "Opera"] {
        if ua.contains(token) {
            return token.to_string();
        }
    }
    "Unknown".to_string()
}

fn top_operating_systems(clicks: &[&Click]) -> Vec<OsCount> {
    counted_labels(clicks, |c| os_label(c.user_agent.as_deref()))
        .into_iter()
        .map(|(os, count)| OsCount { os, count })
        .collect()
}

fn os_label(user_agent: Option<&str>) -> String {
    let ua = user_agent.unwrap_or_default();

    if ua.contains("Windows") {
        "Windows".to_string()
    } else if ua.contains("Mac OS") {
        "macOS".to_string()
    } else if ua.contains("Linux") {
        "Linux".to_string()
    } else if ua.contains("Android") {
        "Android".to_string()
    } else if ua.contains("iOS") {
        "iOS".to_string()
    } else {
        "Unknown".to_string()
    }
}
