//! Weather normalizer
//!
//! Turns provider payloads into a [`WeatherReport`]: one snapshot for now and
//! a series of daily aggregates, excluding today, capped at seven days.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{GpsCoordinates, TemperatureRange, WeatherReport, WeatherSnapshot, WeatherView};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::external::weather::{
    OwmCurrentResponse, OwmForecastItem, OwmForecastResponse, OwmWeather, WeatherClient,
};

const KELVIN_OFFSET: f64 = 273.15;
const MPS_TO_KMH: f64 = 3.6;
const MAX_FORECAST_DAYS: usize = 7;

/// Cities with a known coordinate mapping
pub const CITIES: &[&str] = &["Delhi", "Mumbai", "Bangalore", "Kolkata", "Chennai"];

/// Look up coordinates for a supported city
pub fn city_coordinates(city: &str) -> Option<GpsCoordinates> {
    let (lat, lon) = match city {
        "Delhi" => (286139, 772090),
        "Mumbai" => (190760, 728777),
        "Bangalore" => (129716, 775946),
        "Kolkata" => (225726, 883639),
        "Chennai" => (130827, 802707),
        _ => return None,
    };
    Some(GpsCoordinates::new(Decimal::new(lat, 4), Decimal::new(lon, 4)))
}

/// Convert Kelvin to whole degrees Celsius, rounding halves up
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    round_half_up(kelvin - KELVIN_OFFSET)
}

/// Convert metres per second to whole km/h, rounding halves up
pub fn mps_to_kmh(speed: f64) -> i32 {
    round_half_up(speed * MPS_TO_KMH)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn local_date(timestamp: i64, offset: FixedOffset) -> NaiveDate {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
        .date_naive()
}

fn utc_offset(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

fn condition_fields(weather: &[OwmWeather]) -> (String, String, Option<String>) {
    match weather.first() {
        Some(w) => (
            w.main.to_lowercase(),
            w.description.clone(),
            Some(w.icon.clone()).filter(|icon| !icon.is_empty()),
        ),
        None => (String::new(), String::new(), None),
    }
}

/// Build the snapshot for the current observation
pub fn current_snapshot(current: &OwmCurrentResponse) -> WeatherSnapshot {
    let (condition, description, icon) = condition_fields(&current.weather);

    WeatherSnapshot {
        date: local_date(current.dt, utc_offset(current.timezone)),
        temperature: TemperatureRange {
            max: kelvin_to_celsius(current.main.temp),
            min: kelvin_to_celsius(current.main.temp_min),
        },
        humidity_percent: current.main.humidity,
        rainfall_mm: current
            .rain
            .as_ref()
            .and_then(|r| r.one_hour)
            .unwrap_or(0.0),
        wind_speed_kmh: mps_to_kmh(current.wind.speed),
        condition,
        description,
        icon,
        feels_like_celsius: Some(kelvin_to_celsius(current.main.feels_like)),
    }
}

struct DayGroup<'a> {
    first: &'a OwmForecastItem,
    max_kelvin: f64,
    min_kelvin: f64,
}

/// Aggregate 3-hourly samples into daily snapshots
///
/// Samples are grouped by calendar date at the given UTC offset. The first
/// sample of each date supplies humidity, wind, rainfall and condition; the
/// temperature range spans every sample of the date. The earliest date is
/// dropped and at most seven following dates are kept.
pub fn daily_forecast(items: &[OwmForecastItem], offset_seconds: i32) -> Vec<WeatherSnapshot> {
    let offset = utc_offset(offset_seconds);
    let mut groups: BTreeMap<NaiveDate, DayGroup<'_>> = BTreeMap::new();

    for item in items {
        let date = local_date(item.dt, offset);
        let temp = item.main.temp;
        groups
            .entry(date)
            .and_modify(|g| {
                g.max_kelvin = g.max_kelvin.max(temp);
                g.min_kelvin = g.min_kelvin.min(temp);
            })
            .or_insert(DayGroup {
                first: item,
                max_kelvin: temp,
                min_kelvin: temp,
            });
    }

    groups
        .into_iter()
        .skip(1)
        .take(MAX_FORECAST_DAYS)
        .map(|(date, group)| {
            let (condition, description, icon) = condition_fields(&group.first.weather);
            WeatherSnapshot {
                date,
                temperature: TemperatureRange {
                    max: kelvin_to_celsius(group.max_kelvin),
                    min: kelvin_to_celsius(group.min_kelvin),
                },
                humidity_percent: group.first.main.humidity,
                rainfall_mm: group
                    .first
                    .rain
                    .as_ref()
                    .and_then(|r| r.three_hour)
                    .unwrap_or(0.0),
                wind_speed_kmh: mps_to_kmh(group.first.wind.speed),
                condition,
                description,
                icon,
                feels_like_celsius: None,
            }
        })
        .collect()
}

/// Normalize both provider payloads into a report for `location`
pub fn normalize(
    current: &OwmCurrentResponse,
    forecast: &OwmForecastResponse,
    location: &str,
) -> WeatherReport {
    let offset = forecast
        .city
        .as_ref()
        .map(|c| c.timezone)
        .unwrap_or(current.timezone);

    WeatherReport {
        location: location.to_string(),
        current: current_snapshot(current),
        daily: daily_forecast(&forecast.list, offset),
    }
}

/// Weather service backed by the provider client
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch and normalize weather for a supported city
    ///
    /// Unknown cities fail before any request is made. The current and
    /// forecast calls run one after the other and either failing fails the
    /// whole fetch.
    #[instrument(skip(self))]
    pub async fn fetch_report(&self, city: &str) -> AppResult<WeatherReport> {
        let coords =
            city_coordinates(city).ok_or_else(|| AppError::UnknownLocation(city.to_string()))?;

        let current = self.client.get_current_weather(coords).await?;
        let forecast = self.client.get_forecast(coords).await?;

        let report = normalize(&current, &forecast, city);
        info!(days = report.daily.len(), "Weather report ready");
        Ok(report)
    }
}

/// Idle time after which a session's selection is forgotten
pub const SELECTION_TTL: Duration = Duration::from_secs(30 * 60);

/// Most sessions tracked at once; the least recently touched is evicted first
pub const MAX_SELECTIONS: usize = 10_000;

/// Identifies one weather request made for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionToken {
    pub session: String,
    pub generation: u64,
    slot: u64,
}

/// The weather panel state of one session
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub generation: u64,
    pub city: String,
    pub view: WeatherView,
}

struct SelectionEntry {
    // Distinguishes a re-created session from an evicted one with the same id
    slot: u64,
    touched: Instant,
    selection: Selection,
}

#[derive(Default)]
struct SelectionTable {
    entries: HashMap<String, SelectionEntry>,
    next_slot: u64,
}

/// Per-session weather selections
///
/// Every new selection bumps the session's generation. A result is applied
/// only if it belongs to the latest generation, so a slow response for an
/// earlier city never overwrites a newer one. Sessions idle longer than the
/// TTL are dropped, and the table never holds more than `capacity` sessions.
#[derive(Clone)]
pub struct WeatherSelections {
    inner: Arc<RwLock<SelectionTable>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for WeatherSelections {
    fn default() -> Self {
        Self::with_limits(SELECTION_TTL, MAX_SELECTIONS)
    }
}

impl WeatherSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SelectionTable::default())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Start a new selection and mark the panel as loading
    pub async fn begin(&self, session: &str, city: &str) -> SelectionToken {
        let mut guard = self.inner.write().await;
        let table = &mut *guard;
        let now = Instant::now();
        let ttl = self.ttl;

        table
            .entries
            .retain(|_, entry| now.duration_since(entry.touched) <= ttl);

        if !table.entries.contains_key(session) && table.entries.len() >= self.capacity {
            let oldest = table
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| id.clone());
            if let Some(id) = oldest {
                debug!(session = %id, "Evicting least recently used weather selection");
                table.entries.remove(&id);
            }
        }

        let (slot, generation) = match table.entries.get(session) {
            Some(entry) => (entry.slot, entry.selection.generation + 1),
            None => {
                table.next_slot += 1;
                (table.next_slot, 1)
            }
        };

        table.entries.insert(
            session.to_string(),
            SelectionEntry {
                slot,
                touched: now,
                selection: Selection {
                    generation,
                    city: city.to_string(),
                    view: WeatherView::Loading,
                },
            },
        );

        SelectionToken {
            session: session.to_string(),
            generation,
            slot,
        }
    }

    /// Apply a finished request's view; returns false if it was superseded
    pub async fn complete(&self, token: &SelectionToken, view: WeatherView) -> bool {
        let mut table = self.inner.write().await;
        match table.entries.get_mut(&token.session) {
            Some(entry)
                if entry.slot == token.slot && entry.selection.generation == token.generation =>
            {
                entry.selection.view = view;
                entry.touched = Instant::now();
                true
            }
            _ => {
                debug!(
                    session = %token.session,
                    generation = token.generation,
                    "Discarding stale weather result"
                );
                false
            }
        }
    }

    /// Current selection of a session
    pub async fn current(&self, session: &str) -> Option<Selection> {
        self.inner
            .read()
            .await
            .entries
            .get(session)
            .filter(|entry| entry.touched.elapsed() <= self.ttl)
            .map(|entry| entry.selection.clone())
    }

    /// Number of sessions currently held
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
