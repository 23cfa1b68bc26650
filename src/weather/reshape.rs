//! Forecast reshaping
//!
//! Turns raw weather.gov periods into the flat [`WeatherSummary`] clients
//! consume.

use chrono::Timelike;

use crate::models::{DailyForecast, WeatherSummary};
use crate::weather::ForecastPeriod;
use crate::{FetchStep, OutfitError, Result};

/// Number of daytime entries in the short-range forecast
pub const FORECAST_DAYS: usize = 3;

const UNITS: &str = "imperial";

/// Build the summary from the daily and hourly period lists
pub fn reshape(
    location_name: &str,
    daily: &[ForecastPeriod],
    hourly: &[ForecastPeriod],
) -> Result<WeatherSummary> {
    let current = hourly
        .first()
        .ok_or_else(|| OutfitError::upstream(FetchStep::HourlyForecast, "no hourly periods"))?;

    let temperature = f64::from(current.temperature);

    Ok(WeatherSummary {
        location_name: location_name.to_string(),
        temperature_f: temperature,
        feels_like_f: temperature,
        condition_text: current.short_forecast.clone(),
        humidity_pct: current
            .relative_humidity
            .as_ref()
            .and_then(|h| h.value)
            .unwrap_or(0.0),
        wind_speed_mph: parse_wind_speed(&current.wind_speed),
        uv_index_estimate: estimate_uv_index(&current.short_forecast, current.start_time.hour()),
        three_day_forecast: daily_forecast(daily),
        units: UNITS.to_string(),
    })
}

/// First [`FORECAST_DAYS`] daytime periods, each paired with the night that
/// follows it on the same local date
pub fn daily_forecast(periods: &[ForecastPeriod]) -> Vec<DailyForecast> {
    periods
        .iter()
        .filter(|p| p.is_daytime)
        .take(FORECAST_DAYS)
        .map(|day| DailyForecast {
            day: day.name.split_whitespace().next().unwrap_or_default().to_string(),
            condition: day.short_forecast.clone(),
            high_f: day.temperature,
            low_f: night_after(day, periods).map(|night| night.temperature),
        })
        .collect()
}

fn night_after<'a>(day: &ForecastPeriod, periods: &'a [ForecastPeriod]) -> Option<&'a ForecastPeriod> {
    let date = day.start_time.date_naive();
    periods.iter().find(|p| {
        !p.is_daytime && p.start_time.date_naive() == date && p.start_time > day.start_time
    })
}

/// Leading number of a weather.gov wind text ("5 to 10 mph" -> 5), 0 if none
pub fn parse_wind_speed(text: &str) -> f64 {
    text.split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0.0)
}

/// Rough UV index from the condition text and local hour of day.
///
/// weather.gov publishes no UV data; sunny skies around midday score high.
#[must_use]
pub fn estimate_uv_index(condition: &str, local_hour: u32) -> u8 {
    let sunny = condition.to_lowercase().contains("sunny");
    match (sunny, local_hour) {
        (true, 11..=15) => 7,
        (true, _) => 4,
        (false, _) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn period(
        name: &str,
        start: &str,
        is_daytime: bool,
        temperature: i32,
        short_forecast: &str,
    ) -> ForecastPeriod {
        serde_json::from_value(json!({
            "number": 1,
            "name": name,
            "startTime": start,
            "endTime": start,
            "isDaytime": is_daytime,
            "temperature": temperature,
            "windSpeed": "5 to 10 mph",
            "shortForecast": short_forecast,
            "relativeHumidity": {"value": 40}
        }))
        .unwrap()
    }

    #[rstest]
    #[case("Sunny", 13, 7)]
    #[case("Mostly Sunny", 11, 7)]
    #[case("Sunny", 15, 7)]
    #[case("Sunny", 10, 4)]
    #[case("Sunny", 16, 4)]
    #[case("Sunny", 8, 4)]
    #[case("Cloudy", 13, 2)]
    #[case("Clear", 13, 2)]
    fn test_estimate_uv_index(#[case] condition: &str, #[case] hour: u32, #[case] expected: u8) {
        assert_eq!(estimate_uv_index(condition, hour), expected);
    }

    #[rstest]
    #[case("10 mph", 10.0)]
    #[case("5 to 10 mph", 5.0)]
    #[case("", 0.0)]
    #[case("calm", 0.0)]
    fn test_parse_wind_speed(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_wind_speed(text), expected);
    }

    #[test]
    fn test_reshape_uses_first_hourly_period() {
        let hourly = vec![
            period("", "2024-06-04T13:00:00-06:00", true, 78, "Sunny"),
            period("", "2024-06-04T14:00:00-06:00", true, 80, "Sunny"),
        ];
        let summary = reshape("Denver, Colorado", &[], &hourly).unwrap();

        assert_eq!(summary.location_name, "Denver, Colorado");
        assert_eq!(summary.temperature_f, 78.0);
        assert_eq!(summary.feels_like_f, 78.0);
        assert_eq!(summary.humidity_pct, 40.0);
        assert_eq!(summary.wind_speed_mph, 5.0);
        assert_eq!(summary.uv_index_estimate, 7);
        assert_eq!(summary.units, "imperial");
        assert!(summary.three_day_forecast.is_empty());
    }

    #[test]
    fn test_reshape_uses_local_hour_for_uv() {
        // 13:00 local is 19:00 UTC; the local hour is what counts
        let hourly = vec![period("", "2024-06-04T13:00:00-06:00", true, 78, "Sunny")];
        assert_eq!(reshape("x", &[], &hourly).unwrap().uv_index_estimate, 7);

        let hourly = vec![period("", "2024-06-04T19:00:00+00:00", true, 78, "Sunny")];
        assert_eq!(reshape("x", &[], &hourly).unwrap().uv_index_estimate, 4);
    }

    #[test]
    fn test_reshape_without_hourly_periods_fails() {
        let err = reshape("x", &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            OutfitError::Upstream {
                step: FetchStep::HourlyForecast,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_humidity_defaults_to_zero() {
        let mut current = period("", "2024-06-04T13:00:00-06:00", true, 78, "Sunny");
        current.relative_humidity = None;
        assert_eq!(reshape("x", &[], &[current]).unwrap().humidity_pct, 0.0);
    }

    #[test]
    fn test_daily_forecast_pairs_lows_by_date() {
        let periods = vec![
            period("Today", "2024-06-04T06:00:00-06:00", true, 84, "Sunny"),
            period("Tonight", "2024-06-04T18:00:00-06:00", false, 55, "Clear"),
            period("Wednesday", "2024-06-05T06:00:00-06:00", true, 80, "Chance Showers"),
            period("Wednesday Night", "2024-06-05T18:00:00-06:00", false, 52, "Rain"),
            period("Thursday", "2024-06-06T06:00:00-06:00", true, 70, "Cloudy"),
            period("Thursday Night", "2024-06-06T18:00:00-06:00", false, 50, "Cloudy"),
            period("Friday", "2024-06-07T06:00:00-06:00", true, 75, "Sunny"),
        ];

        let days = daily_forecast(&periods);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].day, "Today");
        assert_eq!(days[0].low_f, Some(55));
        assert_eq!(days[1].day, "Wednesday");
        assert_eq!(days[1].condition, "Chance Showers");
        assert_eq!(days[1].high_f, 80);
        assert_eq!(days[1].low_f, Some(52));
        assert_eq!(days[2].day, "Thursday");
        assert_eq!(days[2].low_f, Some(50));
    }

    #[test]
    fn test_daily_forecast_starting_at_night() {
        // Fetched in the evening: the list opens with tonight
        let periods = vec![
            period("Tonight", "2024-06-04T18:00:00-06:00", false, 55, "Clear"),
            period("Wednesday", "2024-06-05T06:00:00-06:00", true, 80, "Sunny"),
            period("Wednesday Night", "2024-06-05T18:00:00-06:00", false, 52, "Clear"),
            period("Thursday", "2024-06-06T06:00:00-06:00", true, 70, "Cloudy"),
        ];

        let days = daily_forecast(&periods);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, "Wednesday");
        assert_eq!(days[0].low_f, Some(52));
        assert_eq!(days[1].day, "Thursday");
        assert_eq!(days[1].low_f, None);
    }

    #[test]
    fn test_overnight_period_is_not_a_low() {
        // After midnight the list opens with an "Overnight" period dated today
        let periods = vec![
            period("Overnight", "2024-06-04T01:00:00-06:00", false, 48, "Clear"),
            period("Today", "2024-06-04T06:00:00-06:00", true, 84, "Sunny"),
            period("Tonight", "2024-06-04T18:00:00-06:00", false, 55, "Clear"),
        ];

        let days = daily_forecast(&periods);
        assert_eq!(days[0].low_f, Some(55));
    }
}
