//! Outfit Rule Engine
//!
//! Maps a [`WeatherSummary`] to clothing advice. The base layer comes from an
//! ordered table of temperature bands evaluated top to bottom (first match
//! wins); condition modifiers then append accessories independently of the
//! band and of each other. Pure: no I/O, no clock.

use crate::models::outfit::MAX_TIPS;
use crate::models::{OutfitRecommendation, TipIcon, WeatherSummary, WeatherTip};

/// Wind speed (mph) above which conditions count as windy
pub const WINDY_MPH: f64 = 15.0;
/// Relative humidity (%) above which conditions count as humid
pub const HUMID_PCT: f64 = 70.0;
/// Temperature (°F) above which humidity and sun modifiers apply
pub const WARM_F: f64 = 70.0;

/// Base garments for one temperature range
#[derive(Debug)]
pub struct TemperatureBand {
    /// Exclusive upper bound in °F
    pub below_f: f64,
    pub top: &'static str,
    pub bottom: &'static str,
    pub accessories: &'static [&'static str],
}

impl TemperatureBand {
    fn contains(&self, temperature_f: f64) -> bool {
        temperature_f < self.below_f
    }
}

/// Evaluated in order; the last entry is the catch-all.
pub static TEMPERATURE_BANDS: [TemperatureBand; 6] = [
    TemperatureBand {
        below_f: 32.0,
        top: "Heavy winter coat, thermal shirt, sweater",
        bottom: "Thermal underwear, heavy pants",
        accessories: &["Warm hat", "Gloves", "Scarf", "Insulated boots"],
    },
    TemperatureBand {
        below_f: 45.0,
        top: "Winter coat or heavy jacket, sweater",
        bottom: "Jeans or warm pants",
        accessories: &["Light gloves", "Hat"],
    },
    TemperatureBand {
        below_f: 60.0,
        top: "Light jacket or heavy sweater",
        bottom: "Pants or jeans",
        accessories: &["Light scarf (optional)"],
    },
    TemperatureBand {
        below_f: 75.0,
        top: "Long-sleeve shirt or light sweater",
        bottom: "Pants, jeans, or skirt with leggings",
        accessories: &[],
    },
    TemperatureBand {
        below_f: 85.0,
        top: "T-shirt or short-sleeve shirt",
        bottom: "Shorts, skirt, or light pants",
        accessories: &[],
    },
    TemperatureBand {
        below_f: f64::INFINITY,
        top: "Light, breathable t-shirt or tank top",
        bottom: "Shorts or light skirt",
        accessories: &["Hat for sun protection"],
    },
];

const RAIN_GEAR: &[&str] = &[
    "Raincoat or waterproof jacket",
    "Umbrella",
    "Waterproof shoes",
];
const SNOW_GEAR: &[&str] = &["Waterproof boots", "Waterproof gloves"];
const WIND_GEAR: &str = "Windbreaker (if not already wearing a jacket)";
const HUMID_TOP: &str = "Light, breathable clothing";
const HUMID_GEAR: &str = "Consider moisture-wicking fabrics";

const FALLBACK_TIP: &str = "Dress in layers to adjust to changing temperatures throughout the day.";

/// Condition predicates shared by garment and tip rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionFlags {
    pub raining: bool,
    pub snowing: bool,
    pub windy: bool,
    pub humid: bool,
    pub sunny: bool,
}

impl ConditionFlags {
    #[must_use]
    pub fn from_summary(summary: &WeatherSummary) -> Self {
        let condition = summary.condition_text.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| condition.contains(w));

        Self {
            raining: mentions(&["rain", "shower", "drizzle"]),
            snowing: mentions(&["snow", "flurries"]),
            windy: summary.wind_speed_mph > WINDY_MPH,
            humid: summary.humidity_pct > HUMID_PCT,
            sunny: mentions(&["sunny", "clear"]),
        }
    }
}

/// Pick the first band whose range contains the temperature
#[must_use]
pub fn temperature_band(temperature_f: f64) -> &'static TemperatureBand {
    let catch_all = &TEMPERATURE_BANDS[TEMPERATURE_BANDS.len() - 1];
    TEMPERATURE_BANDS
        .iter()
        .find(|band| band.contains(temperature_f))
        .unwrap_or(catch_all)
}

/// Build the full recommendation for a weather summary
#[must_use]
pub fn recommend(summary: &WeatherSummary) -> OutfitRecommendation {
    let temperature = summary.temperature_f;
    let flags = ConditionFlags::from_summary(summary);
    let band = temperature_band(temperature);

    let mut top_layer = band.top.to_string();
    let mut accessories: Vec<String> = band.accessories.iter().map(ToString::to_string).collect();

    if flags.raining {
        accessories.extend(RAIN_GEAR.iter().map(ToString::to_string));
    }
    if flags.snowing {
        accessories.extend(SNOW_GEAR.iter().map(ToString::to_string));
    }
    if flags.windy {
        accessories.push(WIND_GEAR.to_string());
    }
    // Overrides whatever the band picked for the top
    if flags.humid && temperature > WARM_F {
        top_layer = HUMID_TOP.to_string();
        accessories.push(HUMID_GEAR.to_string());
    }

    OutfitRecommendation {
        top_layer,
        bottom_layer: band.bottom.to_string(),
        accessories,
        tips: weather_tips(summary, flags),
    }
}

/// Tips mirror the garment predicates; capped at [`MAX_TIPS`] with a generic fallback
fn weather_tips(summary: &WeatherSummary, flags: ConditionFlags) -> Vec<WeatherTip> {
    let temperature = summary.temperature_f;
    let mut tips = Vec::new();

    match temperature {
        t if t < 32.0 => tips.push(WeatherTip::new(
            TipIcon::ThermometerCold,
            "Extreme cold! Limit time outdoors and dress in multiple layers to trap heat.",
        )),
        t if t < 45.0 => tips.push(WeatherTip::new(
            TipIcon::ThermometerCool,
            "Dress in layers that you can remove as needed if you warm up during the day.",
        )),
        t if t > 85.0 => tips.push(WeatherTip::new(
            TipIcon::ThermometerHot,
            "Stay hydrated and seek shade during peak sun hours (10am-4pm).",
        )),
        _ => {}
    }

    if flags.raining {
        tips.push(WeatherTip::new(
            TipIcon::Umbrella,
            "Don't forget your umbrella and consider waterproof footwear to keep your feet dry.",
        ));
    }
    if flags.snowing {
        tips.push(WeatherTip::new(
            TipIcon::Snow,
            "Wear waterproof boots with good traction to prevent slipping on snow and ice.",
        ));
    }
    if flags.windy {
        tips.push(WeatherTip::new(
            TipIcon::Wind,
            "It's quite windy today. Secure loose items and wear close-fitting clothes to reduce wind chill.",
        ));
    }
    if flags.sunny && temperature > WARM_F {
        tips.push(WeatherTip::new(
            TipIcon::Sun,
            "Wear a hat and apply sunscreen to protect your skin from UV rays.",
        ));
    }
    if flags.humid && temperature > WARM_F {
        tips.push(WeatherTip::new(
            TipIcon::Droplets,
            "High humidity makes it feel hotter. Wear light, loose-fitting clothes that breathe well.",
        ));
    }

    match summary.uv_index_estimate {
        uv if uv >= 6 => tips.push(WeatherTip::new(
            TipIcon::UvHigh,
            format!("High UV index ({uv}). Wear sunscreen, sunglasses, and protective clothing."),
        )),
        uv if uv >= 3 => tips.push(WeatherTip::new(
            TipIcon::UvModerate,
            format!("Moderate UV index ({uv}). Consider wearing sunscreen when outdoors."),
        )),
        _ => {}
    }

    if tips.is_empty() {
        tips.push(WeatherTip::new(TipIcon::Shirt, FALLBACK_TIP));
    }

    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn summary(temperature_f: f64, condition: &str) -> WeatherSummary {
        WeatherSummary {
            location_name: "Test".to_string(),
            temperature_f,
            feels_like_f: temperature_f,
            condition_text: condition.to_string(),
            humidity_pct: 40.0,
            wind_speed_mph: 5.0,
            uv_index_estimate: 2,
            three_day_forecast: vec![],
            units: "imperial".to_string(),
        }
    }

    #[rstest]
    #[case(-10.0, "Heavy winter coat")]
    #[case(31.9, "Heavy winter coat")]
    #[case(32.0, "Winter coat or heavy jacket")]
    #[case(44.0, "Winter coat or heavy jacket")]
    #[case(45.0, "Light jacket or heavy sweater")]
    #[case(60.0, "Long-sleeve shirt")]
    #[case(75.0, "T-shirt or short-sleeve shirt")]
    #[case(84.9, "T-shirt or short-sleeve shirt")]
    #[case(85.0, "Light, breathable t-shirt")]
    #[case(110.0, "Light, breathable t-shirt")]
    fn test_temperature_bands_first_match(#[case] temperature: f64, #[case] expected_top: &str) {
        assert!(temperature_band(temperature).top.starts_with(expected_top));
    }

    #[test]
    fn test_bands_are_ascending() {
        let bounds: Vec<f64> = TEMPERATURE_BANDS.iter().map(|b| b.below_f).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(bounds.last().is_some_and(|b| b.is_infinite()));
    }

    #[test]
    fn test_nan_temperature_falls_to_catch_all() {
        let band = temperature_band(f64::NAN);
        assert_eq!(band.below_f, f64::INFINITY);
    }

    #[test]
    fn test_freezing_outfit() {
        let outfit = recommend(&summary(20.0, "Cloudy"));
        assert!(outfit.top_layer.contains("Heavy winter coat"));
        assert_eq!(outfit.bottom_layer, "Thermal underwear, heavy pants");
        assert_eq!(
            outfit.accessories,
            vec!["Warm hat", "Gloves", "Scarf", "Insulated boots"]
        );
        assert_eq!(outfit.tips[0].icon, TipIcon::ThermometerCold);
    }

    #[test]
    fn test_hot_sunny_outfit() {
        let mut weather = summary(90.0, "Sunny");
        weather.uv_index_estimate = 7;
        let outfit = recommend(&weather);

        assert!(outfit.top_layer.contains("breathable"));
        assert!(outfit.accessories.iter().any(|a| a == "Hat for sun protection"));

        let icons: Vec<TipIcon> = outfit.tips.iter().map(|t| t.icon).collect();
        assert_eq!(
            icons,
            vec![TipIcon::ThermometerHot, TipIcon::Sun, TipIcon::UvHigh]
        );
        assert!(outfit.tips[2].text.contains("High UV index (7)"));
    }

    #[rstest]
    #[case(10.0, "Light Rain")]
    #[case(50.0, "Chance Showers And Thunderstorms")]
    #[case(70.0, "Patchy Drizzle")]
    #[case(95.0, "rain likely")]
    fn test_rain_always_adds_rain_gear(#[case] temperature: f64, #[case] condition: &str) {
        let outfit = recommend(&summary(temperature, condition));
        assert!(outfit.accessories.iter().any(|a| a == "Umbrella"));
        assert!(
            outfit
                .accessories
                .iter()
                .any(|a| a == "Raincoat or waterproof jacket")
        );
        assert!(outfit.tips.iter().any(|t| t.icon == TipIcon::Umbrella));
    }

    #[test]
    fn test_modifiers_are_additive() {
        let mut weather = summary(28.0, "Rain And Snow");
        weather.wind_speed_mph = 25.0;
        let outfit = recommend(&weather);

        assert_eq!(
            outfit.accessories,
            vec![
                "Warm hat",
                "Gloves",
                "Scarf",
                "Insulated boots",
                "Raincoat or waterproof jacket",
                "Umbrella",
                "Waterproof shoes",
                "Waterproof boots",
                "Waterproof gloves",
                "Windbreaker (if not already wearing a jacket)",
            ]
        );
        // cold, rain, snow; the wind tip is cut by the cap
        assert_eq!(outfit.tips.len(), MAX_TIPS);
        assert_eq!(outfit.tips[2].icon, TipIcon::Snow);
    }

    #[test]
    fn test_wind_threshold_is_exclusive() {
        let mut weather = summary(65.0, "Cloudy");
        weather.wind_speed_mph = 15.0;
        assert!(recommend(&weather).accessories.is_empty());

        weather.wind_speed_mph = 16.0;
        assert_eq!(
            recommend(&weather).accessories,
            vec!["Windbreaker (if not already wearing a jacket)"]
        );
    }

    #[test]
    fn test_humid_override_replaces_top() {
        let mut weather = summary(72.0, "Partly Cloudy");
        weather.humidity_pct = 85.0;
        let outfit = recommend(&weather);

        assert_eq!(outfit.top_layer, "Light, breathable clothing");
        assert_eq!(outfit.bottom_layer, "Pants, jeans, or skirt with leggings");
        assert_eq!(outfit.accessories, vec!["Consider moisture-wicking fabrics"]);
        assert_eq!(outfit.tips[0].icon, TipIcon::Droplets);
    }

    #[test]
    fn test_humidity_without_heat_keeps_band_top() {
        let mut weather = summary(65.0, "Fog");
        weather.humidity_pct = 95.0;
        let outfit = recommend(&weather);
        assert_eq!(outfit.top_layer, "Long-sleeve shirt or light sweater");
    }

    #[test]
    fn test_fallback_tip_when_nothing_matches() {
        let outfit = recommend(&summary(65.0, "Cloudy"));
        assert_eq!(outfit.tips.len(), 1);
        assert_eq!(outfit.tips[0].icon, TipIcon::Shirt);
        assert_eq!(outfit.tips[0].text, FALLBACK_TIP);
    }

    #[test]
    fn test_moderate_uv_tip() {
        let mut weather = summary(65.0, "Mostly Sunny");
        weather.uv_index_estimate = 4;
        let outfit = recommend(&weather);
        assert_eq!(outfit.tips.len(), 1);
        assert_eq!(outfit.tips[0].icon, TipIcon::UvModerate);
    }

    #[test]
    fn test_condition_match_is_case_insensitive() {
        let flags = ConditionFlags::from_summary(&summary(40.0, "SNOW SHOWERS"));
        assert!(flags.snowing);
        assert!(flags.raining);
        assert!(!flags.sunny);

        let flags = ConditionFlags::from_summary(&summary(40.0, "Clear"));
        assert!(flags.sunny);
    }
}
