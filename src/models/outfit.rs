//! Outfit recommendation model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of tips attached to a recommendation
pub const MAX_TIPS: usize = 3;

/// Structured clothing advice for the current conditions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub top_layer: String,
    pub bottom_layer: String,
    /// Accessories in the order the rules added them
    pub accessories: Vec<String>,
    /// At most [`MAX_TIPS`] tips, never empty
    pub tips: Vec<WeatherTip>,
}

/// A single human-readable tip with the kind of icon a client should show
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherTip {
    pub icon: TipIcon,
    pub text: String,
}

impl WeatherTip {
    pub fn new<S: Into<String>>(icon: TipIcon, text: S) -> Self {
        Self {
            icon,
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TipIcon {
    ThermometerCold,
    ThermometerCool,
    ThermometerHot,
    Umbrella,
    Snow,
    Wind,
    Sun,
    Droplets,
    UvHigh,
    UvModerate,
    Shirt,
}

impl fmt::Display for TipIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            TipIcon::ThermometerCold | TipIcon::ThermometerCool => "🥶",
            TipIcon::ThermometerHot => "🥵",
            TipIcon::Umbrella => "☔",
            TipIcon::Snow => "❄️",
            TipIcon::Wind => "💨",
            TipIcon::Sun | TipIcon::UvModerate => "☀️",
            TipIcon::UvHigh => "🔆",
            TipIcon::Droplets => "💧",
            TipIcon::Shirt => "👕",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for OutfitRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top:    {}", self.top_layer)?;
        writeln!(f, "Bottom: {}", self.bottom_layer)?;
        if !self.accessories.is_empty() {
            writeln!(f, "Accessories:")?;
            for accessory in &self.accessories {
                writeln!(f, "   - {accessory}")?;
            }
        }
        writeln!(f, "Tips:")?;
        for tip in &self.tips {
            writeln!(f, "   {} {}", tip.icon, tip.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_icon_wire_name() {
        let tip = WeatherTip::new(TipIcon::ThermometerCold, "Brr");
        let json = serde_json::to_value(&tip).unwrap();
        assert_eq!(json["icon"], "thermometer-cold");
        assert_eq!(json["text"], "Brr");
    }
}
