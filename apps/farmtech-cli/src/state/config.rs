//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--no-clear`, `--no-pause`)
//! 2. Environment variables (`FARMTECH_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::Serialize;
use tracing::warn;

use farmtech_core::{calc, QuantityUnit};

/// Largest accepted `FARMTECH_DECIMALS`.
pub const MAX_DECIMALS: u8 = 6;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Clear the terminal before each screen.
    pub clear_screen: bool,

    /// Wait for ENTER after each action.
    pub pause_after_action: bool,

    /// Decimal places for areas and quantities.
    pub decimals: u8,

    /// Answer that confirms a delete (case-insensitive).
    pub confirm_token: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Screen clearing and pauses: on
    /// - Two decimals
    /// - Confirm token: "Y"
    fn default() -> Self {
        ConfigState {
            clear_screen: true,
            pause_after_action: true,
            decimals: 2,
            confirm_token: "Y".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FARMTECH_CLEAR_SCREEN`: `true`/`false`
    /// - `FARMTECH_PAUSE`: `true`/`false`
    /// - `FARMTECH_DECIMALS`: 0 to 6
    /// - `FARMTECH_CONFIRM_TOKEN`: e.g. `S`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("FARMTECH_CLEAR_SCREEN") {
            match parse_bool(&raw) {
                Some(value) => config.clear_screen = value,
                None => warn!(value = %raw, "Ignoring invalid FARMTECH_CLEAR_SCREEN"),
            }
        }

        if let Some(raw) = lookup("FARMTECH_PAUSE") {
            match parse_bool(&raw) {
                Some(value) => config.pause_after_action = value,
                None => warn!(value = %raw, "Ignoring invalid FARMTECH_PAUSE"),
            }
        }

        if let Some(raw) = lookup("FARMTECH_DECIMALS") {
            match raw.trim().parse::<u8>() {
                Ok(value) if value <= MAX_DECIMALS => config.decimals = value,
                _ => warn!(value = %raw, max = MAX_DECIMALS, "Ignoring invalid FARMTECH_DECIMALS"),
            }
        }

        if let Some(raw) = lookup("FARMTECH_CONFIRM_TOKEN") {
            let token = raw.trim();
            if token.is_empty() {
                warn!("Ignoring empty FARMTECH_CONFIRM_TOKEN");
            } else {
                config.confirm_token = token.to_string();
            }
        }

        config
    }

    /// Whether an operator answer confirms a delete.
    pub fn is_confirmation(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(&self.confirm_token)
    }

    /// Formats a number with thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use farmtech_cli::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_number(12853.981), "12,853.98");
    /// ```
    pub fn format_number(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.decimals as usize, value.abs());
        let (whole, frac) = match formatted.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
        format!(
            "{}{}{}",
            if negative { "-" } else { "" },
            grouped,
            frac.map(|f| format!(".{f}")).unwrap_or_default()
        )
    }

    /// Formats an area as `"5,000.00 m²"`.
    pub fn format_area(&self, area_m2: f64) -> String {
        format!("{} m²", self.format_number(area_m2))
    }

    /// Formats an area in hectares as `"0.50 ha"`.
    pub fn format_hectares(&self, area_m2: f64) -> String {
        format!("{} ha", self.format_number(calc::m2_to_hectares(area_m2)))
    }

    /// Formats a quantity with its unit, e.g. `"2.00 liters"`.
    pub fn format_quantity(&self, quantity: f64, unit: QuantityUnit) -> String {
        format!("{} {}", self.format_number(quantity), unit.label())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_number() {
        let config = ConfigState::default();
        assert_eq!(config.format_number(0.0), "0.00");
        assert_eq!(config.format_number(2.0), "2.00");
        assert_eq!(config.format_number(999.999), "1,000.00");
        assert_eq!(config.format_number(7853.981633), "7,853.98");
        assert_eq!(config.format_number(1234567.891), "1,234,567.89");
        assert_eq!(config.format_number(-1234.5), "-1,234.50");
        assert_eq!(config.format_number(-0.001), "0.00");
    }

    #[test]
    fn test_format_number_without_decimals() {
        let config = ConfigState {
            decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_number(12853.98), "12,854");
    }

    #[test]
    fn test_format_units() {
        let config = ConfigState::default();
        assert_eq!(config.format_area(5000.0), "5,000.00 m²");
        assert_eq!(config.format_hectares(5000.0), "0.50 ha");
        assert_eq!(
            config.format_quantity(235.619, QuantityUnit::Kilograms),
            "235.62 kg"
        );
        assert_eq!(
            config.format_quantity(2.0, QuantityUnit::Liters),
            "2.00 liters"
        );
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("FARMTECH_CLEAR_SCREEN", "false"),
            ("FARMTECH_PAUSE", "0"),
            ("FARMTECH_DECIMALS", "3"),
            ("FARMTECH_CONFIRM_TOKEN", "S"),
        ]));

        assert!(!config.clear_screen);
        assert!(!config.pause_after_action);
        assert_eq!(config.decimals, 3);
        assert!(config.is_confirmation("s"));
        assert!(!config.is_confirmation("y"));
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("FARMTECH_CLEAR_SCREEN", "maybe"),
            ("FARMTECH_DECIMALS", "12"),
            ("FARMTECH_CONFIRM_TOKEN", "   "),
        ]));

        assert_eq!(config, ConfigState::default());
    }
}
