// SPDX-License-Identifier: GPL-3.0-only

//! Deterministic derivations the views use to present a [`PokemonDetail`](crate::entities::PokemonDetail).

use crate::{
    entities::{PokemonType, StatKind},
    utils::scale_numbers,
};

/// Upper bound of the scale base stats are drawn on
pub const MAX_STAT_VALUE: i64 = 255;

/// Badge color for types we don't know about
pub const NEUTRAL_GRAY: HexColor = HexColor("#888888");

/// A `#rrggbb` color literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub &'static str);

impl HexColor {
    /// Splits the literal into its red, green and blue channels
    pub fn to_rgb8(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Color band of a stat bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    Low,
    Medium,
    High,
}

impl StatTier {
    pub fn from_value(value: i64) -> Self {
        if value > 100 {
            StatTier::High
        } else if value > 50 {
            StatTier::Medium
        } else {
            StatTier::Low
        }
    }

    pub fn color(&self) -> HexColor {
        match self {
            StatTier::High => HexColor("#52c41a"),
            StatTier::Medium => HexColor("#faad14"),
            StatTier::Low => HexColor("#ff4d4f"),
        }
    }
}

/// Percentage of the bar a stat fills
pub fn stat_percent(value: i64) -> f32 {
    let clamped = value.clamp(0, MAX_STAT_VALUE);
    (clamped as f32 / MAX_STAT_VALUE as f32) * 100.0
}

/// Short label for a stat key, the key itself when it's not a known stat
pub fn stat_label(key: &str) -> String {
    StatKind::from_key(key)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Badge color for a type name, [`NEUTRAL_GRAY`] for unknown types
pub fn type_color(name: &str) -> HexColor {
    PokemonType::from_name(name)
        .map(|pokemon_type| pokemon_type.color())
        .unwrap_or(NEUTRAL_GRAY)
}

pub fn format_height(height: i64) -> String {
    format!("{:.1} m", scale_numbers(height))
}

pub fn format_weight(weight: i64) -> String {
    format!("{:.1} kg", scale_numbers(weight))
}

pub fn format_number(id: impl std::fmt::Display) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_and_weight_use_one_decimal() {
        assert_eq!(format_height(4), "0.4 m");
        assert_eq!(format_weight(60), "6.0 kg");
        assert_eq!(format_height(17), "1.7 m");
        assert_eq!(format_weight(9050), "905.0 kg");
    }

    #[test]
    fn stat_tiers_use_strict_thresholds() {
        assert_eq!(StatTier::from_value(35), StatTier::Low);
        assert_eq!(StatTier::from_value(50), StatTier::Low);
        assert_eq!(StatTier::from_value(51), StatTier::Medium);
        assert_eq!(StatTier::from_value(90), StatTier::Medium);
        assert_eq!(StatTier::from_value(100), StatTier::Medium);
        assert_eq!(StatTier::from_value(101), StatTier::High);
        assert_eq!(StatTier::from_value(150), StatTier::High);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(StatTier::High.color(), HexColor("#52c41a"));
        assert_eq!(StatTier::Medium.color(), HexColor("#faad14"));
        assert_eq!(StatTier::Low.color(), HexColor("#ff4d4f"));
    }

    #[test]
    fn stat_percent_is_on_a_255_scale() {
        assert_eq!(stat_percent(255), 100.0);
        assert_eq!(stat_percent(0), 0.0);
        assert!((stat_percent(51) - 20.0).abs() < 1e-4);
        assert_eq!(stat_percent(300), 100.0);
    }

    #[test]
    fn stat_labels_fall_back_to_raw_key() {
        assert_eq!(stat_label("hp"), "HP");
        assert_eq!(stat_label("special-defense"), "Sp. Def");
        assert_eq!(stat_label("accuracy"), "accuracy");
    }

    #[test]
    fn type_colors_are_case_insensitive() {
        assert_eq!(type_color("Electric"), HexColor("#F8D030"));
        assert_eq!(type_color("electric"), HexColor("#F8D030"));
        assert_eq!(type_color("shadow"), NEUTRAL_GRAY);
    }

    #[test]
    fn hex_colors_split_into_channels() {
        assert_eq!(HexColor("#52c41a").to_rgb8(), Some((0x52, 0xc4, 0x1a)));
        assert_eq!(NEUTRAL_GRAY.to_rgb8(), Some((0x88, 0x88, 0x88)));
        assert_eq!(HexColor("52c41a").to_rgb8(), None);
        assert_eq!(HexColor("#fff").to_rgb8(), None);
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(25), "#25");
        assert_eq!(format_number("150"), "#150");
    }
}
