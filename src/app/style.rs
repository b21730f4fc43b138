// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{Background, Border, Color, widget::container};
use dexcore::display::{HexColor, NEUTRAL_GRAY};

/// Renderer color of a color from the display tables
pub fn color(hex: HexColor) -> Color {
    hex.to_rgb8()
        .or_else(|| NEUTRAL_GRAY.to_rgb8())
        .map(|(r, g, b)| Color::from_rgb8(r, g, b))
        .unwrap_or(Color::from_rgb8(0x88, 0x88, 0x88))
}

/// Container style with a solid background and rounded corners
pub fn filled(fill: Color, radius: f32) -> impl Fn(&cosmic::Theme) -> container::Style + 'static {
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Background of the stat bars
pub fn track(radius: f32) -> impl Fn(&cosmic::Theme) -> container::Style + 'static {
    filled(Color::from_rgba(0.5, 0.5, 0.5, 0.25), radius)
}
