// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    Element, cosmic_theme,
    iced::{Alignment, Length},
    theme, widget,
};
use dexcore::{
    display::{
        StatTier, format_height, format_number, format_weight, stat_label, stat_percent,
        type_color,
    },
    entities::{PokemonDetail, PokemonStat},
    view_model::DetailStatus,
};

use crate::{
    app::{Message, sprite_cache::SpriteCache, style},
    fl,
};

const SPRITE_SIZE: f32 = 200.0;
const STAT_BAR_HEIGHT: f32 = 8.0;

/// Content of the details context drawer
pub fn pokemon_details<'a>(
    status: DetailStatus<'a>,
    requested: Option<i64>,
    sprites: &'a SpriteCache,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match status {
        DetailStatus::Skipped => widget::text::body(fl!("no-selection")).into(),
        DetailStatus::Loading => widget::text::body(fl!("loading-details")).into(),
        DetailStatus::Failed(message) => widget::column()
            .push(widget::text::title4(fl!("failed-to-load-details")))
            .push(widget::text::body(message))
            .align_x(Alignment::Center)
            .spacing(spacing.space_xxs)
            .into(),
        DetailStatus::Missing => {
            let id = requested.map(|id| id.to_string()).unwrap_or_default();
            widget::text::body(fl!("pokemon-not-found", id = id)).into()
        }
        DetailStatus::Ready(pokemon) => ready(pokemon, sprites, spacing),
    };

    widget::container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn ready<'a>(
    pokemon: &'a PokemonDetail,
    sprites: &'a SpriteCache,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let sprite: Element<'a, Message> = match sprites.get(&pokemon.sprite) {
        Some(handle) => widget::Image::new(handle.clone())
            .content_fit(cosmic::iced::ContentFit::Contain)
            .width(Length::Fixed(SPRITE_SIZE))
            .height(Length::Fixed(SPRITE_SIZE))
            .into(),
        None => widget::container(widget::column())
            .width(Length::Fixed(SPRITE_SIZE))
            .height(Length::Fixed(SPRITE_SIZE))
            .into(),
    };

    let header = widget::column()
        .push(widget::text::caption(format_number(pokemon.id)))
        .push(widget::text::title2(pokemon.name.as_str()))
        .align_x(Alignment::Center);

    let mut types = widget::row().spacing(spacing.space_xxs);
    for pokemon_type in &pokemon.types {
        types = types.push(
            widget::container(widget::text::body(pokemon_type.as_str()))
                .padding([spacing.space_xxxs, spacing.space_s])
                .class(theme::Container::custom(style::filled(
                    style::color(type_color(pokemon_type)),
                    20.0,
                ))),
        );
    }

    let info = widget::row()
        .push(info_item(fl!("height"), format_height(pokemon.height)))
        .push(info_item(fl!("weight"), format_weight(pokemon.weight)))
        .push(info_item(fl!("capture-rate"), pokemon.capture_rate.to_string()))
        .spacing(spacing.space_m);

    let mut stats = widget::column()
        .push(widget::text::heading(fl!("base-stats")))
        .spacing(spacing.space_xxs)
        .width(Length::Fill);
    for stat in &pokemon.stats {
        stats = stats.push(stat_row(stat, spacing));
    }
    if !pokemon.stats.is_empty() {
        stats = stats.push(
            widget::row()
                .push(widget::text::body(fl!("total")).width(Length::Fixed(80.0)))
                .push(widget::text::heading(pokemon.total_stats().to_string())),
        );
    }

    widget::column()
        .push(sprite)
        .push(header)
        .push(types)
        .push(info)
        .push(stats)
        .align_x(Alignment::Center)
        .spacing(spacing.space_s)
        .width(Length::Fill)
        .into()
}

fn info_item<'a>(label: String, value: String) -> Element<'a, Message> {
    widget::column()
        .push(widget::text::caption(label))
        .push(widget::text::title4(value))
        .align_x(Alignment::Center)
        .into()
}

fn stat_row<'a>(stat: &'a PokemonStat, spacing: &cosmic_theme::Spacing) -> Element<'a, Message> {
    widget::row()
        .push(widget::text::body(stat_label(&stat.name)).width(Length::Fixed(80.0)))
        .push(widget::text::heading(stat.value.to_string()).width(Length::Fixed(40.0)))
        .push(stat_bar(stat.value))
        .align_y(Alignment::Center)
        .spacing(spacing.space_xs)
        .into()
}

/// Horizontal bar filled proportionally to the 0–255 stat scale
fn stat_bar<'a>(value: i64) -> Element<'a, Message> {
    let filled = (stat_percent(value).round() as u16).clamp(1, 100);
    let fill = style::color(StatTier::from_value(value).color());

    let mut bar = widget::row().push(
        widget::container(widget::column())
            .width(Length::FillPortion(filled))
            .height(Length::Fixed(STAT_BAR_HEIGHT))
            .class(theme::Container::custom(style::filled(fill, 4.0))),
    );
    if filled < 100 {
        bar = bar.push(
            widget::container(widget::column())
                .width(Length::FillPortion(100 - filled))
                .height(Length::Fixed(STAT_BAR_HEIGHT)),
        );
    }

    widget::container(bar)
        .width(Length::Fill)
        .class(theme::Container::custom(style::track(4.0)))
        .into()
}
