// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{app::context_drawer, theme};

use crate::{
    app::{AppModel, Message, details},
    fl,
};

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    /// About [`ContextPage`] of the application
    About,
    /// Settings [`ContextPage`] of the application
    Settings,
    /// Pokémon Details [`ContextPage`], shown while a detail route is open
    PokemonDetails,
}

impl ContextPage {
    /// Display the [`ContextPage`]
    pub fn display<'a>(
        &self,
        app_model: &'a AppModel,
    ) -> Option<context_drawer::ContextDrawer<'a, Message>> {
        let spacing = theme::active().cosmic().spacing;

        Some(match &self {
            ContextPage::About => context_drawer::about(
                &app_model.about,
                |s| Message::LaunchUrl(s.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            )
            .title(fl!("about")),
            ContextPage::Settings => context_drawer::context_drawer(
                app_model.settings(),
                Message::ToggleContextPage(ContextPage::Settings),
            )
            .title(fl!("settings")),
            ContextPage::PokemonDetails => context_drawer::context_drawer(
                details::pokemon_details(
                    app_model.detail.status(),
                    app_model.detail.requested(),
                    &app_model.sprites,
                    &spacing,
                ),
                Message::CloseDetails,
            )
            .title(fl!("pokemon-page")),
        })
    }
}
