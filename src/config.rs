// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::app::APP_ID;

/// Choices offered for [`Config::pokemon_per_row`]
pub const POKEMON_PER_ROW_OPTIONS: &[usize] = &[2, 3, 4, 5, 6];

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub app_theme: AppTheme,
    pub pokemon_per_row: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: Default::default(),
            pokemon_per_row: 4,
        }
    }
}

impl Config {
    pub fn config_handler() -> Option<cosmic_config::Config> {
        cosmic_config::Config::new(APP_ID, Self::VERSION)
            .inspect_err(|e| warn!("failed to open the config: {e}"))
            .ok()
    }

    /// Reads the stored config, keeping the defaults for the entries that fail to load
    pub fn config(handler: Option<&cosmic_config::Config>) -> Config {
        let Some(handler) = handler else {
            return Config::default();
        };

        match Config::get_entry(handler) {
            Ok(config) => config,
            Err((errors, config)) => {
                for error in errors {
                    warn!("error loading config entry: {error}");
                }
                config
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    /// Order in which the themes are listed in the settings
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }
}
