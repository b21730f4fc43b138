// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;
use dexcore::{ClientConfig, route::Route};
use tracing::warn;

use crate::config::Config;

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    pub client_config: ClientConfig,
    /// Route to open on startup, taken from the first command line argument
    pub route: Route,
}

pub fn flags() -> Flags {
    let config_handler = Config::config_handler();
    let config = Config::config(config_handler.as_ref());

    let route = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            warn!(%path, "unknown route, opening the list");
            Route::List
        }),
        None => Route::List,
    };

    Flags {
        config_handler,
        config,
        client_config: ClientConfig::from_env(),
        route,
    }
}
