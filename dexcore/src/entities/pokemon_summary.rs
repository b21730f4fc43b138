// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use crate::adapter::UNKNOWN_NAME;

/// Lightweight owned record for a single card of the list page
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    /// Numeric identifier, kept as text the way the list query hands it out
    pub id: String,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub sprite: String,
}

impl Debug for PokemonSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonSummary")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PokemonSummary {
    /// Name to render on the card, [`UNKNOWN_NAME`] when the upstream row had none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Types joined for the card subtitle
    pub fn types_label(&self) -> String {
        self.types.join(", ")
    }
}
