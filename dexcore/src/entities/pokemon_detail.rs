// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use super::PokemonStat;

/// Everything the detail drawer shows about a single Pokémon
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    pub types: Vec<String>,
    pub sprite: String,
    /// Tenths of a kilogram
    pub weight: i64,
    /// Tenths of a meter
    pub height: i64,
    pub capture_rate: i64,
    pub stats: Vec<PokemonStat>,
}

impl Debug for PokemonDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonDetail")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PokemonDetail {
    /// Returns the total value of all the stats of the Pokémon
    pub fn total_stats(&self) -> i64 {
        self.stats.iter().map(|stat| stat.value).sum()
    }
}
