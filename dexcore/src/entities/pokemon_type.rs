// SPDX-License-Identifier: GPL-3.0-only

use crate::display::HexColor;

/// Possible Pokémon Types
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match &self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Electric => "Electric",
            PokemonType::Grass => "Grass",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        };
        write!(f, "{name}")
    }
}

impl PokemonType {
    /// List of all Pokémon Types
    pub const ALL: &'static [Self] = &[
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Parses a (localized english) type name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|pokemon_type| pokemon_type.to_string().eq_ignore_ascii_case(name.trim()))
    }

    /// Badge background for this type
    pub fn color(&self) -> HexColor {
        let hex = match &self {
            PokemonType::Normal => "#A8A878",
            PokemonType::Fire => "#F08030",
            PokemonType::Water => "#6890F0",
            PokemonType::Electric => "#F8D030",
            PokemonType::Grass => "#78C850",
            PokemonType::Ice => "#98D8D8",
            PokemonType::Fighting => "#C03028",
            PokemonType::Poison => "#A040A0",
            PokemonType::Ground => "#E0C068",
            PokemonType::Flying => "#A890F0",
            PokemonType::Psychic => "#F85888",
            PokemonType::Bug => "#A8B820",
            PokemonType::Rock => "#B8A038",
            PokemonType::Ghost => "#705898",
            PokemonType::Dragon => "#7038F8",
            PokemonType::Dark => "#705848",
            PokemonType::Steel => "#B8B8D0",
            PokemonType::Fairy => "#EE99AC",
        };

        HexColor(hex)
    }
}
