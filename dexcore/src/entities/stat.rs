// SPDX-License-Identifier: GPL-3.0-only

/// A single base stat as returned by the API, `value` is on a 0–255 scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonStat {
    pub name: String,
    pub value: i64,
}

/// Stats known to the UI, anything else is shown with its raw key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "special-attack" => Some(Self::SpecialAttack),
            "special-defense" => Some(Self::SpecialDefense),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }

    /// Short label used in the stats table
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
        }
    }
}
