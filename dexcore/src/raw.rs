// SPDX-License-Identifier: GPL-3.0-only

//! Partial shapes of the PokéAPI GraphQL payloads.
//!
//! Every field the upstream may omit or null out is an `Option`, nothing gets a default here.
//! Turning these into view records is the job of [`crate::adapter`].

use serde::Deserialize;

/// `data` of both the list and the details query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonQueryData {
    pub pokemon: Option<Vec<RawPokemon>>,
}

/// One row of the `pokemon` table with the relations we ask for
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPokemon {
    pub id: Option<i64>,
    /// Raw api key, such as `mr-mime`
    pub name: Option<String>,
    pub weight: Option<i64>,
    pub height: Option<i64>,
    pub pokemonspecy: Option<RawSpecies>,
    pub pokemontypes: Option<Vec<RawTypeRelation>>,
    pub pokemonsprites: Option<Vec<RawSprites>>,
    pub pokemonstats: Option<Vec<RawStatRelation>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecies {
    pub capture_rate: Option<i64>,
    pub pokemonspeciesnames: Option<Vec<RawLocalizedName>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocalizedName {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTypeRelation {
    #[serde(rename = "type")]
    pub type_: Option<RawType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawType {
    pub name: Option<String>,
    pub typenames: Option<Vec<RawLocalizedName>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    /// The json path selected in the query resolves to a single url
    pub sprites: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatRelation {
    pub base_stat: Option<i64>,
    pub stat: Option<RawStat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStat {
    pub name: Option<String>,
}

impl RawLocalizedName {
    /// First present name of a localized names relation
    pub(crate) fn first(names: Option<&[RawLocalizedName]>) -> Option<&str> {
        names?.first()?.name.as_deref()
    }
}
