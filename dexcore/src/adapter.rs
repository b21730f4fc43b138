// SPDX-License-Identifier: GPL-3.0-only

//! Flattens the nested [`raw`](crate::raw) payloads into the records the views consume.
//!
//! Required columns (`id`, `weight`, `height`) fail the conversion when absent, every other
//! field is substituted with its default here and nowhere else.

use tracing::warn;

use crate::{
    entities::{PokemonDetail, PokemonStat, PokemonSummary},
    error::DexError,
    raw::{RawLocalizedName, RawPokemon, RawSprites, RawStatRelation, RawTypeRelation},
};

/// Name shown when the species has no localized name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Builds the detail record out of a single `pokemon` row
pub fn adapt(raw: RawPokemon) -> Result<PokemonDetail, DexError> {
    let id = raw.id.ok_or(DexError::MissingField("id"))?;
    let weight = raw.weight.ok_or(DexError::MissingField("weight"))?;
    let height = raw.height.ok_or(DexError::MissingField("height"))?;

    let name = species_name(&raw)
        .unwrap_or(UNKNOWN_NAME)
        .to_string();
    let capture_rate = raw
        .pokemonspecy
        .as_ref()
        .and_then(|species| species.capture_rate)
        .unwrap_or(0);

    Ok(PokemonDetail {
        id,
        name,
        types: adapt_types(id, raw.pokemontypes.as_deref()),
        sprite: first_sprite(raw.pokemonsprites.as_deref()),
        weight,
        height,
        capture_rate,
        stats: adapt_stats(id, raw.pokemonstats.as_deref()),
    })
}

/// Builds a list card out of a `pokemon` row, only the id is required
pub fn adapt_summary(raw: RawPokemon) -> Result<PokemonSummary, DexError> {
    let id = raw.id.ok_or(DexError::MissingField("id"))?;

    let name = species_name(&raw)
        .or(raw.name.as_deref())
        .map(String::from);

    Ok(PokemonSummary {
        id: id.to_string(),
        name,
        types: adapt_types(id, raw.pokemontypes.as_deref()),
        sprite: first_sprite(raw.pokemonsprites.as_deref()),
    })
}

fn species_name(raw: &RawPokemon) -> Option<&str> {
    let species = raw.pokemonspecy.as_ref()?;
    RawLocalizedName::first(species.pokemonspeciesnames.as_deref())
}

fn first_sprite(sprites: Option<&[RawSprites]>) -> String {
    sprites
        .and_then(|sprites| sprites.first())
        .and_then(|sprite| sprite.sprites.clone())
        .unwrap_or_default()
}

fn adapt_types(id: i64, relations: Option<&[RawTypeRelation]>) -> Vec<String> {
    let Some(relations) = relations else {
        return Vec::new();
    };

    relations
        .iter()
        .filter_map(|relation| {
            let type_ = relation.type_.as_ref();
            let localized = type_.and_then(|t| RawLocalizedName::first(t.typenames.as_deref()));
            if localized.is_none() {
                warn!(
                    pokemon = id,
                    type_key = type_.and_then(|t| t.name.as_deref()).unwrap_or_default(),
                    "dropping type without a localized name"
                );
            }
            localized.map(String::from)
        })
        .collect()
}

fn adapt_stats(id: i64, relations: Option<&[RawStatRelation]>) -> Vec<PokemonStat> {
    let Some(relations) = relations else {
        return Vec::new();
    };

    relations
        .iter()
        .filter_map(|relation| {
            let key = relation.stat.as_ref().and_then(|stat| stat.name.as_deref());
            match (key, relation.base_stat) {
                (Some(name), Some(value)) => Some(PokemonStat {
                    name: name.to_string(),
                    value,
                }),
                _ => {
                    warn!(
                        pokemon = id,
                        stat_key = key.unwrap_or_default(),
                        "dropping incomplete stat entry"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::PokemonQueryData;

    fn pikachu() -> RawPokemon {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "weight": 60,
            "height": 4,
            "pokemonspecy": {
                "capture_rate": 190,
                "pokemonspeciesnames": [{ "name": "Pikachu" }]
            },
            "pokemontypes": [
                { "type": { "name": "electric", "typenames": [{ "name": "Electric" }] } }
            ],
            "pokemonsprites": [{ "sprites": "https://example.com/pikachu.png" }],
            "pokemonstats": [
                { "base_stat": 35, "stat": { "name": "hp" } },
                { "base_stat": 55, "stat": { "name": "attack" } },
                { "base_stat": 40, "stat": { "name": "defense" } },
                { "base_stat": 90, "stat": { "name": "speed" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn adapts_a_fully_populated_row() {
        let detail = adapt(pikachu()).unwrap();

        assert_eq!(detail.id, 25);
        assert_eq!(detail.weight, 60);
        assert_eq!(detail.height, 4);
        assert_eq!(detail.name, "Pikachu");
        assert_eq!(detail.types, vec!["Electric".to_string()]);
        assert_eq!(detail.sprite, "https://example.com/pikachu.png");
        assert_eq!(detail.capture_rate, 190);
        assert_eq!(
            detail.stats,
            vec![
                PokemonStat { name: "hp".into(), value: 35 },
                PokemonStat { name: "attack".into(), value: 55 },
                PokemonStat { name: "defense".into(), value: 40 },
                PokemonStat { name: "speed".into(), value: 90 },
            ]
        );
        assert_eq!(detail.total_stats(), 220);
    }

    #[test]
    fn defaults_every_optional_field() {
        let raw = RawPokemon {
            id: Some(132),
            weight: Some(40),
            height: Some(3),
            ..Default::default()
        };

        let detail = adapt(raw).unwrap();
        assert_eq!(detail.id, 132);
        assert_eq!(detail.weight, 40);
        assert_eq!(detail.height, 3);
        assert_eq!(detail.name, UNKNOWN_NAME);
        assert!(detail.types.is_empty());
        assert_eq!(detail.sprite, "");
        assert_eq!(detail.capture_rate, 0);
        assert!(detail.stats.is_empty());
    }

    #[test]
    fn empty_relations_behave_like_absent_ones() {
        let raw: RawPokemon = serde_json::from_value(serde_json::json!({
            "id": 1, "weight": 69, "height": 7,
            "pokemonspecy": { "pokemonspeciesnames": [] },
            "pokemonsprites": [{ "sprites": null }]
        }))
        .unwrap();

        let detail = adapt(raw).unwrap();
        assert_eq!(detail.name, UNKNOWN_NAME);
        assert_eq!(detail.sprite, "");
        assert_eq!(detail.capture_rate, 0);
    }

    #[test]
    fn missing_required_fields_fail() {
        let mut raw = pikachu();
        raw.weight = None;
        assert!(matches!(adapt(raw), Err(DexError::MissingField("weight"))));

        let mut raw = pikachu();
        raw.id = None;
        assert!(matches!(adapt(raw), Err(DexError::MissingField("id"))));

        let mut raw = pikachu();
        raw.height = None;
        assert!(matches!(adapt(raw), Err(DexError::MissingField("height"))));
    }

    #[test]
    fn drops_types_without_a_localized_name() {
        let raw: RawPokemon = serde_json::from_value(serde_json::json!({
            "id": 6, "weight": 905, "height": 17,
            "pokemontypes": [
                { "type": { "name": "fire", "typenames": [{ "name": "Fire" }] } },
                { "type": { "name": "flying", "typenames": [] } },
                { "type": null }
            ]
        }))
        .unwrap();

        assert_eq!(adapt(raw).unwrap().types, vec!["Fire".to_string()]);
    }

    #[test]
    fn drops_incomplete_stats_and_keeps_order() {
        let raw: RawPokemon = serde_json::from_value(serde_json::json!({
            "id": 6, "weight": 905, "height": 17,
            "pokemonstats": [
                { "base_stat": 100, "stat": { "name": "speed" } },
                { "base_stat": 78 },
                { "stat": { "name": "attack" } },
                { "base_stat": 78, "stat": { "name": "hp" } }
            ]
        }))
        .unwrap();

        let names: Vec<_> = adapt(raw)
            .unwrap()
            .stats
            .into_iter()
            .map(|stat| stat.name)
            .collect();
        assert_eq!(names, vec!["speed", "hp"]);
    }

    #[test]
    fn summary_falls_back_to_the_raw_name() {
        let data: PokemonQueryData = serde_json::from_value(serde_json::json!({
            "pokemon": [
                {
                    "id": 1,
                    "name": "bulbasaur",
                    "pokemonspecy": { "pokemonspeciesnames": [{ "name": "Bulbasaur" }] },
                    "pokemontypes": [
                        { "type": { "typenames": [{ "name": "Grass" }] } },
                        { "type": { "typenames": [{ "name": "Poison" }] } }
                    ]
                },
                { "id": 4, "name": "charmander" },
                { "id": 7 }
            ]
        }))
        .unwrap();

        let summaries: Vec<_> = data
            .pokemon
            .unwrap()
            .into_iter()
            .map(|raw| adapt_summary(raw).unwrap())
            .collect();

        assert_eq!(summaries[0].id, "1");
        assert_eq!(summaries[0].name.as_deref(), Some("Bulbasaur"));
        assert_eq!(summaries[0].types, vec!["Grass", "Poison"]);
        assert_eq!(summaries[1].name.as_deref(), Some("charmander"));
        assert_eq!(summaries[2].name, None);
        assert_eq!(summaries[2].sprite, "");
    }

    #[test]
    fn summary_requires_an_id() {
        let raw = RawPokemon {
            name: Some("missingno".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            adapt_summary(raw),
            Err(DexError::MissingField("id"))
        ));
    }
}
