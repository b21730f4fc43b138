// SPDX-License-Identifier: GPL-3.0-only

//! GraphQL documents sent to PokéAPI

/// A named GraphQL document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const GET_POKEMONS: Operation = Operation {
    name: "GetPokemons",
    document: r#"query GetPokemons($limit: Int!, $language: String!) {
  pokemon(limit: $limit, order_by: { id: asc }) {
    id
    name
    pokemonspecy {
      pokemonspeciesnames(where: { language: { name: { _eq: $language } } }) {
        name
      }
    }
    pokemontypes {
      type {
        name
        typenames(where: { language: { name: { _eq: $language } } }) {
          name
        }
      }
    }
    pokemonsprites {
      sprites(path: "other.official-artwork.front_default")
    }
  }
}"#,
};

pub const GET_POKEMON_DETAILS: Operation = Operation {
    name: "GetPokemonDetails",
    document: r#"query GetPokemonDetails($id: Int!, $language: String!) {
  pokemon(where: { id: { _eq: $id } }) {
    id
    name
    height
    weight
    pokemonspecy {
      capture_rate
      pokemonspeciesnames(where: { language: { name: { _eq: $language } } }) {
        name
      }
    }
    pokemontypes {
      type {
        name
        typenames(where: { language: { name: { _eq: $language } } }) {
          name
        }
      }
    }
    pokemonsprites {
      sprites(path: "other.official-artwork.front_default")
    }
    pokemonstats {
      base_stat
      stat {
        name
      }
    }
  }
}"#,
};
