// SPDX-License-Identifier: GPL-3.0-only

use crate::entities::PokemonSummary;

/// Keeps, in their original order, the Pokémon whose name contains `query` ignoring case.
///
/// A blank query (empty or only whitespace) keeps every Pokémon. Entries without a name never
/// match a non-blank query.
pub fn filter_by_name(items: &[PokemonSummary], query: &str) -> Vec<PokemonSummary> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let query = query.to_lowercase();
    items
        .iter()
        .filter(|pokemon| {
            pokemon
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}
