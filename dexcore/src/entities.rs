// SPDX-License-Identifier: GPL-3.0-only

mod pokemon_detail;
mod pokemon_summary;
mod pokemon_type;
mod stat;

pub use pokemon_detail::PokemonDetail;
pub use pokemon_summary::PokemonSummary;
pub use pokemon_type::PokemonType;
pub use stat::{PokemonStat, StatKind};
