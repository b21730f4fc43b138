// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

/// Public PokéAPI GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://graphql.pokeapi.co/v1beta2";

/// Settings of the [`DexClient`](crate::client::DexClient)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Language code of the localized names, such as `en`
    pub language: String,
    /// How many Pokémon the list query asks for
    pub list_limit: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: String::from("en"),
            list_limit: 151,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the `GRAPHDEX_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let endpoint = lookup("GRAPHDEX_ENDPOINT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.endpoint);

        let language = lookup("GRAPHDEX_LANGUAGE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.language);

        let list_limit = lookup("GRAPHDEX_LIST_LIMIT")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.list_limit);

        let timeout = lookup("GRAPHDEX_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            language,
            list_limit,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn no_variables_means_defaults() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let vars = HashMap::from([
            ("GRAPHDEX_ENDPOINT", "http://localhost:8080/graphql/"),
            ("GRAPHDEX_LANGUAGE", "es"),
            ("GRAPHDEX_LIST_LIMIT", "251"),
            ("GRAPHDEX_TIMEOUT_SECS", "5"),
        ]);
        let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.endpoint, "http://localhost:8080/graphql");
        assert_eq!(config.language, "es");
        assert_eq!(config.list_limit, 251);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = ClientConfig::from_lookup(|key| match key {
            "GRAPHDEX_LIST_LIMIT" => Some("many".to_string()),
            "GRAPHDEX_ENDPOINT" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.list_limit, 151);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
