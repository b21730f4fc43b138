// SPDX-License-Identifier: GPL-3.0-only

use std::{
    collections::HashSet,
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use dashmap::DashMap;
use futures::StreamExt;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{debug, warn};

use crate::{
    adapter::{adapt, adapt_summary},
    config::ClientConfig,
    entities::{PokemonDetail, PokemonSummary},
    error::DexError,
    queries::{GET_POKEMON_DETAILS, GET_POKEMONS, Operation},
    raw::PokemonQueryData,
};

/// How many sprites are downloaded at the same time
const SPRITE_CONCURRENCY: usize = 20;

/// Whether a query may be answered from the in-memory cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    #[default]
    CacheFirst,
    NetworkOnly,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// GraphQL client for PokéAPI with an in-memory response cache.
///
/// Cloning is cheap, clones share the connection pool and the cache.
#[derive(Clone)]
pub struct DexClient {
    config: ClientConfig,
    http: reqwest::Client,
    cache: Arc<DashMap<String, serde_json::Value>>,
    /// Bumped by [`DexClient::clear_cache`], responses requested before a clear are not cached
    generation: Arc<AtomicU64>,
}

impl Debug for DexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DexClient")
            .field("endpoint", &self.config.endpoint)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl DexClient {
    pub fn new(config: ClientConfig) -> Result<Self, DexError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("graphdex/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            config,
            http,
            cache: Arc::new(DashMap::new()),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Forgets every cached response, the next queries go to the network
    pub fn clear_cache(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.clear();
    }

    pub fn cached_responses(&self) -> usize {
        self.cache.len()
    }

    /// Runs `operation` and deserializes its `data`
    pub async fn execute<V, R>(
        &self,
        operation: &Operation,
        variables: &V,
        policy: FetchPolicy,
    ) -> Result<R, DexError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let key = format!("{}:{}", operation.name, serde_json::to_string(variables)?);

        if policy == FetchPolicy::CacheFirst {
            if let Some(data) = self.cache.get(&key) {
                debug!(operation = operation.name, "answering from cache");
                return Ok(serde_json::from_value(data.value().clone())?);
            }
        }

        let generation = self.generation.load(Ordering::SeqCst);
        debug!(
            operation = operation.name,
            endpoint = %self.config.endpoint,
            "sending query"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&GraphQlRequest {
                query: operation.document,
                operation_name: operation.name,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(operation = operation.name, %status, "query failed");
            return Err(DexError::Status { status });
        }

        let body: GraphQlResponse = response.json().await?;
        if !body.errors.is_empty() {
            let message = body
                .errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(operation = operation.name, %message, "query returned errors");
            return Err(DexError::GraphQl(message));
        }

        let data = body.data.ok_or(DexError::EmptyResponse)?;
        if self.generation.load(Ordering::SeqCst) == generation {
            self.cache.insert(key, data.clone());
        } else {
            debug!(operation = operation.name, "cache cleared while in flight, not caching");
        }

        Ok(serde_json::from_value(data)?)
    }

    /// Summaries for the list page, ordered by id
    pub async fn pokemon_list(&self) -> Result<Vec<PokemonSummary>, DexError> {
        let variables = json!({
            "limit": self.config.list_limit,
            "language": self.config.language,
        });
        let data: PokemonQueryData = self
            .execute(&GET_POKEMONS, &variables, FetchPolicy::CacheFirst)
            .await?;

        let summaries = data
            .pokemon
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match adapt_summary(raw) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!("skipping list entry: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!(count = summaries.len(), "loaded pokémon list");
        Ok(summaries)
    }

    /// Details of a single Pokémon, `None` when no Pokémon has that id
    pub async fn pokemon_details(&self, id: i64) -> Result<Option<PokemonDetail>, DexError> {
        let variables = json!({
            "id": id,
            "language": self.config.language,
        });
        let data: PokemonQueryData = self
            .execute(&GET_POKEMON_DETAILS, &variables, FetchPolicy::CacheFirst)
            .await?;

        data.pokemon
            .and_then(|rows| rows.into_iter().next())
            .map(adapt)
            .transpose()
    }

    /// Downloads the given sprites, skipping blank urls and the ones that fail
    pub async fn fetch_sprites(&self, urls: Vec<String>) -> Vec<(String, Vec<u8>)> {
        let unique: HashSet<String> = urls
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .collect();

        futures::stream::iter(unique)
            .map(|url| {
                let http = self.http.clone();
                async move {
                    let result = Self::download_sprite(&http, &url).await;
                    (url, result)
                }
            })
            .buffer_unordered(SPRITE_CONCURRENCY)
            .filter_map(|(url, result)| async move {
                match result {
                    Ok(bytes) => Some((url, bytes)),
                    Err(e) => {
                        warn!(%url, "error downloading sprite: {e}");
                        None
                    }
                }
            })
            .collect()
            .await
    }

    async fn download_sprite(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, DexError> {
        let response = http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DexError::Status { status });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
