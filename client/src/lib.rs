pub mod ability;
mod cache;
mod error;
pub mod evolution;
pub mod matchup;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use cache::TypeCache;

pub use ability::{AbilityDetail, FALLBACK_EFFECT};
pub use error::FetchError;
pub use evolution::{EvolutionStage, EvolutionStagePokemon};

pub use rotom_api::{
    Ability, DamageRelations, Pokemon, PokemonSpecies, PokemonTypeSlot, TypeData, TypeName,
};

/// Public PokeAPI base URL
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Async PokeAPI client
///
/// Owns the HTTP connection pool and a process-wide cache of type
/// damage-relations. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    types: TypeCache,
}

impl Client {
    /// Client against the public PokeAPI
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// Client against a custom deployment (or a test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            types: TypeCache::new(),
        }
    }

    /// Look up a pokemon by name or numeric id
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon, FetchError> {
        self.get(&format!("pokemon/{}", name_or_id.to_lowercase()))
            .await
    }

    /// Fetch a type's damage relations, memoized by lowercase type name.
    ///
    /// Repeat lookups return the same shared record regardless of the
    /// caller's casing.
    pub async fn fetch_type(&self, name: &str) -> Result<Arc<TypeData>, FetchError> {
        if let Some(cached) = self.types.get(name) {
            return Ok(cached);
        }

        let data: TypeData = self.get(&format!("type/{}", name.to_lowercase())).await?;
        Ok(self.types.insert(name, data))
    }

    /// Warm the type cache with the full 18-type universe
    pub async fn preload_types(&self) -> Result<(), FetchError> {
        for ty in TypeName::all() {
            self.fetch_type(ty.as_str()).await?;
        }
        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get_url(&format!("{}/{}", self.base_url, path)).await
    }

    /// GET a resource by absolute URL; some resources are only reachable
    /// through URLs embedded in other responses
    pub(crate) async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
