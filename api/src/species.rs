//! The `/pokemon-species/{id}` and `/evolution-chain/{id}` resources

use serde::Deserialize;

use crate::pokemon::NamedRef;

/// A bare `{ url }` reference (the species response does not name the chain)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceUrl {
    pub url: String,
}

/// The slice of `/pokemon-species/{id}` the client needs: where the
/// evolution chain lives
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    #[serde(default)]
    pub evolution_chain: Option<ResourceUrl>,
}

/// Top-level `/evolution-chain/{id}` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node of the evolution tree; `evolves_to` recurses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    pub species: NamedRef,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

/// How a species evolves into the node carrying this record
///
/// The API fills every unused condition with null (or `""` for
/// `time_of_day`), so everything here is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub trigger: Option<NamedRef>,
    #[serde(default)]
    pub item: Option<NamedRef>,
    #[serde(default)]
    pub held_item: Option<NamedRef>,
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub time_of_day: String,
}
