//! Evolution chain resolution
//!
//! Walks the nested species tree into ordered stages. The public entry
//! point never fails: every error path degrades to a single stage holding
//! only the input pokemon.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use rotom_api::{ChainLink, EvolutionChain, EvolutionDetail, Pokemon, PokemonSpecies};

use crate::{Client, FetchError};

/// One pokemon within an evolution stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionStagePokemon {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    /// Human-readable evolution method; `None` for the base stage or when
    /// the API gave no usable detail
    pub method: Option<String>,
}

/// All species at one depth of the evolution tree (base species = stage 1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionStage {
    pub stage: u32,
    pub pokemon: Vec<EvolutionStagePokemon>,
}

impl Client {
    /// Resolve the full evolution line of a pokemon, grouped by stage,
    /// ascending.
    ///
    /// Infallible by contract: any failure along the species, chain, or
    /// display-data fetches yields the single-stage fallback instead.
    pub async fn evolution_stages(&self, pokemon: &Pokemon) -> Vec<EvolutionStage> {
        match self.try_evolution_stages(pokemon).await {
            Ok(stages) => stages,
            Err(error) => {
                tracing::warn!(
                    pokemon = %pokemon.name,
                    error = %error,
                    "evolution lookup failed, returning single stage"
                );
                vec![single_stage(pokemon)]
            }
        }
    }

    async fn try_evolution_stages(
        &self,
        pokemon: &Pokemon,
    ) -> Result<Vec<EvolutionStage>, FetchError> {
        let species: PokemonSpecies = self
            .get(&format!("pokemon-species/{}", pokemon.id))
            .await?;

        // A species without a chain reference is its own single stage
        let Some(chain_ref) = species.evolution_chain else {
            return Ok(vec![single_stage(pokemon)]);
        };

        let chain: EvolutionChain = self.get_url(&chain_ref.url).await?;
        let walk = StageWalk::run(&chain.chain);

        let mut stages = Vec::new();
        for (stage, names) in walk.stages {
            let mut members = Vec::new();
            for name in names {
                // Display data is fetched one species at a time; a failed
                // species is skipped, not fatal
                match self.fetch_pokemon(&name).await {
                    Ok(p) => {
                        let method = walk.methods.get(&p.name).cloned().flatten();
                        members.push(EvolutionStagePokemon {
                            id: p.id,
                            name: p.name,
                            sprite: p.sprites.front_default,
                            method,
                        });
                    }
                    Err(error) => {
                        tracing::debug!(
                            species = %name,
                            error = %error,
                            "skipping species in evolution stage"
                        );
                    }
                }
            }
            stages.push(EvolutionStage {
                stage,
                pokemon: members,
            });
        }

        Ok(stages)
    }
}

fn single_stage(pokemon: &Pokemon) -> EvolutionStage {
    EvolutionStage {
        stage: 1,
        pokemon: vec![EvolutionStagePokemon {
            id: pokemon.id,
            name: pokemon.name.clone(),
            sprite: pokemon.sprites.front_default.clone(),
            method: None,
        }],
    }
}

/// Preorder walk output: species names grouped by stage (depth + 1), and
/// the method string for every non-root species
#[derive(Default)]
pub(crate) struct StageWalk {
    pub stages: BTreeMap<u32, Vec<String>>,
    pub methods: HashMap<String, Option<String>>,
}

impl StageWalk {
    pub fn run(root: &ChainLink) -> Self {
        let mut walk = Self::default();
        walk.visit(root, 1);
        walk
    }

    fn visit(&mut self, node: &ChainLink, stage: u32) {
        self.stages
            .entry(stage)
            .or_default()
            .push(node.species.name.clone());

        for child in &node.evolves_to {
            let method = child.evolution_details.first().and_then(describe_method);
            self.methods.insert(child.species.name.clone(), method);
            self.visit(child, stage + 1);
        }
    }
}

/// Render an evolution detail as display text, concatenating the matched
/// conditions in a fixed order: level, item, held item, trade, friendship,
/// time of day. Falls back to a generic trigger label, and to `None` when
/// the detail is entirely empty.
pub(crate) fn describe_method(detail: &EvolutionDetail) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(level) = detail.min_level {
        parts.push(format!("Level {}", level));
    }
    if let Some(item) = &detail.item {
        parts.push(format!("Use {}", item.name.replace('-', " ")));
    }
    if let Some(held) = &detail.held_item {
        parts.push(format!("Holding {}", held.name.replace('-', " ")));
    }
    if detail.trigger.as_ref().is_some_and(|t| t.name == "trade") {
        parts.push("Trade".to_string());
    }
    if let Some(happiness) = detail.min_happiness {
        parts.push(format!("High friendship ({})", happiness));
    }
    match detail.time_of_day.as_str() {
        "" => {}
        "day" => parts.push("During the day".to_string()),
        "night" => parts.push("At night".to_string()),
        other => parts.push(format!("During {}", other)),
    }

    if parts.is_empty() {
        let trigger = detail.trigger.as_ref()?;
        return Some(format!("Trigger: {}", trigger.name.replace('-', " ")));
    }

    Some(parts.join(" + "))
}
