//! Ability detail resolution

use futures_util::future::join_all;
use serde::Serialize;

use rotom_api::{Ability, Pokemon, PokemonAbilityRef};

use crate::Client;

/// Fallback effect text when the ability resource cannot be loaded or
/// carries no usable entry
pub const FALLBACK_EFFECT: &str = "No effect description available.";

/// An ability joined with its localized effect text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityDetail {
    pub name: String,
    pub effect: String,
    pub is_hidden: bool,
}

impl Client {
    /// Resolve effect text for every ability on a pokemon.
    ///
    /// Fetches run concurrently and all of them are awaited; a failed
    /// fetch degrades that one ability to [`FALLBACK_EFFECT`] rather than
    /// failing the batch.
    pub async fn ability_details(&self, pokemon: &Pokemon) -> Vec<AbilityDetail> {
        join_all(pokemon.abilities.iter().map(|r| self.ability_detail(r))).await
    }

    async fn ability_detail(&self, ability_ref: &PokemonAbilityRef) -> AbilityDetail {
        let effect = match self.get_url::<Ability>(&ability_ref.ability.url).await {
            Ok(ability) => ability
                .effect_text()
                .unwrap_or(FALLBACK_EFFECT)
                .to_string(),
            Err(error) => {
                tracing::warn!(
                    ability = %ability_ref.ability.name,
                    error = %error,
                    "ability fetch failed, using fallback text"
                );
                FALLBACK_EFFECT.to_string()
            }
        };

        AbilityDetail {
            name: ability_ref.ability.name.clone(),
            effect,
            is_hidden: ability_ref.is_hidden,
        }
    }
}
