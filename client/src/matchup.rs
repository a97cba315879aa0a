//! Type matchup and team weakness queries
//!
//! Damage relations come from the API (via the type cache), not a static
//! chart, so the math here operates on the six relation lists directly.

use std::collections::HashSet;

use rotom_api::{DamageRelations, NamedRef, PokemonTypeSlot};

use crate::{Client, FetchError};

impl Client {
    /// Best-case damage multiplier of a set of attacking types against a
    /// defending type set.
    ///
    /// Each attacking type is scored independently against all defender
    /// types and the best score wins ("pick your best attacking type").
    /// Returns 1.0 without fetching when either list is empty.
    pub async fn offensive_multiplier(
        &self,
        attacker_types: &[String],
        defender_types: &[String],
    ) -> Result<f64, FetchError> {
        if attacker_types.is_empty() || defender_types.is_empty() {
            return Ok(1.0);
        }

        let mut best = 0.0_f64;
        for attacker in attacker_types {
            let ty = self.fetch_type(attacker).await?;
            let multiplier = attacker_multiplier(&ty.damage_relations, defender_types);
            if multiplier > best {
                best = multiplier;
            }
        }

        Ok(best)
    }

    /// Attacking types the team as a whole is vulnerable to.
    ///
    /// A type qualifies when at least two member types are weak to it and
    /// no member resists or nullifies it. Ordered by how many members are
    /// weak, descending; ties keep encounter order.
    pub async fn team_weaknesses(
        &self,
        team_types: &[Vec<String>],
    ) -> Result<Vec<String>, FetchError> {
        if team_types.is_empty() {
            return Ok(Vec::new());
        }

        let mut tally = WeaknessTally::new();
        for member in team_types {
            for ty in member {
                let data = self.fetch_type(ty).await?;
                tally.record(&data.damage_relations);
            }
        }

        Ok(tally.into_weaknesses())
    }

    /// Defensive weaknesses of a single pokemon's type slots: every type
    /// dealing double damage to any of them, in encounter order. Type
    /// fetches that fail are skipped rather than propagated.
    pub async fn weaknesses(&self, types: &[PokemonTypeSlot]) -> Vec<String> {
        let mut out = Vec::new();

        for slot in types {
            let data = match self.fetch_type(&slot.ty.name).await {
                Ok(data) => data,
                Err(error) => {
                    tracing::warn!(
                        ty = %slot.ty.name,
                        error = %error,
                        "skipping type in weakness lookup"
                    );
                    continue;
                }
            };

            for weak in &data.damage_relations.double_damage_from {
                if !out.contains(&weak.name) {
                    out.push(weak.name.clone());
                }
            }
        }

        out
    }
}

fn lists(relations: &[NamedRef], name: &str) -> bool {
    relations.iter().any(|t| t.name == name)
}

/// Multiplier for one attacking type against a full defending type set.
/// Per defender type the first matching relation wins (no damage, then
/// double, then half); factors across defender types multiply.
pub(crate) fn attacker_multiplier(relations: &DamageRelations, defender_types: &[String]) -> f64 {
    let mut multiplier = 1.0;

    for defender in defender_types {
        if lists(&relations.no_damage_to, defender) {
            multiplier *= 0.0;
        } else if lists(&relations.double_damage_to, defender) {
            multiplier *= 2.0;
        } else if lists(&relations.half_damage_to, defender) {
            multiplier *= 0.5;
        }
    }

    multiplier
}

/// Accumulates weakness counts and the resistance veto set across a team
#[derive(Default)]
pub(crate) struct WeaknessTally {
    /// (attacking type, members weak to it), in encounter order
    counts: Vec<(String, u32)>,
    resisted: HashSet<String>,
}

impl WeaknessTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, relations: &DamageRelations) {
        for attacker in &relations.double_damage_from {
            match self
                .counts
                .iter_mut()
                .find(|(name, _)| *name == attacker.name)
            {
                Some((_, count)) => *count += 1,
                None => self.counts.push((attacker.name.clone(), 1)),
            }
        }

        for attacker in relations
            .half_damage_from
            .iter()
            .chain(&relations.no_damage_from)
        {
            self.resisted.insert(attacker.name.clone());
        }
    }

    /// Types at least two members are weak to and nobody resists. A single
    /// resisting member vetoes a type no matter how many are weak to it.
    pub fn into_weaknesses(self) -> Vec<String> {
        const THRESHOLD: u32 = 2;

        let resisted = self.resisted;
        let mut kept: Vec<(String, u32)> = self
            .counts
            .into_iter()
            .filter(|(name, count)| *count >= THRESHOLD && !resisted.contains(name))
            .collect();

        // Stable sort keeps encounter order within equal counts
        kept.sort_by(|a, b| b.1.cmp(&a.1));

        kept.into_iter().map(|(name, _)| name).collect()
    }
}
