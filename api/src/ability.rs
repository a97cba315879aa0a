//! The `/ability/{name}` resource

use serde::Deserialize;

use crate::pokemon::NamedRef;

/// One localized effect entry on an ability
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityEffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedRef,
}

/// An ability as returned by `/ability/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<AbilityEffectEntry>,
}

impl Ability {
    /// Pick the effect text to display: the English entry if there is one,
    /// else the first entry; short form preferred over long form. `None`
    /// when no entry has any text.
    pub fn effect_text(&self) -> Option<&str> {
        let entry = self
            .effect_entries
            .iter()
            .find(|e| e.language.name == "en")
            .or_else(|| self.effect_entries.first())?;

        if !entry.short_effect.is_empty() {
            Some(&entry.short_effect)
        } else if !entry.effect.is_empty() {
            Some(&entry.effect)
        } else {
            None
        }
    }
}
