//! Pokemon type universe and the `/type/{name}` resource

use serde::Deserialize;

use crate::pokemon::NamedRef;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeName {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl TypeName {
    /// All 18 Pokemon types
    pub const ALL: [TypeName; 18] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Electric,
        TypeName::Grass,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [TypeName] {
        &Self::ALL
    }

    /// Parse an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(TypeName::Normal),
            "fire" => Some(TypeName::Fire),
            "water" => Some(TypeName::Water),
            "electric" => Some(TypeName::Electric),
            "grass" => Some(TypeName::Grass),
            "ice" => Some(TypeName::Ice),
            "fighting" => Some(TypeName::Fighting),
            "poison" => Some(TypeName::Poison),
            "ground" => Some(TypeName::Ground),
            "flying" => Some(TypeName::Flying),
            "psychic" => Some(TypeName::Psychic),
            "bug" => Some(TypeName::Bug),
            "rock" => Some(TypeName::Rock),
            "ghost" => Some(TypeName::Ghost),
            "dragon" => Some(TypeName::Dragon),
            "dark" => Some(TypeName::Dark),
            "steel" => Some(TypeName::Steel),
            "fairy" => Some(TypeName::Fairy),
            _ => None,
        }
    }

    /// Canonical API spelling (lowercase, as used in resource URLs)
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Normal => "normal",
            TypeName::Fire => "fire",
            TypeName::Water => "water",
            TypeName::Electric => "electric",
            TypeName::Grass => "grass",
            TypeName::Ice => "ice",
            TypeName::Fighting => "fighting",
            TypeName::Poison => "poison",
            TypeName::Ground => "ground",
            TypeName::Flying => "flying",
            TypeName::Psychic => "psychic",
            TypeName::Bug => "bug",
            TypeName::Rock => "rock",
            TypeName::Ghost => "ghost",
            TypeName::Dragon => "dragon",
            TypeName::Dark => "dark",
            TypeName::Steel => "steel",
            TypeName::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The six damage-relation lists on a `/type/{name}` resource
///
/// Relations the API omits deserialize as empty lists.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedRef>,
}

/// A type as returned by `/type/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeData {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}
