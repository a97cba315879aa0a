//! The `/pokemon/{name|id}` resource
//!
//! Only the fields the client actually renders are modeled. Optional API
//! fields degrade to `None`/empty rather than failing deserialization.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub url: String,
}

/// One base-stat entry, e.g. `("speed", 100)`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedRef,
}

/// One of the (at most two) type slots on a pokemon
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub ty: NamedRef,
}

/// An ability reference on a pokemon; the full resource lives at `ability.url`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonAbilityRef {
    pub ability: NamedRef,
    pub is_hidden: bool,
    pub slot: u8,
}

/// Sprite URLs; every one of them may be null on the wire
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<AlternateSprites>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlternateSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<OfficialArtwork>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl PokemonSprites {
    /// Best available sprite: official artwork if present, else the default
    pub fn best(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

/// A pokemon as returned by `/pokemon/{name|id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilityRef>,
}

impl Pokemon {
    /// Type names in slot order, e.g. `["water", "ground"]`
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.ty.name.clone()).collect()
    }
}
