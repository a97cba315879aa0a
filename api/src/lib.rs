pub mod ability;
pub mod pokemon;
pub mod species;
pub mod typing;

pub use ability::{Ability, AbilityEffectEntry};
pub use pokemon::{
    NamedRef, Pokemon, PokemonAbilityRef, PokemonSprites, PokemonStat, PokemonTypeSlot,
};
pub use species::{ChainLink, EvolutionChain, EvolutionDetail, PokemonSpecies, ResourceUrl};
pub use typing::{DamageRelations, TypeData, TypeName};

mod tests;
