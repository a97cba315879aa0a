#[cfg(test)]
mod tests {
    use crate::{Ability, EvolutionChain, Pokemon, TypeData, TypeName};

    #[test]
    fn test_deserialize_pokemon() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "sprites": {
                "front_default": "https://img.example/6.png",
                "other": {
                    "official-artwork": { "front_default": "https://img.example/art/6.png" }
                }
            },
            "stats": [
                { "base_stat": 78, "stat": { "name": "hp", "url": "u" } },
                { "base_stat": 100, "stat": { "name": "speed", "url": "u" } }
            ],
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "u" } },
                { "slot": 2, "type": { "name": "flying", "url": "u" } }
            ],
            "abilities": [
                { "ability": { "name": "blaze", "url": "u" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "solar-power", "url": "u" }, "is_hidden": true, "slot": 3 }
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.id, 6);
        assert_eq!(pokemon.name, "charizard");
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
        assert_eq!(pokemon.stats[1].base_stat, 100);
        assert!(pokemon.abilities[1].is_hidden);
        assert_eq!(
            pokemon.sprites.best(),
            Some("https://img.example/art/6.png")
        );
    }

    #[test]
    fn test_deserialize_pokemon_sparse() {
        // Missing sprites and lists must not be an error
        let json = r#"{ "id": 132, "name": "ditto", "height": 3, "weight": 40 }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.sprites.front_default, None);
        assert_eq!(pokemon.sprites.best(), None);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
        assert!(pokemon.abilities.is_empty());
    }

    #[test]
    fn test_sprite_falls_back_to_front_default() {
        let json = r#"{
            "id": 25, "name": "pikachu", "height": 4, "weight": 60,
            "sprites": { "front_default": "https://img.example/25.png", "other": null }
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.sprites.best(), Some("https://img.example/25.png"));
    }

    #[test]
    fn test_deserialize_type_data() {
        let json = r#"{
            "name": "fire",
            "damage_relations": {
                "double_damage_to": [
                    { "name": "grass", "url": "u" },
                    { "name": "ice", "url": "u" }
                ],
                "half_damage_to": [{ "name": "water", "url": "u" }],
                "no_damage_to": [],
                "double_damage_from": [{ "name": "water", "url": "u" }],
                "half_damage_from": [{ "name": "fairy", "url": "u" }],
                "no_damage_from": []
            }
        }"#;

        let ty: TypeData = serde_json::from_str(json).unwrap();

        assert_eq!(ty.name, "fire");
        assert_eq!(ty.damage_relations.double_damage_to[0].name, "grass");
        assert!(ty.damage_relations.no_damage_to.is_empty());
    }

    #[test]
    fn test_deserialize_type_data_missing_relations() {
        let ty: TypeData = serde_json::from_str(r#"{ "name": "stellar" }"#).unwrap();

        assert!(ty.damage_relations.double_damage_from.is_empty());
    }

    #[test]
    fn test_deserialize_evolution_chain() {
        let json = r#"{
            "chain": {
                "species": { "name": "charmander", "url": "u" },
                "evolves_to": [{
                    "species": { "name": "charmeleon", "url": "u" },
                    "evolution_details": [{ "min_level": 16, "trigger": { "name": "level-up", "url": "u" } }],
                    "evolves_to": [{
                        "species": { "name": "charizard", "url": "u" },
                        "evolution_details": [{ "min_level": 36, "trigger": { "name": "level-up", "url": "u" } }],
                        "evolves_to": []
                    }]
                }]
            }
        }"#;

        let chain: EvolutionChain = serde_json::from_str(json).unwrap();

        assert_eq!(chain.chain.species.name, "charmander");
        let child = &chain.chain.evolves_to[0];
        assert_eq!(child.species.name, "charmeleon");
        assert_eq!(child.evolution_details[0].min_level, Some(16));
        assert_eq!(child.evolves_to[0].species.name, "charizard");
    }

    #[test]
    fn test_ability_effect_prefers_english_short_form() {
        let json = r#"{
            "name": "blaze",
            "effect_entries": [
                {
                    "effect": "Erhöht Feuer-Attacken.",
                    "short_effect": "Verstärkt Feuer.",
                    "language": { "name": "de", "url": "u" }
                },
                {
                    "effect": "When this Pokemon has 1/3 or less of its HP, its Fire moves do 1.5x damage.",
                    "short_effect": "Strengthens Fire moves in a pinch.",
                    "language": { "name": "en", "url": "u" }
                }
            ]
        }"#;

        let ability: Ability = serde_json::from_str(json).unwrap();

        assert_eq!(
            ability.effect_text(),
            Some("Strengthens Fire moves in a pinch.")
        );
    }

    #[test]
    fn test_ability_effect_first_entry_when_no_english() {
        let json = r#"{
            "name": "levitate",
            "effect_entries": [
                { "effect": "Jibun wo fuyuu saseru.", "short_effect": "", "language": { "name": "ja", "url": "u" } }
            ]
        }"#;

        let ability: Ability = serde_json::from_str(json).unwrap();

        // Short form empty, so the long form wins
        assert_eq!(ability.effect_text(), Some("Jibun wo fuyuu saseru."));
    }

    #[test]
    fn test_ability_effect_none_without_entries() {
        let ability: Ability = serde_json::from_str(r#"{ "name": "mystery" }"#).unwrap();

        assert_eq!(ability.effect_text(), None);
    }

    #[test]
    fn test_type_name_from_name() {
        assert_eq!(TypeName::from_name("Fire"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("fire"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("FIRE"), Some(TypeName::Fire));
        assert_eq!(TypeName::from_name("shadow"), None);
    }

    #[test]
    fn test_type_name_as_str() {
        assert_eq!(TypeName::Fire.as_str(), "fire");
        assert_eq!(TypeName::Psychic.as_str(), "psychic");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(TypeName::all().len(), 18);
        assert_eq!(TypeName::all()[0], TypeName::Normal);
        assert_eq!(TypeName::all()[17], TypeName::Fairy);
    }
}
