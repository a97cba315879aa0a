use std::env;
use std::process;

use anyhow::Result;
use rotom_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let name = match env::args().nth(1) {
        Some(name) => name,
        None => {
            eprintln!("usage: pokedex <name-or-id>");
            process::exit(1);
        }
    };

    let client = Client::new();
    let pokemon = client.fetch_pokemon(&name).await?;

    println!("#{} {}", pokemon.id, pokemon.name);
    println!("height: {}  weight: {}", pokemon.height, pokemon.weight);
    println!("types: {}", pokemon.type_names().join(", "));
    if let Some(sprite) = pokemon.sprites.best() {
        println!("sprite: {}", sprite);
    }

    println!("\n=== Stats ===\n");
    for stat in &pokemon.stats {
        println!("  {:>3}  {}", stat.base_stat, stat.stat.name);
    }

    println!("\n=== Abilities ===\n");
    for ability in client.ability_details(&pokemon).await {
        let hidden = if ability.is_hidden { " (hidden)" } else { "" };
        println!("  • {}{}: {}", ability.name, hidden, ability.effect);
    }

    println!("\n=== Evolution line ===\n");
    for stage in client.evolution_stages(&pokemon).await {
        for member in &stage.pokemon {
            let method = member.method.as_deref().unwrap_or("base form");
            println!(
                "  stage {}: #{} {} [{}]",
                stage.stage, member.id, member.name, method
            );
        }
    }

    let weak = client.weaknesses(&pokemon.types).await;
    if !weak.is_empty() {
        println!("\nweak to: {}", weak.join(", "));
    }

    Ok(())
}
