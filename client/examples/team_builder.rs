use std::env;
use std::process;

use anyhow::Result;
use rotom_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("usage: team_builder <pokemon> [<pokemon> ...]");
        process::exit(1);
    }

    let client = Client::new();

    println!("=== Roster ===\n");
    let mut team_types = Vec::new();
    for name in &names {
        let pokemon = client.fetch_pokemon(name).await?;
        let types = pokemon.type_names();
        println!("  #{:<4} {:<12} {}", pokemon.id, pokemon.name, types.join("/"));
        team_types.push(types);
    }

    let weaknesses = client.team_weaknesses(&team_types).await?;

    println!("\n=== Shared weaknesses ===\n");
    if weaknesses.is_empty() {
        println!("  none: no type threatens two or more members unresisted");
    } else {
        for ty in weaknesses {
            println!("  • {}", ty);
        }
    }

    Ok(())
}
