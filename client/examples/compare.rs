use std::env;
use std::process;

use anyhow::Result;
use rotom_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let (Some(left), Some(right)) = (args.next(), args.next()) else {
        eprintln!("usage: compare <pokemon> <pokemon>");
        process::exit(1);
    };

    let client = Client::new();
    let a = client.fetch_pokemon(&left).await?;
    let b = client.fetch_pokemon(&right).await?;

    let a_types = a.type_names();
    let b_types = b.type_names();

    println!("{} ({})", a.name, a_types.join("/"));
    println!("{} ({})", b.name, b_types.join("/"));
    println!();

    let a_vs_b = client.offensive_multiplier(&a_types, &b_types).await?;
    let b_vs_a = client.offensive_multiplier(&b_types, &a_types).await?;

    println!("{} attacking {}: x{}", a.name, b.name, a_vs_b);
    println!("{} attacking {}: x{}", b.name, a.name, b_vs_a);

    Ok(())
}
