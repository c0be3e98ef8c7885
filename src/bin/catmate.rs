//! Catmate CLI — breed cats from the terminal
//!
//! Commands:
//!   catmate random    — generate random cats
//!   catmate mate      — breed two cats by DNA
//!   catmate favorite  — breed two cats and keep the kitten
//!   catmate release   — set a favorite free
//!   catmate list      — list favorites
//!   catmate portrait  — print the portrait URL for a DNA
//!   catmate demo      — run the whole flow end to end

use catmate_core::cat::DNA_LENGTH;
use catmate_core::{Cat, CatError, CatId, Dna, FavoriteStore, PortraitConfig, Result};
use std::env;

const STORE_FILE: &str = "catmate-store.json";
const STORE_ENV: &str = "CATMATE_STORE";
const LITTER_SIZE: usize = 4;

fn print_usage() {
    println!(
        r#"
Catmate v0.1 — random DNA cats & interlaced breeding

Usage: catmate <command> [options]

Commands:
  random    [count]            Generate random cats (default {LITTER_SIZE})
  mate      <dna_a> <dna_b>    Breed two cats
  favorite  <dna_a> <dna_b>    Breed two cats and save the kitten
  release   <id>               Remove a favorite
  list                         List favorites
  portrait  <dna>              Print the portrait URL for a DNA
  demo                         Run full demo

DNA is exactly {DNA_LENGTH} letters A-Z.
Favorites are kept in {STORE_FILE} (override with {STORE_ENV}).

Examples:
  catmate random 2
  catmate mate SAEGRHYOMCCREPUGDNDDIICTSJZQRYVQ THWOMALWUJSLATWQMBCFTPOYHVDRESWL
  catmate release 3
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "random" => cmd_random(&args[2..]),
        "mate" => cmd_mate(&args[2..]),
        "favorite" => cmd_favorite(&args[2..]),
        "release" => cmd_release(&args[2..]),
        "list" => cmd_list(),
        "portrait" => cmd_portrait(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("  Error: {}", e);
        std::process::exit(1);
    }
}

fn store_path() -> String {
    env::var(STORE_ENV).unwrap_or_else(|_| STORE_FILE.to_string())
}

fn load_store() -> Result<FavoriteStore> {
    let owner = env::var("USER").unwrap_or_else(|_| "catmate".to_string());
    let path = store_path();
    FavoriteStore::open(&path, &owner).map_err(|e| {
        eprintln!("  Could not load {}; fix or move the file before saving again", path);
        e
    })
}

fn save_store(store: &FavoriteStore) -> Result<()> {
    store.save()?;
    println!("  Saved to {}", store.path().display());
    Ok(())
}

fn print_cat(cat: &Cat, portraits: &PortraitConfig) {
    println!("  {}", cat.summary());
    println!("      portrait: {}", portraits.url(cat.dna()));
    if let Some(parents) = cat.parents() {
        let (a, b) = parents.contributions();
        println!("      lineage:  {} (from {}) x {} (from {})", a, parents.first(), b, parents.second());
    }
}

fn usage_error(usage: &str) -> Result<()> {
    eprintln!("Usage: {}", usage);
    std::process::exit(2);
}

/// Litter size argument; absent means the default, unparsable means `None`
fn parse_count(arg: Option<&str>) -> Option<usize> {
    match arg {
        None => Some(LITTER_SIZE),
        Some(s) => s.parse().ok(),
    }
}

fn cmd_random(args: &[String]) -> Result<()> {
    let count = match parse_count(args.first().map(String::as_str)) {
        Some(count) => count,
        None => return usage_error("catmate random [count]"),
    };
    let portraits = PortraitConfig::default();
    println!("\n  Random cats ({}):", count);
    for cat in Cat::litter(count, &mut rand::thread_rng()) {
        print_cat(&cat, &portraits);
    }
    Ok(())
}

fn cmd_mate(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return usage_error("catmate mate <dna_a> <dna_b>");
    }
    let kitten = Cat::mate_by_dna(&args[0], &args[1])?;
    println!("\n  New kitten:");
    print_cat(&kitten, &PortraitConfig::default());
    Ok(())
}

fn cmd_favorite(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return usage_error("catmate favorite <dna_a> <dna_b>");
    }
    let kitten = Cat::mate_by_dna(&args[0], &args[1])?;
    let mut store = load_store()?;
    let saved = store.favorite(&kitten)?;
    println!("\n  Favorited:");
    print_cat(&saved, &PortraitConfig::default());
    save_store(&store)
}

fn cmd_release(args: &[String]) -> Result<()> {
    let id = match args.first().and_then(|s| s.parse().ok()) {
        Some(id) => CatId(id),
        None => return usage_error("catmate release <id>"),
    };
    let mut store = load_store()?;
    let record = store.delete(id)?;
    println!("\n  Set free: #{} {}", record.id, record.dna);
    save_store(&store)
}

fn cmd_list() -> Result<()> {
    let store = load_store()?;
    if store.count() == 0 {
        println!("\n  No favorites. Use 'catmate favorite' or 'catmate demo' to get started.");
        return Ok(());
    }
    let portraits = PortraitConfig::default();
    println!("\n  {}", store.summary());
    println!("  {}", "-".repeat(80));
    for cat in store.cats()? {
        print_cat(&cat, &portraits);
    }
    Ok(())
}

fn cmd_portrait(args: &[String]) -> Result<()> {
    let dna: Dna = match args.first() {
        Some(s) => s.parse()?,
        None => return usage_error("catmate portrait <dna>"),
    };
    println!("{}", PortraitConfig::default().url(&dna));
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let portraits = PortraitConfig::default();

    println!("\n  [1/5] Generating {} random cats...", LITTER_SIZE);
    let litter = Cat::litter(LITTER_SIZE, &mut rand::thread_rng());
    for cat in &litter {
        print_cat(cat, &portraits);
    }

    println!("\n  [2/5] Mating the first two...");
    let kitten = litter[0].mate(&litter[1])?;
    print_cat(&kitten, &portraits);

    println!("\n  [3/5] Validation rejects malformed DNA...");
    match Cat::new("aaaaaa") {
        Err(e @ CatError::InvalidDna { .. }) => println!("  Rejected: {}", e),
        Err(e) => return Err(e),
        Ok(cat) => println!("  Unexpectedly accepted {}", cat),
    }

    println!("\n  [4/5] Saving the kitten as a favorite...");
    let mut store = load_store()?;
    let saved = store.favorite(&kitten)?;
    print_cat(&saved, &portraits);
    println!("  {}", store.summary());

    println!("\n  [5/5] Setting it free again...");
    store.release(&saved)?;
    println!("  {}", store.summary());
    save_store(&store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), Some(LITTER_SIZE));
        assert_eq!(parse_count(Some("2")), Some(2));
        assert_eq!(parse_count(Some("0")), Some(0));
        assert_eq!(parse_count(Some("abc")), None);
        assert_eq!(parse_count(Some("-1")), None);
        assert_eq!(parse_count(Some("")), None);
    }
}
