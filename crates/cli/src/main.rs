//! Scripted driver for the needs & health service.
//!
//! Runs a list of steps against one character using the bundled (or a given)
//! content directory, in-memory stores and a manual clock, and prints each
//! result as JSON.
mod step;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::json;

use life_content::ContentBundle;
use life_core::{CharacterId, Elapsed, ItemId, Timestamp};
use life_runtime::{
    GameClock, InMemoryInventory, InMemoryRoster, LifeService, ManualClock, OracleManager,
    RuntimeConfig,
};

use step::{ItemRef, Step};

#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(about = "Drive a character's needs and health through scripted steps")]
struct Args {
    /// Content directory with items.ron, diseases.ron and optional config.toml
    #[arg(long)]
    data: Option<PathBuf>,

    /// Seed for disease rolls (falls back to LIFE_RNG_SEED, then random)
    #[arg(long)]
    seed: Option<u64>,

    /// Character id to act as
    #[arg(long, default_value = "1")]
    character: u32,

    /// Character's maximum health
    #[arg(long, default_value = "100")]
    max_health: u32,

    /// Steps: status, wait:<h>, eat:<item>, drink:<item>, sleep:<h>,
    /// wash:<kind>[:<item>], medicine:<item>, give:<item>[:<qty>]
    #[arg(required = true)]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = RuntimeConfig::from_env()?;
    let bundle = match &args.data {
        Some(dir) => ContentBundle::load_dir(dir)
            .with_context(|| format!("loading content from {}", dir.display()))?,
        None => ContentBundle::bundled().context("loading bundled content")?,
    };
    if args.data.is_some() || std::env::var_os("LIFE_CONFIG").is_none() {
        config.life = bundle.config.clone();
    }
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }

    let character = CharacterId(args.character);
    let roster = Arc::new(InMemoryRoster::new());
    roster.insert(character, args.max_health)?;
    let inventory = Arc::new(InMemoryInventory::new());
    let clock = Arc::new(ManualClock::new(Timestamp::EPOCH));

    let service = LifeService::builder()
        .config(config)
        .oracles(OracleManager::from_content(&bundle))
        .inventory(inventory.clone())
        .roster(roster)
        .clock(clock.clone())
        .build()?;
    service.initialize(character)?;

    for step in &args.steps {
        let result = match step {
            Step::Status => serde_json::to_value(service.get_stats(character)?)?,
            Step::Wait { hours } => {
                clock.advance_secs((hours * Elapsed::SECS_PER_HOUR as f64).round() as i64);
                serde_json::to_value(service.get_stats(character)?)?
            }
            Step::Eat(item) => serde_json::to_value(service.eat(character, resolve(&bundle, item)?)?)?,
            Step::Drink(item) => {
                serde_json::to_value(service.drink(character, resolve(&bundle, item)?)?)?
            }
            Step::Sleep { hours } => serde_json::to_value(service.sleep(character, *hours)?)?,
            Step::Wash { kind, item } => {
                let item = item.as_ref().map(|i| resolve(&bundle, i)).transpose()?;
                serde_json::to_value(service.hygiene_named(character, kind, item)?)?
            }
            Step::Medicine(item) => {
                serde_json::to_value(service.use_medicine(character, resolve(&bundle, item)?)?)?
            }
            Step::Give { item, quantity } => {
                let id = resolve(&bundle, item)?;
                inventory.give(character, id, *quantity)?;
                json!({ "item": id.0, "given": quantity })
            }
        };

        let report = json!({
            "step": format!("{step:?}"),
            "clock": clock.now().0,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn resolve(bundle: &ContentBundle, item: &ItemRef) -> Result<ItemId> {
    match item {
        ItemRef::Id(id) => Ok(ItemId(*id)),
        ItemRef::Name(name) => bundle
            .items
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .map(|def| def.id)
            .ok_or_else(|| anyhow!("no item named '{name}'")),
    }
}
