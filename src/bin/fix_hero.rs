//! Writes the campaign hero into the content table and optionally removes
//! stale rows.

use clap::Parser;
use ecomoving::config::Config;
use ecomoving::content::campaign_hero;
use ecomoving::supabase::SupabaseClient;
use ecomoving_schema::ContentRow;
use tracing::{info, warn};

const HERO_SECTION: &str = "hero";

#[derive(Parser, Debug)]
#[command(name = "fix-hero")]
#[command(about = "Upsert the campaign hero row and prune stale content rows")]
#[command(version)]
struct Args {
    /// Content row to delete after the hero is written (repeatable), e.g. `navigation`.
    #[arg(long = "prune", value_name = "SECTION")]
    prune: Vec<String>,

    /// Print the payload without touching the table.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let cfg = Config::load()?;

    ecomoving::telemetry::init(&cfg.basic.loglevel);

    let row = ContentRow {
        section: HERO_SECTION.to_string(),
        content: serde_json::to_value(campaign_hero())?,
    };

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&row)?);
        for section in &args.prune {
            println!("would delete section {section}");
        }
        return Ok(());
    }

    let table = cfg.supabase.content_table.as_str();
    let client = SupabaseClient::from_config(&cfg.supabase)?;

    client.table(table).upsert(&row, "section").await?;
    info!(table, section = HERO_SECTION, "Hero updated");

    for section in args.prune.iter().filter(|s| s.as_str() != HERO_SECTION) {
        match client.table(table).eq("section", section).delete().await {
            Ok(()) => info!(table, section = %section, "Section removed"),
            Err(e) => warn!(table, section = %section, error = %e, "Failed to remove section"),
        }
    }

    Ok(())
}
