//! SMR Site Scout CLI
//!
//! Terminal front-end over the same registry and panel the map page uses.
//!
//! Usage:
//!   site-scout cities
//!   site-scout --variant hazard resolve --lat 16.8661 --lng 96.1951
//!   site-scout assess Mandalay --json
//!   site-scout overlays --output data/hazards.geojson
//!   site-scout explore            # click/marker/close commands on stdin

use anyhow::Result;
use clap::{Parser, Subcommand};
use site_panel::{
    overlays, sidebar::SidebarContent, PanelEvent, PanelState, SiteCard, SitePanel,
    DEFAULT_SMR_MODEL,
};
use site_registry::{CityRegistry, SiteResolver, Variant};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    about = "Myanmar SMR site suitability lookup"
)]
struct Args {
    /// Dataset variant (core, hazard)
    #[arg(long, default_value = "core", global = true)]
    variant: Variant,

    /// SMR model shown in the card footer
    #[arg(long, default_value = DEFAULT_SMR_MODEL, global = true)]
    smr_model: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered cities with their scores
    Cities,

    /// Resolve a clicked coordinate to the nearest city's assessment
    Resolve {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the canned assessment for a name (fallback values if unknown)
    Assess {
        name: String,
        #[arg(long)]
        json: bool,
    },

    /// Export hazard overlays as GeoJSON
    Overlays {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive panel session: click <lat> <lng> | marker <name> | close | show | quit
    Explore,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays pipeable
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = CityRegistry::for_variant(args.variant)?;
    info!("Loaded {} registry: {} cities", registry.variant(), registry.len());

    match args.command {
        Command::Cities => list_cities(&registry),
        Command::Resolve { lat, lng, json } => {
            let site = SiteResolver::new(&registry).resolve(lat, lng);
            print_card(&SiteCard::from_assessment(&site, &args.smr_model), json)
        }
        Command::Assess { name, json } => {
            let resolver = SiteResolver::new(&registry);
            let site = match resolver.assess_city(&name) {
                Ok(site) => site,
                Err(_) => {
                    warn!("{} is not a registered city, showing fallback values", name);
                    resolver.assess_at(&name, 0.0, 0.0)
                }
            };
            print_card(&SiteCard::from_assessment(&site, &args.smr_model), json)
        }
        Command::Overlays { output } => export_overlays(output),
        Command::Explore => explore(&registry, &args.smr_model),
    }
}

fn list_cities(registry: &CityRegistry) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for city in registry.locations() {
        let score = registry.score_for(&city.name);
        writeln!(
            out,
            "{:12} {:>8.4} {:>8.4}  {:>3}/100  {}",
            city.name,
            city.latitude,
            city.longitude,
            score,
            site_panel::Suitability::from_score(score)
        )?;
    }
    Ok(())
}

fn print_card(card: &SiteCard, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(card)?);
    } else {
        println!("{}", card);
    }
    Ok(())
}

fn export_overlays(output: Option<PathBuf>) -> Result<()> {
    let collection = overlays::to_geojson(overlays::hazard_overlays());

    match output {
        Some(path) => {
            info!("Writing GeoJSON to {:?}", path);
            let file = File::create(&path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &collection)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&collection)?),
    }
    Ok(())
}

fn explore(registry: &CityRegistry, smr_model: &str) -> Result<()> {
    let sidebar = SidebarContent::new();
    println!("{} {}", sidebar.title, sidebar.subtitle);
    println!("{}", sidebar.analyze.description);

    let mut panel = SitePanel::new(registry, smr_model);
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {
                match panel.state() {
                    PanelState::Showing(card) => println!("{}", card),
                    PanelState::Hidden => println!("(panel closed)"),
                }
                continue;
            }
            _ => {}
        }

        let event = match PanelEvent::parse(command) {
            Ok(event) => event,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match panel.apply(event) {
            Ok(PanelState::Showing(card)) => println!("{}\n", card),
            Ok(PanelState::Hidden) => println!("(panel closed)"),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}
