use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use ours::core::action::{Action, update};
use ours::core::catalog::Catalog;
use ours::core::config::{self, OursConfig};
use ours::core::filter::FacetValue;
use ours::core::navigation::Screen;
use ours::core::state::App;

#[derive(Parser)]
#[command(
    name = "ours",
    version,
    about = "Browse the community knowledge catalog by screen, search and facets"
)]
struct Args {
    /// Screen to open instead of the landing page
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Catalog TOML file (defaults to the built-in sample catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Initial free-text query
    #[arg(short, long)]
    query: Option<String>,

    /// Facet constraint as DIMENSION=VALUE (repeatable, VALUE may be "all")
    #[arg(short, long = "facet", value_parser = parse_facet)]
    facets: Vec<(String, FacetValue)>,

    /// Sub-selection to open on a drill-down screen (theme id or document kind)
    #[arg(short, long)]
    drill: Option<String>,

    /// Print the resulting screen as JSON instead of starting the terminal UI
    #[arg(long)]
    snapshot: bool,
}

fn parse_facet(raw: &str) -> Result<(String, FacetValue), String> {
    let (dimension, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DIMENSION=VALUE, got '{raw}'"))?;
    let dimension = dimension.trim();
    if dimension.is_empty() {
        return Err(format!("missing facet dimension in '{raw}'"));
    }
    Ok((dimension.to_string(), FacetValue::parse(value.trim())))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ours.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("ours.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Config error, using defaults: {}", e);
        OursConfig::default()
    });
    let resolved = config::resolve(&file_config, args.screen, args.catalog.as_deref());
    info!("OURS starting up with {:?}", resolved);

    let catalog = match Catalog::load_or_sample(resolved.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            eprintln!("ours: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::from_config(catalog, &resolved);
    for action in startup_actions(&args) {
        update(&mut app, action);
    }

    if args.snapshot {
        let json = serde_json::to_string_pretty(&app.snapshot()).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    ours::tui::run(app)
}

/// CLI flags replayed as core actions, in navigation-then-filter order.
fn startup_actions(args: &Args) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(sub) = &args.drill {
        actions.push(Action::DrillInto(sub.clone()));
    }
    if let Some(query) = &args.query {
        actions.push(Action::SetQuery(query.clone()));
    }
    for (dimension, value) in &args.facets {
        actions.push(Action::SetFacet {
            dimension: dimension.clone(),
            value: value.clone(),
        });
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facet() {
        assert_eq!(
            parse_facet("country=Kenya"),
            Ok(("country".to_string(), FacetValue::Only("Kenya".into())))
        );
        assert_eq!(
            parse_facet("status=all"),
            Ok(("status".to_string(), FacetValue::All))
        );
        assert!(parse_facet("country").is_err());
        assert!(parse_facet("=Kenya").is_err());
    }

    #[test]
    fn test_startup_actions_order() {
        let args = Args::parse_from([
            "ours",
            "--screen",
            "thematic",
            "--drill",
            "ecology",
            "--query",
            "water",
            "--facet",
            "id=ecology",
        ]);
        assert_eq!(args.screen, Some(Screen::Thematic));
        let actions = startup_actions(&args);
        assert_eq!(actions[0], Action::DrillInto("ecology".into()));
        assert_eq!(actions[1], Action::SetQuery("water".into()));
        assert_eq!(actions.len(), 3);
    }
}
