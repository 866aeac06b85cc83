//! Console dashboard for locust suitability assessment.
//!
//! Usage:
//!   locmon_service <stage> [<parameter>=<value> ...] [--json]
//!   locmon_service info [<panel>]
//!
//! Parameters omitted from the command line fall back to the registry
//! defaults for the selected stage, mirroring a pre-filled survey form.

use std::env;
use std::error::Error;
use std::process;

use locmon_service::config::{self, Config};
use locmon_service::logging::{self, Component};
use locmon_service::model::{FieldReading, Parameter, Stage, SuitabilityError};
use locmon_service::panel::InfoPanel;
use locmon_service::registry;
use locmon_service::report;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            process::exit(2);
        }
    };
    logging::init_logger(
        config.logging.log_level(),
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );

    if let Err(e) = run(&args, &config) {
        logging::error(Component::System, None, &e.to_string());
        process::exit(1);
    }
}

fn run(args: &[String], config: &Config) -> Result<(), Box<dyn Error>> {
    if args.first().map(String::as_str) == Some("info") {
        return show_panel(args.get(1).map(String::as_str));
    }

    let mut json = false;
    let mut positional: Vec<&str> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => positional.push(other),
        }
    }

    let stage_name = match positional.first() {
        Some(name) => (*name).to_string(),
        None => match &config.assessment.default_stage {
            Some(name) => {
                logging::debug(
                    Component::Config,
                    None,
                    &format!("no stage given, using configured default '{}'", name),
                );
                name.clone()
            }
            None => {
                print_usage();
                return Ok(());
            }
        },
    };
    let stage: Stage = stage_name.parse()?;

    let overrides = positional.get(1..).unwrap_or(&[]);
    let reading = collect_reading(stage, overrides)?;

    let report = report::build_report(stage, &reading)?;
    logging::info(
        Component::Report,
        None,
        &format!(
            "{} stage: {} ({}/{} parameters locust-optimal)",
            stage, report.category, report.optimal_count, report.total_count
        ),
    );

    if json {
        println!("{}", report::to_json(&report)?);
    } else {
        println!("{}", report::render_text(&report));
    }
    Ok(())
}

/// Builds the reading for a stage: registry defaults first, then any
/// `<parameter>=<value>` overrides from the command line.
fn collect_reading(stage: Stage, overrides: &[&str]) -> Result<Vec<FieldReading>, Box<dyn Error>> {
    let mut reading = registry::default_reading(stage);

    for pair in overrides {
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(format!("expected <parameter>=<value>, got '{}'", pair).into());
        };
        let parameter: Parameter = key.parse()?;
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("value for {} is not a number: '{}'", key, raw))?;

        let Some(slot) = reading.iter_mut().find(|r| r.parameter == parameter) else {
            return Err(SuitabilityError::NotApplicable { stage, parameter }.into());
        };
        slot.value = value;

        // Display scales are advisory; warn but classify as given.
        let scale = registry::scale(parameter);
        if value < scale.min || value > scale.max {
            logging::warn(
                Component::Engine,
                Some(parameter.key()),
                &format!(
                    "value {} outside the {}-{} display range",
                    value, scale.min, scale.max
                ),
            );
        }
    }
    Ok(reading)
}

fn show_panel(key: Option<&str>) -> Result<(), Box<dyn Error>> {
    let Some(key) = key else {
        println!("Available panels:");
        for panel in InfoPanel::ALL {
            println!("  {:<15} {}", panel.key(), panel.title());
        }
        return Ok(());
    };
    let panel: InfoPanel = key.parse().map_err(|e: String| -> Box<dyn Error> { e.into() })?;
    println!("{}\n", panel.title());
    println!("{}", panel.body());
    Ok(())
}

fn print_usage() {
    println!("locmon_service: desert locust outbreak risk assessment");
    println!();
    println!("Usage:");
    println!("  locmon_service <stage> [<parameter>=<value> ...] [--json]");
    println!("  locmon_service info [<panel>]");
    println!();
    println!("Stages: egg-laying, hopper, adult, swarm");
    println!();
    println!("Parameters (per stage, defaults in parentheses):");
    for entry in registry::STAGE_REGISTRY {
        let keys: Vec<String> = entry
            .thresholds
            .iter()
            .map(|t| {
                format!("{} ({})", t.parameter.key(), registry::scale(t.parameter).default)
            })
            .collect();
        println!("  {:<12} {}", entry.stage.label(), keys.join(", "));
    }
    println!();
    println!("Example:");
    println!("  locmon_service swarm rainfall=25 wind-850hpa=7 air-temperature=24 ndvi=0.6");
}
