use clap::{Args, Parser};
use fleetfit::{
    find_deployment, init_logging_with, DeployError, DeployOptions, ShipSpec, SymbolSet,
    DEFAULT_FLEET, DEFAULT_FREE_SYMBOL, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, MAX_MAP_SIDE,
};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Deploy Battleship fleets and check whether they fit",
    long_about = None
)]
enum Cli {
    /// Deploy a fleet and print the resulting map.
    Deploy(FleetArgs),
    /// Report whether a fleet fits on a map. Exits non-zero when it does not.
    Check(FleetArgs),
}

#[derive(Args)]
struct FleetArgs {
    #[arg(long, default_value_t = DEFAULT_MAP_HEIGHT, value_parser = parse_side)]
    height: usize,
    #[arg(long, default_value_t = DEFAULT_MAP_WIDTH, value_parser = parse_side)]
    width: usize,
    #[arg(
        long = "ship",
        value_name = "NAME:SIZE:QTY",
        value_parser = parse_ship,
        help = "Fleet entry, repeatable (default: the standard six-type fleet)"
    )]
    ships: Vec<ShipSpec>,
    #[arg(long, help = "Allow ships to touch")]
    no_gaps: bool,
    #[arg(long, default_value_t = DEFAULT_FREE_SYMBOL)]
    free_symbol: char,
    #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Print JSON instead of text")]
    json: bool,
}

impl FleetArgs {
    fn specs(&self) -> Vec<ShipSpec> {
        if self.ships.is_empty() {
            DEFAULT_FLEET.to_vec()
        } else {
            self.ships.clone()
        }
    }

    fn options(&self) -> DeployOptions {
        DeployOptions {
            symbols: SymbolSet::with_free(self.free_symbol),
            ..DeployOptions::with_gaps(!self.no_gaps)
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

fn parse_side(s: &str) -> Result<usize, String> {
    let side: usize = s
        .parse()
        .map_err(|_| format!("invalid map side '{}' - must be a number", s))?;
    if side == 0 || side > MAX_MAP_SIDE {
        return Err(format!("map side must be between 1 and {}", MAX_MAP_SIDE));
    }
    Ok(side)
}

fn parse_ship(s: &str) -> Result<ShipSpec, String> {
    let mut parts = s.split(':');
    let (Some(name), Some(size), Some(qty), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:SIZE:QTY, got '{}'", s));
    };
    if name.is_empty() {
        return Err("ship name cannot be empty".to_string());
    }
    let size: usize = size
        .parse()
        .map_err(|_| format!("invalid size '{}' - must be a positive number", size))?;
    let quantity: usize = qty
        .parse()
        .map_err(|_| format!("invalid quantity '{}' - must be a positive number", qty))?;
    if size == 0 || quantity == 0 {
        return Err("size and quantity must be positive".to_string());
    }
    Ok(ShipSpec::named(name, size, quantity))
}

fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);

    match Cli::parse() {
        Cli::Deploy(args) => {
            let options = args.options();
            let deployment = find_deployment(
                args.height,
                args.width,
                &args.specs(),
                &options,
                &mut args.rng(),
            )
            .map_err(|e| anyhow::anyhow!(e))?;

            if args.json {
                let rows: Vec<String> = deployment
                    .symbols(&options)
                    .into_iter()
                    .map(|row| row.into_iter().collect())
                    .collect();
                let result = json!({
                    "height": args.height,
                    "width": args.width,
                    "attempts": deployment.attempts,
                    "grid": rows,
                    "ships": deployment.fleet.ships(),
                });
                println!("{}", serde_json::to_string(&result)?);
            } else {
                print!("{}", deployment.grid.render(&options.symbols));
                println!();
                for ship in deployment.fleet.ships() {
                    let start = ship
                        .coordinates()
                        .first()
                        .map(|c| c.to_string())
                        .unwrap_or_default();
                    println!(
                        "  {} ({}): {:?} from {}",
                        ship.name(),
                        ship.size(),
                        ship.orientation().unwrap_or(fleetfit::Orientation::Single),
                        start
                    );
                }
                println!("Deployed on attempt {}", deployment.attempts);
            }
        }
        Cli::Check(args) => {
            let specs = args.specs();
            let verdict = find_deployment(
                args.height,
                args.width,
                &specs,
                &args.options(),
                &mut args.rng(),
            );
            let feasible = match verdict {
                Ok(_) => true,
                Err(DeployError::Infeasible { .. }) => false,
                Err(e) => return Err(anyhow::anyhow!(e)),
            };
            if args.json {
                let result = json!({
                    "height": args.height,
                    "width": args.width,
                    "ships": specs.iter().map(|s| s.quantity).sum::<usize>(),
                    "cells": specs.iter().map(ShipSpec::cells).sum::<usize>(),
                    "feasible": feasible,
                });
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", if feasible { "feasible" } else { "infeasible" });
            }
            if !feasible {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
