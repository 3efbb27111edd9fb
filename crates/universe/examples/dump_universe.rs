//! Print a universe overview and the detail view of one sector
//!
//! Usage: cargo run -p universe --example dump_universe -- --sectors-x 16 --detail 2,1

use clap::Parser;
use tracing_subscriber::EnvFilter;
use universe::{Grid, UniverseConfig};

#[derive(Parser, Debug)]
#[command(about = "Dump a procedurally generated universe")]
struct Args {
    /// Sectors along x
    #[arg(long, default_value_t = UniverseConfig::default().sectors_x)]
    sectors_x: u32,

    /// Sectors along y
    #[arg(long, default_value_t = UniverseConfig::default().sectors_y)]
    sectors_y: u32,

    /// Sector edge length in world units
    #[arg(long, default_value_t = UniverseConfig::default().sector_size)]
    sector_size: i64,

    /// JSON config file; overrides the dimension flags
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Sector to expand, as "i,j"
    #[arg(long, value_parser = parse_sector)]
    detail: Option<(usize, usize)>,
}

fn parse_sector(s: &str) -> Result<(usize, usize), String> {
    let (i, j) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"i,j\", got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| e.to_string());
    Ok((parse(i)?, parse(j)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => UniverseConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => UniverseConfig::new(args.sectors_x, args.sectors_y, args.sector_size),
    };
    config.expand_full = false;

    let mut grid = Grid::from_config(&config)?;

    println!(
        "Universe: {}x{} sectors of {} units, {} stars\n",
        grid.sectors_x(),
        grid.sectors_y(),
        grid.sector_size(),
        grid.star_count()
    );

    for ((i, j), system) in grid.stars() {
        let star = system.star().expect("stars() yields occupied sectors");
        println!(
            "  [{:>3},{:>3}] {} at ({}, {}): diameter {:.1}, color {}",
            i,
            j,
            system.metadata().catalog_name,
            system.x,
            system.y,
            star.diameter,
            star.color.to_hex()
        );
    }

    if let Some((i, j)) = args.detail {
        let Some(planets) = grid.expand(i, j) else {
            return Err(format!("sector ({i}, {j}) is outside the grid").into());
        };
        let planets = planets.to_vec();

        println!("\n{}", grid.cell_at(i, j).map(|s| s.to_text()).unwrap_or_default());
        for (n, planet) in planets.iter().enumerate() {
            println!("Planet {}:\n{}", n + 1, planet.to_text());
        }
    }

    Ok(())
}
