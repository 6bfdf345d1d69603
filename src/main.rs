use aircraft_mass::{
    aircraft::{document, report},
    units::UnitSystem,
};
use anyhow::Result;
use clap::Parser;
use log::info;
use std::{env, path::PathBuf};
use uom::si::moment_of_inertia::kilogram_square_meter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Aircraft document
    #[arg(default_value = "config/aircraft.toml")]
    file: PathBuf,

    /// Print estimated against assigned mass for every component
    #[arg(short, long)]
    estimates: bool,

    /// Assign every component its estimated mass before reporting
    #[arg(short, long)]
    adopt_estimates: bool,

    /// Principal moments of inertia
    #[arg(short, long)]
    principal: bool,

    /// Save the (possibly updated) document here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Estimates table in pounds
    #[arg(long)]
    imperial: bool,
}

fn main() -> Result<()> {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "info") }
    }

    pretty_env_logger::init();
    let args = Args::parse();
    banner();

    let mut aircraft = document::load(&args.file)?;

    if args.adopt_estimates {
        let adopted = aircraft.adopt_all_estimates();
        info!(
            "Adopted estimates for {adopted} of {} components",
            aircraft.components().len()
        );
    }

    if args.estimates {
        let units = if args.imperial {
            UnitSystem::Imperial
        } else {
            UnitSystem::Metric
        };
        println!("{}", report::estimates_table(&aircraft.estimates(), units));
    }

    print!("{}", report::mass_report(aircraft.properties()));

    if args.principal {
        let p = aircraft
            .inertia()
            .principal_moments()
            .map(|i| i.get::<kilogram_square_meter>());
        println!(
            "Principal moments [kg*m^2]: {:.1} {:.1} {:.1}",
            p[0], p[1], p[2]
        );
    }

    if let Some(output) = args.output {
        document::save(&aircraft, &output)?;
    }

    Ok(())
}

fn banner() {
    println!("             __|__");
    println!("      --------(_)--------");
    println!("        O  O       O  O");
    println!("  ---- aircraft-mass ----");
}
