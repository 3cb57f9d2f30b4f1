use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use array_layouts::config::{load_demo_config, DemoConfig};
use array_layouts::demo;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ARRAY_LAYOUTS_LOG", "error"))
        .init();

    let matches = Command::new("array-layouts")
        .version(clap::crate_version!())
        .about("Prints demonstrations of end-relative indexing, rectangular and jagged arrays")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(
                    "Optional JSON file overriding the demonstration inputs. \
                     Without it the canonical [1..9] / 3x3 run is printed.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    match run_demo(&matches) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Demonstration failed: {:#}", e);
            Err(e)
        }
    }
}

fn run_demo(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Loading demo config from {}", path.display());
            load_demo_config(path)?
        }
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    demo::run(&mut out, &config)
}
