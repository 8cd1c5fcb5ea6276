use std::ffi::OsString;

use clap::{App, Arg};

use crate::{error::RunnerError, MyResult};

#[derive(Debug)]
pub struct Config {
    name: String,
    names: Vec<String>,
    paths: Vec<String>,
}

impl Config {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Positional arguments. Parsed so they don't trip the parser, not acted on.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

pub fn get_args() -> MyResult<Config> {
    get_args_from(std::env::args_os())
}

pub fn get_args_from<I, T>(itr: I) -> MyResult<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = App::new("find")
        .about("Looks for an entity by name")
        .version("0.1.0")
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .help("Pattern to look for")
                .value_name("PATTERN")
                .takes_value(true)
                .allow_hyphen_values(true)
                .multiple(true)
                .number_of_values(1)
        )
        .arg(
            Arg::with_name("paths")
                .multiple(true)
                .value_name("PATH")
                .help("Search paths")
        )
        .get_matches_from_safe(itr)?;

    let names = matches.values_of_lossy("name").unwrap_or_default();
    // Last one wins when --name is repeated
    let name = names.last().cloned().ok_or(RunnerError::MissingName)?;

    Ok(Config {
        name,
        names,
        paths: matches.values_of_lossy("paths").unwrap_or_default(),
    })
}

pub fn message(pattern: &str) -> String {
    format!("Looking for the entity \"{pattern}\"...")
}

pub fn run(config: Config) -> MyResult<()> {
    for name in &config.names {
        eprintln!("n -> {name}");
    }
    println!("{}", message(&config.name));
    Ok(())
}
