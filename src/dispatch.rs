use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use clap::{App, AppSettings, Arg};

use crate::{error::RunnerError, MyResult};

const SIBLING: &str = "find";

#[derive(Debug)]
pub struct Config {
    find_path: PathBuf,
    args: Vec<OsString>,
}

impl Config {
    pub fn find_path(&self) -> &Path {
        &self.find_path
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

/// Resolves `exe` through any symlinks and returns the path of the `find`
/// binary sitting next to it.
pub fn sibling_path(exe: &Path) -> MyResult<PathBuf> {
    let binary_path = fs::canonicalize(exe).map_err(|source| RunnerError::PathResolution {
        path: exe.to_path_buf(),
        source,
    })?;
    let dir = binary_path
        .parent()
        .ok_or_else(|| RunnerError::NoParentDir {
            path: binary_path.clone(),
        })?;

    Ok(dir.join(format!("{SIBLING}{}", env::consts::EXE_SUFFIX)))
}

pub fn get_args() -> MyResult<Config> {
    let exe = env::current_exe().map_err(|source| RunnerError::PathResolution {
        path: env::args_os().next().map(PathBuf::from).unwrap_or_default(),
        source,
    })?;
    get_args_from(&exe, env::args_os())
}

pub fn get_args_from<I, T>(exe: &Path, itr: I) -> MyResult<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let find_path = sibling_path(exe)?;

    // No options of our own: every argument, hyphenated or not, goes to find.
    let matches = App::new("runner")
        .about("Hands its arguments to the sibling find")
        .version("0.1.0")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::AllowLeadingHyphen)
        .setting(AppSettings::TrailingVarArg)
        .arg(
            Arg::with_name("args")
                .multiple(true)
                .allow_hyphen_values(true)
                .value_name("ARGS")
                .help("Arguments for find")
        )
        .get_matches_from_safe(itr)?;

    Ok(Config {
        find_path,
        args: matches
            .values_of_os("args")
            .map(|vals| vals.map(|val| val.to_os_string()).collect())
            .unwrap_or_default(),
    })
}

#[cfg(unix)]
pub fn run(config: Config) -> MyResult<()> {
    use std::os::unix::process::CommandExt;

    // exec only comes back on failure
    let source = Command::new(&config.find_path).args(&config.args).exec();
    Err(RunnerError::Launch {
        path: config.find_path,
        source,
    }
    .into())
}

#[cfg(not(unix))]
pub fn run(config: Config) -> MyResult<()> {
    let status = Command::new(&config.find_path)
        .args(&config.args)
        .status()
        .map_err(|source| RunnerError::Launch {
            path: config.find_path.clone(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
