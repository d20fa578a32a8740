use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::report::EmptyListPolicy;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Parser, Debug, Clone)]
#[command(
    name = "check_webservers",
    author,
    version,
    about = "Probe a list of web servers over HTTP and report a monitoring-plugin status.",
    long_about = None
)]
pub struct Cli {
    /// File with one server URL per line. Blank lines are ignored.
    pub server_list: PathBuf,

    /// Time to wait for each server to respond, in seconds.
    #[arg(
        short = 'W',
        long = "timeout",
        env = "CHECK_WEBSERVERS_TIMEOUT",
        default_value = "3.0",
        value_parser = parse_duration
    )]
    pub timeout: Duration,

    /// Report an empty server list as OK instead of CRITICAL.
    #[arg(
        long = "empty-ok",
        env = "CHECK_WEBSERVERS_EMPTY_OK",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub empty_ok: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn empty_list_policy(&self) -> EmptyListPolicy {
        if self.empty_ok {
            EmptyListPolicy::Ok
        } else {
            EmptyListPolicy::Critical
        }
    }
}

fn parse_duration(arg: &str) -> Result<Duration, String> {
    let seconds = arg.parse::<f64>().map_err(|e| e.to_string())?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got {}", arg));
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}
