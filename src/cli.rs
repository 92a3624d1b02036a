use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::server::constant::CONFIG_PATH;
use crate::server::runner::ServerOptions;

/// Local HTTP service that saves browser-authenticated videos with yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Config file, created with defaults if missing
    #[arg(long, default_value = CONFIG_PATH)]
    pub config: PathBuf,

    /// Listen address (overrides the config file for this run)
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// Listen port (overrides the config file for this run)
    #[arg(long)]
    pub port: Option<u16>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn server_options(&self) -> ServerOptions {
        ServerOptions {
            config_path: self.config.clone(),
            address: self.address,
            port: self.port,
        }
    }
}
