use std::{net::IpAddr, path::PathBuf};

use clap::Parser;
use log::LevelFilter;

/// Command line and environment configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "BISECT_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "BISECT_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding the web GUI (`index.html`, `script.js`).
    #[arg(long, env = "BISECT_STATIC_DIR", default_value_os_t = default_static_dir())]
    pub static_dir: PathBuf,

    /// Log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[arg(long, env = "BISECT_LOG", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

/// The GUI shipped with this crate.
#[must_use]
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
