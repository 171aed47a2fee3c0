mod config;
mod session;
mod table;

use std::io;

use clap::Parser;
use simple_logger::SimpleLogger;

use config::CliConfig;
use session::Session;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    SimpleLogger::new().with_level(config.log_level).init()?;
    if config.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout, &config).run()
}
