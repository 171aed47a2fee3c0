use bisect_server::ServerConfig;
use clap::Parser;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    SimpleLogger::new().with_level(config.log_level).init()?;

    bisect_server::serve(&config).await;
    Ok(())
}
