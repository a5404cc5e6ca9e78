use menu_cards::config::Config;
use menu_cards::constants::{DEFAULT_PORT, DEFAULT_REVALIDATE_SECS};
use menu_cards::server::serve;
use menu_cards::shared_main::logger_init;

use clap::Parser;
use log::log_enabled;
use std::time::Duration;

/// Serves the weekly food menu as a page of day cards, plus a JSON proxy at /api/menu.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Upstream menu API returning a JSON array of day-menus
    #[arg(short, long, env = "MENU_API_URL")]
    api_url: Option<String>,
    /// Address to bind to
    #[arg(short, long, env = "BIND", default_value = "0.0.0.0")]
    bind: String,
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Seconds a successful page fetch is reused{n}0 disables the page cache
    #[arg(long, env = "REVALIDATE_SECS", default_value_t = DEFAULT_REVALIDATE_SECS)]
    revalidate_secs: u64,
    /// Timeout for the upstream request in seconds{n}Unset means no timeout
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
    /// Enable verbose logging (mostly fetch timings){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            api_url: args.api_url,
            bind: args.bind,
            port: args.port,
            revalidate: Duration::from_secs(args.revalidate_secs),
            upstream_timeout: args.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());
    log::info!("Starting menu server...");

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for fetch timings");
    }

    serve(args.into()).await
}
