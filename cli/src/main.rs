//! Talmud viewer server binary.
//!
//! Starts the HTTP server; bind address comes from `--addr`, `TALMUD_ADDR`,
//! or the 127.0.0.1:8080 default, in that order.

use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "talmud-serve")]
#[command(about = "Talmud viewer — serve bilingual Sefaria passages to the browser")]
struct Args {
    /// Bind address (default 127.0.0.1:8080 or TALMUD_ADDR)
    #[arg(short, long, value_name = "ADDR")]
    addr: Option<String>,
}

fn resolve_addr(args: &Args) -> String {
    if let Some(ref a) = args.addr {
        return a.clone();
    }
    std::env::var("TALMUD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let addr = resolve_addr(&args);
    serve::run_serve(Some(&addr), serve::serve_config_from_env()).await
}
