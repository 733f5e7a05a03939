//! CTS VibeApp (v2)
//!
//! Team productivity hub backed entirely by mock data.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                   VIBE APP                   │
//!                      │                                              │
//!   Client Request     │  ┌────────────┐    ┌──────────┐              │
//!   ───────────────────┼─▶│ middleware │───▶│ dispatch │              │
//!                      │  │   stack    │    └────┬─────┘              │
//!                      │  └────────────┘         │                    │
//!                      │                 ┌───────┴───────┐            │
//!                      │                 ▼               ▼            │
//!                      │          ┌────────────┐  ┌─────────────┐     │
//!                      │          │route table │  │  fallback   │     │
//!                      │          └─────┬──────┘  │  404 / 500  │     │
//!                      │                ▼         └─────────────┘     │
//!                      │          ┌────────────┐                      │
//!                      │          │  payloads  │──▶ JSON              │
//!                      │          │  / views   │──▶ HTML              │
//!                      │          └────────────┘                      │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use vibe_app::cli::ServeArgs;
use vibe_app::lifecycle::startup;
use vibe_app::sites::vibe;

#[derive(Parser)]
#[command(name = "vibe-app", version, about = "CTS VibeApp team productivity hub")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.serve.resolve()?;
    let site = vibe::site()?;

    startup::serve(config, site).await?;
    Ok(())
}
