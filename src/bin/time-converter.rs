//! Global Time Converter: one page showing the current time.

use clap::Parser;

use vibe_app::cli::ServeArgs;
use vibe_app::lifecycle::startup;
use vibe_app::sites::time_converter;

#[derive(Parser)]
#[command(name = "time-converter", version, about = "Global Time Converter")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.serve.resolve()?;
    let site = time_converter::site()?;

    startup::serve(config, site).await?;
    Ok(())
}
