//! Binary for the translation bot.

use anyhow::Result;
use clap::Parser;
use translate_bot::{load_config, run_bot, run_detect, run_translate, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Detect { detector, text } => {
            println!("{}", run_detect(detector, &text.join(" "))?);
            Ok(())
        }
        Commands::Translate { to, from, text } => {
            println!("{}", run_translate(to, from, &text.join(" ")).await?);
            Ok(())
        }
    }
}
