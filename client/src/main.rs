mod config;
mod console;
mod offline;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};
use std::path::PathBuf;
use tokio::io::BufReader;

use config::load_or_create_config;
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "cow_milk", about = "Cow vs. Milk tic-tac-toe against the computer")]
struct Args {
    /// Config file, defaults to cow_milk_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer's tie-breaks; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_or_create_config(args.config)?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run_tictactoe_game(&config.tictactoe, &mut rng, input, &mut output).await?;

    log!("Bye");
    Ok(())
}
