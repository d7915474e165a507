use altin::adapter::inbound::cli::{self, command::Cli, output};
use altin::error::{ConfigError, Error};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli).await {
        output::error(&e.to_string());
        if matches!(
            e,
            Error::Config(ConfigError::MissingField {
                field: "BOT_TOKEN" | "CHAT_ID"
            })
        ) {
            eprintln!("    Set BOT_TOKEN and CHAT_ID in the environment or a .env file");
        }
        std::process::exit(1);
    }
}
