use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tea_util::utils::{logger, validation::Validate};
use tea_util::{CliConfig, Command, RuntimeOptions, StatusClass};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::UserAgent { append } => {
            println!("{}", tea_util::get_user_agent(append.as_deref()));
        }
        Command::Form { json } => {
            let value: Value = serde_json::from_str(&json).context("form input is not valid JSON")?;
            let map = tea_util::try_as_map(&value)?;
            println!("{}", tea_util::to_form_string(Some(map)));
        }
        Command::ParseJson { text } => match tea_util::parse_json(Some(&text)) {
            Some(parsed) => {
                tracing::info!("Classified input as {:?}", parsed);
                println!("{}", parsed.into_value());
            }
            None => {
                tracing::warn!("Input is not an object, integer, boolean or float");
                std::process::exit(2);
            }
        },
        Command::Status { code } => {
            let class = match StatusClass::of(code) {
                Some(StatusClass::Success) => "2xx",
                Some(StatusClass::Redirection) => "3xx",
                Some(StatusClass::ClientError) => "4xx",
                Some(StatusClass::ServerError) => "5xx",
                None => "unclassified",
            };
            println!("{}", class);
        }
        Command::Date => println!("{}", tea_util::get_date_utc_string()),
        Command::Nonce => println!("{}", tea_util::get_nonce()),
        Command::Options { path } => {
            tracing::info!("📁 Loading runtime options from: {}", path);
            let options = RuntimeOptions::from_file(&path)
                .with_context(|| format!("failed to load runtime options from '{}'", path))?;

            if let Err(e) = options.validate() {
                tracing::error!("❌ Runtime options validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            tracing::info!("✅ Runtime options are valid");
            println!("{}", options);
        }
    }

    Ok(())
}
