use clap::Parser;
use line_screen::adapters::render::DelimitedRenderer;
use line_screen::adapters::verify::AlwaysVerified;
use line_screen::config::cli::{CliArgs, OutputFormat};
use line_screen::domain::ports::{TableRenderer, Verifier};
use line_screen::engines::perspective::ToxicityScorer;
use line_screen::utils::{logger, validation::Validate};
use line_screen::{BatchScorer, EngineSet};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting line-screen");

    let config = args.to_config();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let raw_text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut engines = EngineSet::standard();
    match &config.remote_api_key {
        Some(key) => {
            let remote = ToxicityScorer::new(
                config.remote_endpoint.clone(),
                key.clone(),
                config.remote_char_limit,
                Duration::from_secs(config.remote_timeout_secs),
            )?;
            engines.register(Arc::new(remote));
        }
        None if args.remote => {
            tracing::warn!("--remote requested but no API key given; running local engines only");
        }
        None => {}
    }

    let verifier = AlwaysVerified;
    let scorer = BatchScorer::new(engines, config);

    match scorer.run(&raw_text, verifier.verify(), args.remote).await {
        Ok(table) => {
            let renderer = match args.format {
                OutputFormat::Csv => DelimitedRenderer::csv(),
                OutputFormat::Tsv => DelimitedRenderer::tsv(),
            };
            let rendered = renderer.render(&table)?;

            match &args.output {
                Some(path) => {
                    std::fs::write(path, rendered)?;
                    println!("✅ {} rows written to {}", table.row_count(), path.display());
                }
                None => print!("{rendered}"),
            }
        }
        Err(rejection) => {
            tracing::error!("submission rejected: {}", rejection);
            eprintln!("❌ {}", rejection);
            std::process::exit(2);
        }
    }

    Ok(())
}
