use catalog_compare::utils::{logger, validation::Validate};
use catalog_compare::{compare, CatalogError, CliConfig, ComparisonEngine, SourceSelection, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting catalog-compare");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.resolve() {
        Ok(config) => run(&config, cli.source).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Run aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &TomlConfig, source: SourceSelection) -> Result<(), CatalogError> {
    config.validate()?;

    let engine = ComparisonEngine::from_config(config, source.includes_rest(), source.includes_graphql());
    let reports = engine.run().await?;

    if reports.len() > 1 {
        let discrepancies = compare(&reports);
        if discrepancies.is_empty() {
            println!("Both access paths returned the same results.");
        } else {
            for d in &discrepancies {
                println!(
                    "{} differs from {} on {}: missing {:?}, unexpected {:?}",
                    d.source, d.reference, d.question, d.missing, d.unexpected
                );
            }
        }
    }

    Ok(())
}
