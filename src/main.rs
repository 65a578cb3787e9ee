use clap::Parser;
use hn_scraper::utils::{logger, thread_id, validation::Validate};
use hn_scraper::{CliConfig, LocalStorage, ThreadScraper};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if let Err(e) = logger::init(config.log_file.as_deref(), config.verbose) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    tracing::info!("starting hn-scraper");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    let thread_id = match thread_id::extract(&config.url_or_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("thread ID: {}", thread_id);
    tracing::info!("output file: {}", config.output);
    tracing::info!("max concurrent requests: {}", config.max_concurrent);
    tracing::info!("delay between requests: {}s", config.delay);

    let storage = LocalStorage::new(".".to_string());
    let scraper = ThreadScraper::new(storage, config.clone());

    match scraper.run(thread_id).await {
        Ok(output_path) => {
            println!("✓ Results saved to: {}", output_path);
            if let Some(log_file) = &config.log_file {
                println!("✓ Log file: {}", log_file);
            }
        }
        Err(e) => {
            tracing::error!("fatal error: {}", e);
            eprintln!("✗ Error: {}", e);
            std::process::exit(1);
        }
    }
}
