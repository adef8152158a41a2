use clap::Parser;
use mfgdate::core::app::{self, OutputFormat};
use mfgdate::utils::logger;
use mfgdate::{local_source, CliConfig, SerialDateError};

fn main() {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    match execute(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Decoding failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(config: &CliConfig) -> Result<String, SerialDateError> {
    let source = local_source();
    let decoded = app::run(config.serial.as_deref(), &source)?;
    tracing::info!(
        "✅ {} was made around {}",
        decoded.serial,
        decoded.manufacture_date
    );

    app::render(&decoded, config.format)
}
