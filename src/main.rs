use anyhow::Context;
use clap::Parser;
use user_validation::utils::{logger, validation::Validate};
use user_validation::{BatchFile, CliConfig, OutputFormat, RecordReport};

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.log_format(), config.verbose);

    // field values stay out of the logs
    tracing::debug!(
        fields = ?config.supplied_fields(),
        input = ?config.input,
        format = ?config.format,
        json_logs = config.json_logs,
        "CLI config"
    );

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::debug!("run failed: {:?}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Returns whether every validated record passed.
fn run(config: &CliConfig) -> anyhow::Result<bool> {
    if let Err(e) = config.validate() {
        anyhow::bail!(e.user_friendly_message());
    }

    let mut reports: Vec<RecordReport> = Vec::new();
    let mut format = OutputFormat::default();

    if let Some(path) = &config.input {
        tracing::info!("📁 Loading records from: {}", path);
        let batch = BatchFile::from_file(path)
            .map_err(|e| anyhow::anyhow!(e.user_friendly_message()))
            .with_context(|| format!("failed to load '{}'", path))?;
        if let Err(e) = batch.validate() {
            anyhow::bail!(e.user_friendly_message());
        }
        format = batch.output_format().unwrap_or(format);
        reports.extend(batch.reports());
    }

    if let Some(record) = config.inline_record() {
        reports.push(record.report_supplied("cli"));
    }

    let format = config.format.unwrap_or(format);
    match format {
        OutputFormat::Json => println!("{}", RecordReport::list_to_json(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", report.to_text());
            }
        }
    }

    let rejected = reports.iter().filter(|r| !r.is_valid()).count();
    tracing::info!(
        "Validated {} record(s), {} with rejected fields",
        reports.len(),
        rejected
    );

    Ok(rejected == 0)
}
