use clap::Parser;
use weather_loadtest::adapters::preflight;
use weather_loadtest::config::cli::LogFormat;
use weather_loadtest::config::toml_config::TomlConfig;
use weather_loadtest::utils::{logger, validation::Validate};
use weather_loadtest::{run_attack, CliConfig, LoadTestError, RunConfig, RunSummary};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("🚀 Starting weather-loadtest");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Load test failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), LoadTestError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let config = RunConfig::resolve(cli, file)?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if cli.dry_run {
        display_config_summary(&config);
        return Ok(());
    }

    if cli.preflight {
        let report = preflight::probe_health(&config.load.host).await?;
        tracing::info!(
            "✅ Preflight passed (status {}, reported {})",
            report.status,
            report.reported_status.as_deref().unwrap_or("n/a")
        );
    }

    let started_at = chrono::Utc::now();
    let metrics = run_attack(&config).await?;
    let finished_at = chrono::Utc::now();

    let summary = RunSummary::from_metrics(&config.load.host, started_at, finished_at, &metrics);
    summary.log();

    if let Some(path) = &cli.summary_json {
        summary.write_json(path)?;
        tracing::info!("📁 Summary saved to: {}", path);
    }

    Ok(())
}

fn display_config_summary(config: &RunConfig) {
    let scenario = &config.scenario;
    let load = &config.load;
    let (journey_share, health_share) = scenario.task_shares();

    println!("📋 Scenario Summary:");
    println!("  Target: {}", load.host);
    println!("  Cities ({}): {}", scenario.cities.len(), scenario.cities.join(", "));
    println!(
        "  Weather journey: weight {} (~{:.0}% of tasks)",
        scenario.primary_weight,
        journey_share * 100.0
    );
    println!(
        "  Health check: weight {} (~{:.0}% of tasks)",
        scenario.health_weight,
        health_share * 100.0
    );
    println!(
        "  History probability: {:.0}%",
        scenario.history_probability * 100.0
    );
    println!(
        "  Wait between tasks: {:?} to {:?}",
        scenario.wait_min, scenario.wait_max
    );

    println!();
    println!("⚙️ Load Profile:");
    match load.users {
        Some(users) => println!("  Users: {}", users),
        None => println!("  Users: harness default (one per CPU)"),
    }
    println!(
        "  Hatch rate: {}",
        load.hatch_rate.as_deref().unwrap_or("harness default")
    );
    match load.run_time_seconds {
        Some(secs) => println!("  Run time: {}s", secs),
        None => println!("  Run time: until interrupted"),
    }
    if let Some(iterations) = load.iterations {
        println!("  Iterations per user: {}", iterations);
    }
    if let Some(report_file) = &load.report_file {
        println!("  Report file: {}", report_file);
    }

    println!();
    println!("🔍 Dry run complete, no requests were sent.");
}
