use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "weather-loadtest")]
#[command(about = "Simulated users against the weather API: current weather, forecast, history and health")]
pub struct CliConfig {
    /// Target host, e.g. http://localhost:3000
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Path to a TOML scenario file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of simulated users
    #[arg(short, long)]
    pub users: Option<usize>,

    /// Users started per second
    #[arg(short = 'r', long)]
    pub hatch_rate: Option<String>,

    /// Stop after this many seconds
    #[arg(short = 't', long)]
    pub run_time: Option<usize>,

    /// Stop each user after this many iterations of its task list
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Replace the city list
    #[arg(long, value_delimiter = ',')]
    pub cities: Vec<String>,

    #[arg(long)]
    pub history_probability: Option<f64>,

    /// Harness report (.html, .json or .md)
    #[arg(long)]
    pub report_file: Option<String>,

    /// Write the per-endpoint summary as JSON
    #[arg(long)]
    pub summary_json: Option<String>,

    /// Keep the harness telnet/WebSocket controllers enabled
    #[arg(long)]
    pub controllers: bool,

    /// Probe GET /health once before starting
    #[arg(long)]
    pub preflight: bool,

    /// Print the resolved scenario without sending traffic
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
