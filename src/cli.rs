use clap::Parser;

/// Accepted values for `--output`
pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Parser, Debug, Clone)]
#[command(name = "seoscope")]
#[command(about = "A CLI page analyzer that scores on-page SEO", long_about = None)]
pub struct Cli {
    /// One or more page URLs to analyze
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text", value_parser = OUTPUT_FORMATS)]
    pub output: String,

    /// Save the report(s) to file (CSV when the file ends in .csv, JSON otherwise)
    #[arg(short, long)]
    pub save: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Number of pages analyzed concurrently (default: 5)
    #[arg(short = 'c', long, default_value_t = 5)]
    pub concurrency: usize,

    /// Rate limit for requests per second (optional, e.g., 1.0 for 1 req/s)
    #[arg(short = 'r', long)]
    pub rate_limit: Option<f64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
