pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod http_client;
pub mod markup;
pub mod models;
pub mod recommendations;
pub mod report;
pub mod reporter;
pub mod scorer;
pub mod store;

use anyhow::{Result, anyhow, bail};
use cli::{Cli, OUTPUT_FORMATS};
use colored::*;
use config::Config;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use models::AnalysisInput;
use report::{Analyzer, AnalyzerConfig};
use reporter::Reporter;
use store::ReportStore;

/// Applies the config file (explicit `--config`, else the default paths) under the CLI flags.
pub fn resolve_cli(cli: Cli) -> Result<Cli> {
    match Config::load_for(&cli)? {
        Some(config) => Ok(config.merge_with_cli(&cli)),
        None => Ok(cli),
    }
}

pub async fn run(args: Cli) -> Result<()> {
    if !OUTPUT_FORMATS.contains(&args.output.as_str()) {
        bail!(
            "Unknown output format '{}', expected one of: {}",
            args.output,
            OUTPUT_FORMATS.join(", ")
        );
    }
    let text_output = args.output == "text";
    let several_urls = args.urls.len() > 1;

    // Every URL is validated before anything is fetched
    let inputs = args
        .urls
        .iter()
        .map(|url| AnalysisInput::new(url))
        .collect::<Result<Vec<_>, _>>()?;

    if text_output {
        println!("{}", "seoscope - On-page SEO Analyzer".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!(
            "{} {}",
            "Analyzing:".bright_white().bold(),
            args.urls.join(", ")
        );
        println!();
    }

    let analyzer = Analyzer::new(&AnalyzerConfig {
        timeout_secs: args.timeout,
        requests_per_second: args.rate_limit,
    })?;

    let progress_bar = (text_output && inputs.len() > 1).then(|| {
        let pb = ProgressBar::new(inputs.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages")
        {
            pb.set_style(style);
        }
        pb
    });

    let analyzer = &analyzer;
    let progress = progress_bar.as_ref();
    let results = stream::iter(&inputs)
        .map(|input| async move {
            let result = analyzer.analyze(input).await;
            if let Some(pb) = progress {
                pb.inc(1);
            }
            (input, result)
        })
        .buffered(args.concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let mut store = ReportStore::new();
    let mut failures = Vec::new();
    for (input, result) in results {
        match result {
            Ok(report) => {
                store.insert(report);
            }
            Err(e) => {
                tracing::error!(url = %input.url(), error = %e, "Failed to analyze page");
                failures.push(e);
            }
        }
    }

    let reports: Vec<_> = store.all().map(|stored| &stored.report).collect();

    match args.output.as_str() {
        "json" if !reports.is_empty() => {
            println!("{}", reporter::render_json(&reports, several_urls)?);
        }
        "csv" if !reports.is_empty() => println!("{}", reporter::render_csv(&reports)?),
        "json" | "csv" => {}
        _ => {
            for report in &reports {
                Reporter::print_text_report(report);
            }
            if store.len() > 1 {
                println!();
                Reporter::print_store_summary(&store);
            }
        }
    }

    if let Some(filename) = &args.save
        && !reports.is_empty()
    {
        Reporter::save_report(&reports, filename, several_urls)?;
        // stdout carries the report itself in json and csv mode
        if text_output {
            println!("Report saved to: {}", filename.bright_green());
        } else {
            eprintln!("Report saved to: {}", filename);
        }
    }

    if failures.len() == 1 && inputs.len() == 1 {
        return Err(failures.remove(0).into());
    }
    if !failures.is_empty() {
        let first = &failures[0];
        return Err(anyhow!(
            "{} of {} analyses failed (first error: {})",
            failures.len(),
            inputs.len(),
            first
        ));
    }

    Ok(())
}
