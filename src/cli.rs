//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::run_ranking;
use crate::domain::config::RankConfig;
use crate::domain::error::RankcastError;
use crate::domain::universe::parse_tickers;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "rankcast", about = "Confidence-weighted short-horizon return ranker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank the configured tickers by confidence-weighted expected return
    Rank {
        #[arg(short, long)]
        config: PathBuf,
        /// Report file; defaults to the [report] output key
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Comma-separated ticker override
        #[arg(long)]
        tickers: Option<String>,
    },
    /// Show the stored data range for one ticker
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        ticker: String,
    },
    /// List tickers present in the data directory
    ListTickers {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Rank {
            config,
            output,
            tickers,
        } => run_rank(&config, output.as_ref(), tickers.as_deref()),
        Command::Info { config, ticker } => run_info(&config, &ticker),
        Command::ListTickers { config } => run_list_tickers(&config),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RankcastError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Builds the run configuration from the INI adapter, applying defaults for
/// everything except the ticker universe.
pub fn build_rank_config(
    adapter: &dyn ConfigPort,
    ticker_override: Option<&str>,
) -> Result<RankConfig, RankcastError> {
    let defaults = RankConfig::default();

    let ticker_list = match ticker_override {
        Some(list) => list.to_string(),
        None => adapter.get_string("ranking", "tickers").ok_or_else(|| {
            RankcastError::ConfigMissing {
                section: "ranking".into(),
                key: "tickers".into(),
            }
        })?,
    };
    let tickers = parse_tickers(&ticker_list).map_err(|e| RankcastError::ConfigInvalid {
        section: "ranking".into(),
        key: "tickers".into(),
        reason: e.to_string(),
    })?;

    let get_usize = |key: &str, default: usize| -> Result<usize, RankcastError> {
        let value = adapter.get_int("ranking", key, default as i64);
        usize::try_from(value).map_err(|_| RankcastError::ConfigInvalid {
            section: "ranking".into(),
            key: key.into(),
            reason: format!("{value} is not a valid count"),
        })
    };

    let config = RankConfig {
        tickers,
        horizon: get_usize("horizon", defaults.horizon)?,
        folds: get_usize("folds", defaults.folds)?,
        seed: adapter.get_int("ranking", "seed", defaults.seed as i64) as u64,
        trees: get_usize("trees", defaults.trees)?,
        top_n: get_usize("top", defaults.top_n)?,
        min_observations: get_usize("min_observations", defaults.min_observations)?,
        ..defaults
    };
    config.validate()?;
    Ok(config)
}

fn data_path(adapter: &dyn ConfigPort) -> Result<PathBuf, RankcastError> {
    adapter
        .get_string("data", "path")
        .map(PathBuf::from)
        .ok_or_else(|| RankcastError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        })
}

fn run_rank(config_path: &PathBuf, output: Option<&PathBuf>, tickers: Option<&str>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let rank_config = match build_rank_config(&adapter, tickers) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let base_path = match data_path(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let output_path = match output {
        Some(path) => path.display().to_string(),
        None => adapter
            .get_string("report", "output")
            .unwrap_or_else(|| "ranking.csv".to_string()),
    };

    eprintln!(
        "Ranking {} tickers over a {}-day horizon...",
        rank_config.tickers.len(),
        rank_config.horizon
    );

    let data = CsvAdapter::new(base_path);
    let outcome = run_ranking(&data, &rank_config);

    if outcome.table.is_empty() {
        eprintln!("No asset produced a usable forecast; nothing to rank.");
        return ExitCode::from(5);
    }

    if let Err(e) = CsvReportAdapter.write(&outcome.table, &output_path) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("rank  ticker     exp.return   mae      confidence  score");
    for (i, asset) in outcome.table.assets.iter().enumerate() {
        println!(
            "{:<5} {:<10} {:>9.2}%  {:>7.4}  {:>9.2}%  {:>6.2}",
            i + 1,
            asset.ticker,
            asset.expected_return_pct,
            asset.mae_pct,
            asset.confidence_pct,
            asset.score
        );
    }
    eprintln!("Report written to {output_path}");

    if outcome.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{} ticker(s) skipped.", outcome.failures.len());
        ExitCode::SUCCESS
    }
}

fn run_info(config_path: &PathBuf, ticker: &str) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let base_path = match data_path(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data = CsvAdapter::new(base_path);
    match data.data_range(&ticker.to_uppercase()) {
        Ok(Some((first, last, rows))) => {
            println!("{ticker}: {rows} rows, {first} to {last}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{ticker}: no data");
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_list_tickers(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let base_path = match data_path(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match CsvAdapter::new(base_path).list_tickers() {
        Ok(tickers) => {
            for ticker in tickers {
                println!("{ticker}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
