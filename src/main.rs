// src/main.rs

use clap::Parser;
use env_logger::Env;
use log::info;
use std::error::Error;
use std::path::PathBuf;

use fincharts::chart_functions::plot_hist::column_diffs;
use fincharts::constants::DEFAULT_HIST_BINS;
use fincharts::{
    load_ohlc_csv, load_patterns_csv, load_signals_csv, plot_bar, plot_candlestick,
    plot_filled_ohlc, plot_hist, plot_line, ChartOptions, SignalEvalForm,
};

/// Render financial chart PNGs from OHLC CSV data.
#[derive(Parser, Debug)]
#[command(name = "fincharts", version, about)]
struct Args {
    /// OHLC CSV file: open/high/low/close plus optional time, volume and
    /// indicator columns
    input: PathBuf,

    /// Signal CSV with kind,index,price rows (kind is BUY or SELL)
    #[arg(long)]
    signals: Option<PathBuf>,

    /// Pattern CSV with name,start,stop rows
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Indicator columns to overlay, comma separated
    /// (default: every indicator column in the file)
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Directory for the rendered PNG files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Draw trades as arrows instead of rectangles
    #[arg(long)]
    arrows: bool,

    /// Gradient fill under the line chart series
    #[arg(long)]
    gradient: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let frame = load_ohlc_csv(&args.input)?;
    info!("loaded {} rows from '{}'", frame.len(), args.input.display());

    let signals = match &args.signals {
        Some(path) => load_signals_csv(path)?,
        None => Vec::new(),
    };
    let patterns = match &args.patterns {
        Some(path) => load_patterns_csv(path)?,
        None => Vec::new(),
    };
    info!("{} signals, {} patterns", signals.len(), patterns.len());

    let stem = args
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let output_file = |suffix: &str| {
        args.output_dir
            .join(format!("{stem}_{suffix}.png"))
            .to_string_lossy()
            .into_owned()
    };

    let columns = args.columns.unwrap_or_else(|| frame.indicator_names());

    let mut ohlc_options = ChartOptions {
        name: Some(stem.clone()),
        ..Default::default()
    };
    if args.arrows {
        ohlc_options.signal_evaluation_form = SignalEvalForm::Arrow;
    }

    plot_candlestick(
        &frame,
        &signals,
        &patterns,
        Some(&columns),
        &ohlc_options,
        &output_file("candlestick"),
    )?;
    plot_filled_ohlc(
        &frame,
        &signals,
        &patterns,
        Some(&columns),
        &ohlc_options,
        &output_file("filled_ohlc"),
    )?;

    let line_options = ChartOptions {
        title: Some("Close".to_string()),
        gradient_fill: args.gradient,
        ..Default::default()
    };
    let mut line_columns = vec!["close".to_string()];
    line_columns.extend(columns.iter().cloned());
    plot_line(&frame, Some(&line_columns), &line_options, &output_file("line"))?;

    if let Some(diffs) = column_diffs(&frame, "close") {
        if !diffs.is_empty() {
            let hist_options = ChartOptions {
                title: Some("Close-to-close changes".to_string()),
                x_label: Some("Change".to_string()),
                y_label: Some("Count".to_string()),
                ..Default::default()
            };
            plot_hist(
                &diffs,
                DEFAULT_HIST_BINS,
                false,
                Some(0.0),
                &hist_options,
                &output_file("returns_hist"),
            )?;
        }
    }

    if !patterns.is_empty() {
        let names: Vec<String> = patterns.iter().map(|p| p.name.clone()).collect();
        let bar_options = ChartOptions {
            title: Some("Pattern occurrences".to_string()),
            x_label: Some("Count".to_string()),
            ..Default::default()
        };
        plot_bar(&names, &bar_options, &output_file("patterns_bar"))?;
    }

    Ok(())
}

// src/main.rs
