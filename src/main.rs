#![forbid(unsafe_code)]
//! # textradar CLI
//!
//! Command-line interface for the `textradar` crate: analyze one web
//! page or CSV file for topical categories and sentiment, optionally
//! rendering a word cloud and a category bar chart.
//!
//! ## Example
//! ```bash
//! cargo run --release -- https://www.tagesschau.de --export-format json
//! ```
//!
//! Run without a source argument for the interactive prompt flow.
//! See `--help` for all available options.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{info, warn};
use textradar::{
    AnalysisOptions, AnalysisReport, ExportFormat, LexiconModel, Source, fetch_raw_text,
    load_stopwords, normalize, run_analysis,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Web URL (http:// or https://) or CSV file to analyze.
    /// Prompts interactively when omitted.
    source: Option<String>,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<String>,

    /// Skip the category keyword analysis
    #[arg(long, default_value_t = false)]
    no_categories: bool,

    /// Skip the sentiment analysis
    #[arg(long, default_value_t = false)]
    no_sentiment: bool,

    /// Skip rendering the word cloud and category chart
    #[arg(long, default_value_t = false)]
    no_charts: bool,

    /// Additionally export the results (txt, csv, json)
    #[arg(long)]
    export_format: Option<ExportFormat>,

    /// Directory for charts and exports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let interactive = cli.source.is_none();
    let (source, options) = match &cli.source {
        Some(raw) => (
            Source::detect(raw),
            AnalysisOptions {
                categories: !cli.no_categories,
                sentiment: !cli.no_sentiment,
                charts: !cli.no_charts,
                export_format: cli.export_format,
                out_dir: cli.out_dir.clone(),
            },
        ),
        None => (
            prompt_source(),
            AnalysisOptions {
                categories: prompt_bool("Kategorienanalyse?"),
                sentiment: prompt_bool("Sentiment-Analyse?"),
                charts: prompt_bool("Visualisierungen?"),
                export_format: cli.export_format,
                out_dir: cli.out_dir.clone(),
            },
        ),
    };

    let stopwords = load_stopwords(cli.stopwords.as_deref().map(Path::new));
    let raw = fetch_raw_text(&source);
    if let Some(guess) = whatlang::detect(&raw) {
        info!(
            "detected language {:?} ({:.0}% confidence)",
            guess.lang(),
            guess.confidence() * 100.0
        );
        if guess.lang() != whatlang::Lang::Deu {
            warn!(
                "stopword corpus and sentiment lexicon are German; results for {:?} text will be rough",
                guess.lang()
            );
        }
    }
    let words = normalize(&raw, &stopwords);
    info!("{} tokens after filtering", words.len());

    let report = run_analysis(&words, &LexiconModel, &options);
    print_report(&report);

    if interactive {
        prompt_line("\nAnalyse abgeschlossen. Beenden mit Enter.");
    }
}

/// Console presentation. Zero-scoring categories are filtered here,
/// not in the scorer.
fn print_report(report: &AnalysisReport) {
    if let Some(scores) = &report.category_scores {
        println!("\nKATEGORIEN:");
        for score in scores.iter().filter(|s| s.hits > 0) {
            println!(" - {}: {}", score.name, score.hits);
        }
    }
    if let Some(sentiment) = &report.sentiment {
        println!("\nSENTIMENT:");
        println!("{sentiment}");
    }
    for artifact in &report.artifacts {
        println!("Gespeichert unter: {}", artifact.display());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt} ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        // closed stdin would otherwise spin the prompt loop forever
        Ok(0) | Err(_) => process::exit(1),
        Ok(_) => line.trim().to_string(),
    }
}

fn prompt_bool(question: &str) -> bool {
    prompt_line(&format!("{question} (j/n):"))
        .to_lowercase()
        .starts_with('j')
}

/// Source selection loop: re-prompts until a well-formed URL or an
/// existing CSV file is given.
fn prompt_source() -> Source {
    loop {
        match prompt_line("\n1=Webseite, 2=CSV:").as_str() {
            "1" => {
                let url = prompt_line("Web-URL (Format: https://www.abc.de):");
                if url.starts_with("http://") || url.starts_with("https://") {
                    return Source::Web(url);
                }
                println!("Ungültige URL. Format: https://www.xyz.de zwingend");
            }
            "2" => {
                let path = prompt_line("CSV-Datei:");
                if Path::new(&path).exists() {
                    return Source::Csv(PathBuf::from(path));
                }
                println!("Datei nicht gefunden");
            }
            _ => {}
        }
    }
}
