//! Result export: one timestamped file per run in txt, csv, or json.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::prelude::*;
use clap::ValueEnum;

use crate::AnalysisReport;
use crate::sentiment::SentimentOutcome;

/// Output format for result export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes the report to `<Y_m_d_H_M_S>_textradar_results.<ext>` in
/// `out_dir` and returns the path.
pub fn export_report(
    report: &AnalysisReport,
    format: ExportFormat,
    out_dir: &Path,
) -> Result<PathBuf> {
    let local: DateTime<Local> = Local::now();
    let filename = local
        .format(&format!(
            "%Y_%m_%d_%H_%M_%S_textradar_results.{}",
            format.extension()
        ))
        .to_string();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let path = out_dir.join(filename);

    match format {
        ExportFormat::Txt => fs::write(&path, render_txt(report))
            .with_context(|| format!("write {}", path.display()))?,
        ExportFormat::Json => {
            let json = serde_json::to_vec_pretty(report).context("serialize report")?;
            fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        }
        ExportFormat::Csv => write_csv(report, &path)?,
    }
    Ok(path)
}

fn render_txt(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Wörter: {}", report.token_count);
    if let Some(scores) = &report.category_scores {
        let _ = writeln!(out, "\nKATEGORIEN:");
        for score in scores {
            let _ = writeln!(out, " - {}: {}", score.name, score.hits);
        }
    }
    if let Some(sentiment) = &report.sentiment {
        let _ = writeln!(out, "\nSENTIMENT:\n{sentiment}");
    }
    out
}

fn write_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write {}", path.display()))?;
    writer.write_record(["section", "name", "value"])?;
    let token_count = report.token_count.to_string();
    writer.write_record(["words", "token_count", token_count.as_str()])?;
    if let Some(scores) = &report.category_scores {
        for score in scores {
            let hits = score.hits.to_string();
            writer.write_record(["category", score.name, hits.as_str()])?;
        }
    }
    if let Some(sentiment) = &report.sentiment {
        match sentiment {
            SentimentOutcome::Scored { label, score } => {
                let label = format!("{label:?}");
                writer.write_record(["sentiment", "label", label.as_str()])?;
                let score = format!("{score:.2}");
                writer.write_record(["sentiment", "score", score.as_str()])?;
            }
            SentimentOutcome::NoEligibleWords => {
                writer.write_record(["sentiment", "outcome", "no_eligible_words"])?;
            }
            SentimentOutcome::AnalysisFailed => {
                writer.write_record(["sentiment", "outcome", "analysis_failed"])?;
            }
        }
    }
    writer.flush().context("flush CSV export")?;
    Ok(())
}
