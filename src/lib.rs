//! # textradar
//!
//! German-language text analysis: fetch text from a web page or CSV
//! file, normalize it into filtered tokens, count keyword hits per fixed
//! topical category, classify sentiment from a polarity score, and
//! render a word cloud plus a category bar chart.
//!
//! The library is a pipeline of small, independently testable pieces:
//! [`load_stopwords`] → [`normalize`] → [`score_categories`] /
//! [`classify_sentiment`], orchestrated by [`run_analysis`]. Source
//! reading, chart rendering, and result export are collaborators whose
//! failures degrade (logged, skipped, or sentinel results) — one run
//! never crashes over an unreachable page or a failed model.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use log::error;
use serde::Serialize;

pub mod categories;
pub mod export;
pub mod sentiment;
pub mod source;
pub mod stopwords;
pub mod tokenize;
pub mod viz;

pub use categories::{CATEGORIES, Category, CategoryScore, score_categories};
pub use export::{ExportFormat, export_report};
pub use sentiment::{
    LexiconModel, PolarityModel, SentimentLabel, SentimentOutcome, classify_sentiment,
};
pub use source::{Source, fetch_raw_text};
pub use stopwords::load_stopwords;
pub use tokenize::normalize;

/// Counts the occurrences of each word.
///
/// # Example
/// ```
/// use textradar::count_words;
/// let words = vec!["sonne".to_string(), "regen".to_string(), "sonne".to_string()];
/// let counted = count_words(&words);
/// assert_eq!(counted["sonne"], 2);
/// assert_eq!(counted["regen"], 1);
/// ```
pub fn count_words(words: &[String]) -> HashMap<String, u32> {
    let mut frequency: HashMap<String, u32> = HashMap::new();
    for word in words {
        *frequency.entry(word.to_owned()).or_insert(0) += 1;
    }
    frequency
}

/// Sorts a frequency map into a vector, most frequent first. Ties are
/// broken alphabetically so repeated runs produce identical output.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use textradar::sort_map_to_vec;
/// let mut map = HashMap::new();
/// map.insert("eins".to_string(), 1_u32);
/// map.insert("drei".to_string(), 3_u32);
/// let sorted = sort_map_to_vec(map);
/// assert_eq!(sorted[0], ("drei".to_string(), 3));
/// ```
pub fn sort_map_to_vec(frequency: HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut vec_sorted: Vec<(String, u32)> = frequency.into_iter().collect();
    vec_sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    vec_sorted
}

/// Feature toggles and output settings for one run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub categories: bool,
    pub sentiment: bool,
    pub charts: bool,
    pub export_format: Option<ExportFormat>,
    pub out_dir: PathBuf,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            categories: true,
            sentiment: true,
            charts: true,
            export_format: None,
            out_dir: PathBuf::from("."),
        }
    }
}

/// Everything one run produced. `artifacts` lists the chart and export
/// files actually written.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub token_count: usize,
    pub category_scores: Option<Vec<CategoryScore>>,
    pub sentiment: Option<SentimentOutcome>,
    pub artifacts: Vec<PathBuf>,
}

/// Runs the enabled analyses over a token sequence.
///
/// Pure orchestration: category scoring and sentiment run per their
/// toggles, charts render when requested (the category chart only if
/// category scoring ran), and the report is exported when a format is
/// set. Rendering and export failures are logged and skipped — the
/// report is still returned.
pub fn run_analysis(
    words: &[String],
    model: &dyn PolarityModel,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let mut report = AnalysisReport {
        token_count: words.len(),
        category_scores: None,
        sentiment: None,
        artifacts: Vec::new(),
    };

    if options.categories {
        report.category_scores = Some(score_categories(words));
    }
    if options.sentiment {
        report.sentiment = Some(classify_sentiment(words, model));
    }

    if options.charts {
        let frequency = count_words(words);
        match viz::render_word_cloud(&frequency, &options.out_dir) {
            Ok(paths) => report.artifacts.extend(paths),
            Err(e) => error!("word cloud rendering failed: {e:#}"),
        }
        if let Some(scores) = &report.category_scores {
            match viz::render_category_chart(scores, &options.out_dir) {
                Ok(paths) => report.artifacts.extend(paths),
                Err(e) => error!("category chart rendering failed: {e:#}"),
            }
        }
    }

    if let Some(format) = options.export_format {
        match export_report(&report, format, &options.out_dir) {
            Ok(path) => report.artifacts.push(path),
            Err(e) => error!("result export failed: {e:#}"),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_words_tallies_duplicates() {
        let words = vec![
            "one".to_string(),
            "two".to_string(),
            "two".to_string(),
            "three".to_string(),
            "three".to_string(),
            "three".to_string(),
        ];
        let counted = count_words(&words);
        let mut expected = HashMap::new();
        expected.insert("one".to_string(), 1_u32);
        expected.insert("two".to_string(), 2_u32);
        expected.insert("three".to_string(), 3_u32);
        assert_eq!(counted, expected);
    }

    #[test]
    fn sort_map_is_deterministic() {
        let mut map = HashMap::new();
        map.insert("beta".to_string(), 2_u32);
        map.insert("alpha".to_string(), 2_u32);
        map.insert("gamma".to_string(), 5_u32);
        let sorted = sort_map_to_vec(map);
        assert_eq!(
            sorted,
            vec![
                ("gamma".to_string(), 5),
                ("alpha".to_string(), 2),
                ("beta".to_string(), 2),
            ]
        );
    }

    #[test]
    fn disabled_toggles_leave_report_fields_empty() {
        let options = AnalysisOptions {
            categories: false,
            sentiment: false,
            charts: false,
            ..AnalysisOptions::default()
        };
        let words = vec!["wetter".to_string()];
        let report = run_analysis(&words, &LexiconModel, &options);
        assert_eq!(report.token_count, 1);
        assert!(report.category_scores.is_none());
        assert!(report.sentiment.is_none());
        assert!(report.artifacts.is_empty());
    }
}
