//! Chart artifacts: word-frequency cloud and category bar chart.
//!
//! Charts are built as SVG in-process, written as-is, and additionally
//! rasterized to PNG. The SVG stays complete even on systems without
//! fonts, where the PNG would lack glyphs.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::categories::{CATEGORIES, CategoryScore};
use crate::sort_map_to_vec;

const CANVAS_WIDTH: u32 = 1200;
const CANVAS_HEIGHT: u32 = 600;

/// Cap on rendered cloud words; everything below rank 200 is noise.
const MAX_CLOUD_WORDS: usize = 200;
const MIN_FONT: f32 = 14.0;
const MAX_FONT: f32 = 72.0;

const PALETTE: [&str; 10] = [
    "#4C72B0", "#DD8452", "#55A868", "#C44E52", "#8172B3", "#937860", "#DA8BC3", "#8C8C8C",
    "#CCB974", "#64B5CD",
];

/// Renders the word cloud for a frequency map and writes
/// `wolkendiagramm.svg` / `wolkendiagramm.png` into `out_dir`.
pub fn render_word_cloud(frequency: &HashMap<String, u32>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let svg = word_cloud_svg(frequency);
    write_chart(&svg, out_dir, "wolkendiagramm")
}

/// Renders the category bar chart and writes `kategorien.svg` /
/// `kategorien.png` into `out_dir`. Scores must be in table order, as
/// produced by [`crate::score_categories`].
pub fn render_category_chart(scores: &[CategoryScore], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let svg = category_chart_svg(scores);
    write_chart(&svg, out_dir, "kategorien")
}

fn write_chart(svg: &str, out_dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let svg_path = out_dir.join(format!("{stem}.svg"));
    fs::write(&svg_path, svg).with_context(|| format!("write {}", svg_path.display()))?;
    let png_path = out_dir.join(format!("{stem}.png"));
    rasterize(svg, &png_path)?;
    info!("chart written to {} and {}", svg_path.display(), png_path.display());
    Ok(vec![svg_path, png_path])
}

fn rasterize(svg: &str, path: &Path) -> Result<()> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_str(svg, &options).context("parse chart SVG")?;
    let mut pixmap =
        Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT).context("allocate chart pixmap")?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    let img = image::RgbaImage::from_raw(CANVAS_WIDTH, CANVAS_HEIGHT, pixmap.data().to_vec())
        .context("convert pixmap to image buffer")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn svg_open(out: &mut String) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_WIDTH}\" \
         height=\"{CANVAS_HEIGHT}\" viewBox=\"0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>"
    );
}

/// Greedy row layout: words ranked by frequency, font size scaled by
/// the square root of the relative count, rows centered horizontally.
fn word_cloud_svg(frequency: &HashMap<String, u32>) -> String {
    let ranked = sort_map_to_vec(frequency.clone());
    let top = &ranked[..ranked.len().min(MAX_CLOUD_WORDS)];

    let mut out = String::new();
    svg_open(&mut out);

    let margin = 40.0_f32;
    let usable_width = CANVAS_WIDTH as f32 - 2.0 * margin;
    let usable_height = CANVAS_HEIGHT as f32 - 2.0 * margin;
    let max_count = top.first().map(|(_, n)| *n).unwrap_or(1).max(1) as f32;

    // (word, font size, advance width) grouped into rows
    let mut rows: Vec<Vec<(&str, f32, f32)>> = Vec::new();
    let mut row: Vec<(&str, f32, f32)> = Vec::new();
    let mut row_width = 0.0_f32;
    let mut total_height = 0.0_f32;

    for (word, count) in top {
        let size = MIN_FONT + (MAX_FONT - MIN_FONT) * (*count as f32 / max_count).sqrt();
        let advance = 0.6 * size * word.chars().count() as f32 + 0.4 * size;
        if !row.is_empty() && row_width + advance > usable_width {
            let row_height = row_height_of(&row);
            if total_height + row_height > usable_height {
                break;
            }
            total_height += row_height;
            rows.push(std::mem::take(&mut row));
            row_width = 0.0;
        }
        row.push((word.as_str(), size, advance));
        row_width += advance;
    }
    if !row.is_empty() && total_height + row_height_of(&row) <= usable_height {
        total_height += row_height_of(&row);
        rows.push(row);
    }

    // center the block vertically, each row horizontally
    let mut y = margin + (usable_height - total_height) / 2.0;
    let mut color_index = 0usize;
    for row in &rows {
        let row_height = row_height_of(row);
        let baseline = y + row_height * 0.8;
        let width: f32 = row.iter().map(|(_, _, advance)| advance).sum();
        let mut x = margin + (usable_width - width) / 2.0;
        for (word, size, advance) in row {
            let color = PALETTE[color_index % PALETTE.len()];
            color_index += 1;
            let _ = write!(
                out,
                "<text x=\"{x:.1}\" y=\"{baseline:.1}\" font-family=\"sans-serif\" \
                 font-size=\"{size:.1}\" fill=\"{color}\">{word}</text>"
            );
            x += advance;
        }
        y += row_height;
    }

    out.push_str("</svg>");
    out
}

fn row_height_of(row: &[(&str, f32, f32)]) -> f32 {
    row.iter().map(|(_, size, _)| *size).fold(0.0, f32::max) * 1.25
}

/// One bar per category in table order, category colors, hit counts
/// above non-zero bars, rotated x labels.
fn category_chart_svg(scores: &[CategoryScore]) -> String {
    let mut out = String::new();
    svg_open(&mut out);

    let left = 70.0_f32;
    let top = 60.0_f32;
    let plot_width = CANVAS_WIDTH as f32 - left - 30.0;
    let plot_height = CANVAS_HEIGHT as f32 - top - 150.0;
    let base = top + plot_height;

    let max_hits = scores.iter().map(|s| s.hits).max().unwrap_or(0).max(1);
    let step = max_hits.div_ceil(4);
    let axis_top_value = step * 4;
    let scale = plot_height / axis_top_value as f32;

    let _ = write!(
        out,
        "<text x=\"{:.1}\" y=\"36\" font-family=\"sans-serif\" font-size=\"24\" \
         text-anchor=\"middle\">Kategorien</text>",
        CANVAS_WIDTH as f32 / 2.0
    );
    let _ = write!(
        out,
        "<text x=\"20\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"16\" \
         text-anchor=\"middle\" transform=\"rotate(-90 20 {:.1})\">Treffer</text>",
        top + plot_height / 2.0,
        top + plot_height / 2.0
    );

    // gridlines with value labels
    for i in 0..=4u32 {
        let value = i * step;
        let y = base - value as f32 * scale;
        let _ = write!(
            out,
            "<line x1=\"{left:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" \
             stroke=\"#dddddd\" stroke-width=\"1\"/>\
             <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"13\" \
             text-anchor=\"end\">{value}</text>",
            left + plot_width,
            left - 8.0,
            y + 4.0
        );
    }

    let slot = plot_width / scores.len().max(1) as f32;
    let bar_width = slot * 0.8;
    for (i, (score, category)) in scores.iter().zip(CATEGORIES).enumerate() {
        let color = category.color;
        let x = left + i as f32 * slot + slot * 0.1;
        let height = score.hits as f32 * scale;
        let y = base - height;
        let center = x + bar_width / 2.0;
        let _ = write!(
            out,
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" \
             height=\"{height:.1}\" fill=\"{color}\"/>"
        );
        if score.hits > 0 {
            let _ = write!(
                out,
                "<text x=\"{center:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" \
                 font-size=\"13\" text-anchor=\"middle\">{}</text>",
                y - 6.0,
                score.hits
            );
        }
        let _ = write!(
            out,
            "<text x=\"{center:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"14\" \
             text-anchor=\"end\" transform=\"rotate(-45 {center:.1} {:.1})\">{}</text>",
            base + 16.0,
            base + 16.0,
            score.name
        );
    }

    // axes
    let _ = write!(
        out,
        "<line x1=\"{left:.1}\" y1=\"{top:.1}\" x2=\"{left:.1}\" y2=\"{base:.1}\" \
         stroke=\"black\" stroke-width=\"1\"/>\
         <line x1=\"{left:.1}\" y1=\"{base:.1}\" x2=\"{:.1}\" y2=\"{base:.1}\" \
         stroke=\"black\" stroke-width=\"1\"/>",
        left + plot_width
    );

    out.push_str("</svg>");
    out
}
