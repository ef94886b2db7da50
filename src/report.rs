//! Presentation of measurement results: JSON records, comparison table and
//! comparison CSV.

use crate::harness::{Comparison, CompressionStats};
use serde::Serialize;
use std::fmt::Write as _;

pub const CSV_HEADER: &str =
    "Algorithm,Original Size (bytes),Compressed Size (bytes),Compression Time (s),Compression Ratio";

/// Statistics plus the display strings and download name handed to a caller.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport<'a> {
    #[serde(flatten)]
    pub stats: &'a CompressionStats,
    pub ratio_str: String,
    pub time_str: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_filename: Option<String>,
}

impl<'a> StatsReport<'a> {
    pub fn new(stats: &'a CompressionStats, download_filename: Option<String>) -> Self {
        Self {
            stats,
            ratio_str: stats.ratio_display(),
            time_str: stats.time_display(),
            download_filename,
        }
    }
}

pub fn csv_row(stats: &CompressionStats) -> String {
    format!(
        "{},{},{},{:.4},{}",
        stats.method,
        stats.original_size,
        stats.compressed_size,
        stats.elapsed_secs,
        stats.ratio_display()
    )
}

/// CSV document for one or more comparisons, header first.
pub fn comparison_csv<'a, I>(comparisons: I) -> String
where
    I: IntoIterator<Item = &'a Comparison>,
{
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for comparison in comparisons {
        for (_, measurement) in comparison.iter() {
            out.push_str(&csv_row(&measurement.stats));
            out.push('\n');
        }
    }
    out
}

/// Plain-text table with one row per stats record.
pub fn render_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a CompressionStats>,
{
    let header = ["Algorithm", "Original Size", "Compressed Size", "Compression Time", "Compression Ratio"];
    let body: Vec<[String; 5]> = rows
        .into_iter()
        .map(|s| {
            [
                s.method.clone(),
                format!("{} bytes", s.original_size),
                format!("{} bytes", s.compressed_size),
                s.time_display(),
                s.ratio_display(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    };

    push_row(&header);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&rule.iter().map(String::as_str).collect::<Vec<_>>());
    for row in &body {
        push_row(&row.iter().map(String::as_str).collect::<Vec<_>>());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenchConfig, Method};
    use crate::harness::compare;
    use std::time::Duration;

    fn sample_stats() -> CompressionStats {
        CompressionStats::new(Method::Lzw, 1000, 400, Duration::from_millis(5))
    }

    #[test]
    fn test_csv_row() {
        assert_eq!(csv_row(&sample_stats()), "LZW (Existing),1000,400,0.0050,2.50:1");
    }

    #[test]
    fn test_comparison_csv() {
        let comparison = compare("a,b\n1,2\n1,2\n", &BenchConfig::default()).unwrap();
        let csv = comparison_csv([&comparison]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("LZW (Existing),12,"));
        assert!(lines[2].starts_with("Z-Standard (Proposed),12,"));
    }

    #[test]
    fn test_render_table() {
        let stats = sample_stats();
        let table = render_table([&stats]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Algorithm"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("1000 bytes"));
        assert!(lines[2].ends_with("2.50:1"));
    }

    #[test]
    fn test_stats_report_json() {
        let stats = sample_stats();
        let report = StatsReport::new(&stats, Some("data.lzw".to_string()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["method"], "LZW (Existing)");
        assert_eq!(json["ratio_str"], "2.50:1");
        assert_eq!(json["time_str"], "0.0050 s");
        assert_eq!(json["download_filename"], "data.lzw");

        let bare = serde_json::to_value(StatsReport::new(&stats, None)).unwrap();
        assert!(bare.get("download_filename").is_none());
    }
}
