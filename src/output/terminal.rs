//! Terminal output formatting with colors.

use colored::Colorize;

use crate::benford::BenfordReport;
use crate::statistics::SummaryStats;

/// Format a Benford analysis for human-readable terminal output.
pub fn format_benford_report(report: &BenfordReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("benford analysis\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Observations: {} analyzed, {} dropped\n\n",
        report.analyzed, report.dropped
    ));

    output.push_str("  digit   observed   expected     chi2\n");
    for cell in &report.cells {
        output.push_str(&format!(
            "  {:>5}   {:>7.2}%   {:>7.2}%   {:>6.2}\n",
            cell.digit,
            cell.observed_freq * 100.0,
            cell.expected_freq * 100.0,
            cell.chi2_component
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "  Chi-square: {:.2} ({} df), p = {:.4}\n\n",
        report.chi_square, report.degrees_of_freedom, report.p_value
    ));

    if report.conforms(0.05) {
        output.push_str(&format!(
            "  {}\n",
            "\u{2713} Consistent with Benford's law".green().bold()
        ));
    } else {
        output.push_str(&format!(
            "  {}\n",
            "\u{26A0} Deviates from Benford's law".yellow().bold()
        ));
    }

    output.push_str(&sep);
    output.push('\n');
    output
}

/// Format a summary-statistics report for terminal output.
pub fn format_summary(stats: &SummaryStats) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("summary statistics\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Count:    {}\n", stats.count));
    output.push_str(&format!("  Total:    {:.2}\n", stats.sum));
    output.push_str(&format!("  Mean:     {:.4}\n", stats.mean));
    output.push_str(&format!("  Std dev:  {}\n", fmt_moment(stats.std_dev)));
    output.push_str(&format!("  Min:      {:.4}\n", stats.min));
    output.push_str(&format!("  Q1:       {:.4}\n", stats.q1));
    output.push_str(&format!("  Median:   {:.4}\n", stats.median));
    output.push_str(&format!("  Q3:       {:.4}\n", stats.q3));
    output.push_str(&format!("  Max:      {:.4}\n", stats.max));
    output.push_str(&format!("  Skewness: {}\n", fmt_moment(stats.skewness)));
    output.push_str(&format!("  Kurtosis: {}\n", fmt_moment(stats.kurtosis)));

    output.push_str(&sep);
    output.push('\n');
    output
}

fn fmt_moment(value: f64) -> String {
    if value.is_nan() {
        "undefined".dimmed().to_string()
    } else {
        format!("{value:.4}")
    }
}
