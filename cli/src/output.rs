//! Colored terminal rendering of scan reports.

use colored::Colorize;
use vigil_scanner::{MatchReason, ScanReport, ScanResult};

/// Print the startup banner.
pub fn print_banner() {
    let line = "=".repeat(64);
    println!("{}", line.magenta());
    println!("{}", "  VIGIL - hosted domain keyword scan".bold().cyan());
    println!("{}", line.magenta());
}

/// Print all flagged domains and the final summary line.
pub fn print_report(report: &ScanReport, max_keywords: usize) {
    for result in report.flagged() {
        println!("{}", render_match_block(result, max_keywords));
    }

    if report.flagged_count() > 0 {
        println!(
            "{}",
            format!(
                "Scan completed. Found {} matching domains ({} scanned).",
                report.flagged_count(),
                report.domains_scanned
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Scan completed. No matching domains ({} scanned).",
                report.domains_scanned
            )
            .yellow()
        );
    }
}

/// One flagged domain as a multi-line block.
fn render_match_block(result: &ScanResult, max_keywords: usize) -> String {
    let summary = result.summary(max_keywords);

    let reasons: Vec<String> = summary.shown.iter().map(render_reason).collect();
    let mut reason_line = reasons.join(", ");
    if summary.hidden() > 0 {
        reason_line.push_str(&format!(" {}", format!("(+{} more)", summary.hidden()).white()));
    }

    format!(
        "{}\n   {} {}\n   {} {}\n   {} {}\n   {} {}\n{}",
        "MATCH FOUND:".green().bold(),
        "Owner:".cyan(),
        result.record.owner.bold(),
        "Domain:".cyan(),
        result.record.domain.to_string().bold(),
        "Path:".cyan(),
        result.record.content_root.display().to_string().bold(),
        "Matches:".cyan(),
        reason_line,
        "-".repeat(64).white()
    )
}

/// One reason as `LABEL: 'keyword'` with category-specific detail.
fn render_reason(reason: &MatchReason) -> String {
    let label = match reason.category.label() {
        "DOMAIN" => "DOMAIN".red(),
        "TITLE" => "TITLE".yellow(),
        _ => "CONTENT".blue(),
    };

    let mut rendered = format!("{}: '{}'", label, reason.keyword.bold());
    if let Some(segment) = &reason.segment {
        rendered.push_str(&format!(" (~{segment})"));
    }
    if let Some(count) = reason.occurrences {
        rendered.push_str(&format!(" (x{count})"));
    }
    rendered
}
