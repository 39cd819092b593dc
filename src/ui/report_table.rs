//! Human-readable report: header box, metrics table and overall verdict.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::health::{Assessment, Severity, Snapshot, ThresholdSet};

use super::formatters::{format_bytes, format_local_time, pad_to_width};

const BOX_WIDTH: usize = 64;
const HEADER: [&str; 4] = ["Metric", "Value", "Status", "Threshold"];

struct Row {
    cells: [String; 4],
    severity: Option<Severity>,
}

fn status_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 CRITICAL",
        Severity::Warning => "⚠️  WARNING",
        Severity::Ok => "✅ OK",
    }
}

fn colorize(text: String, severity: Severity) -> String {
    match severity {
        Severity::Critical => text.red().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Ok => text.green().to_string(),
    }
}

fn box_line(text: &str) -> String {
    format!("║   {}║", pad_to_width(text, BOX_WIDTH - 3))
}

fn build_rows(snapshot: &Snapshot, thresholds: &ThresholdSet, assessment: &Assessment) -> Vec<Row> {
    let mut rows = Vec::new();

    rows.push(Row {
        cells: [
            "CPU Usage".to_string(),
            format!("{:.2}%", snapshot.cpu_percent()),
            status_label(assessment.cpu).to_string(),
            format!("< {:.0}%", thresholds.cpu_warning),
        ],
        severity: Some(assessment.cpu),
    });

    rows.push(Row {
        cells: [
            "Memory Usage".to_string(),
            format!(
                "{} / {} ({:.1}%)",
                format_bytes(snapshot.memory_used()),
                format_bytes(snapshot.memory_total()),
                snapshot.memory_percent()
            ),
            status_label(assessment.memory).to_string(),
            format!("< {:.0}%", thresholds.mem_warning),
        ],
        severity: Some(assessment.memory),
    });

    for (disk, severity) in snapshot.disks().iter().zip(&assessment.disks) {
        rows.push(Row {
            cells: [
                format!("Disk {}", disk.mount_point),
                format!(
                    "{} / {} ({:.1}% used)",
                    format_bytes(disk.used_bytes),
                    format_bytes(disk.total_bytes),
                    disk.used_percent()
                ),
                status_label(*severity).to_string(),
                format!(">= {:.0}% free", thresholds.disk_warning),
            ],
            severity: Some(*severity),
        });
    }

    for process in snapshot.processes() {
        rows.push(Row {
            cells: [
                format!("Process {}", process.name),
                format!(
                    "pid {} ({:.1}% cpu, {:.1}% mem)",
                    process.pid, process.cpu_percent, process.memory_percent
                ),
                process.status.clone(),
                "-".to_string(),
            ],
            severity: None,
        });
    }

    rows
}

/// Render the full table report. With `color` off the output is plain text.
pub fn render_table(snapshot: &Snapshot, thresholds: &ThresholdSet, color: bool) -> String {
    let assessment = Assessment::evaluate(snapshot, thresholds);
    let rows = build_rows(snapshot, thresholds, &assessment);

    let mut widths = HEADER.map(|h| h.width());
    for row in &rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(BOX_WIDTH)));
    out.push_str(&box_line("SYSTEM HEALTH CHECK REPORT"));
    out.push('\n');
    out.push_str(&box_line(&format_local_time(snapshot.captured_at())));
    out.push('\n');
    out.push_str(&format!("╚{}╝\n", "═".repeat(BOX_WIDTH)));

    let header: Vec<String> = HEADER
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    let header = header.join("  ");
    out.push_str(header.trim_end());
    out.push('\n');
    let divider: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&divider.join("  "));
    out.push('\n');

    for row in rows {
        let mut cells: Vec<String> = row
            .cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_to_width(cell, w))
            .collect();
        if let (true, Some(severity)) = (color, row.severity) {
            cells[2] = colorize(cells[2].clone(), severity);
        }
        let line = cells.join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let overall = status_label(assessment.overall).to_string();
    let overall = if color {
        colorize(overall, assessment.overall)
    } else {
        overall
    };
    out.push_str(&format!("\nOverall Status: {}\n", overall));

    out
}
