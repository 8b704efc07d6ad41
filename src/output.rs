use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::types::{Project, ProjectSnapshot, StatusGroup};

/// Global output settings, fixed once from the command line.
static OUTPUT_FORMAT: AtomicU8 = AtomicU8::new(0);
static QUIET: AtomicBool = AtomicBool::new(false);

const SUBJECT_WIDTH: usize = 28;

pub fn set_format(format: OutputFormat) {
    let raw = match format {
        OutputFormat::Table => 0,
        OutputFormat::Json => 1,
        OutputFormat::Compact => 2,
    };
    OUTPUT_FORMAT.store(raw, Ordering::Relaxed);
}

pub fn format() -> OutputFormat {
    match OUTPUT_FORMAT.load(Ordering::Relaxed) {
        1 => OutputFormat::Json,
        2 => OutputFormat::Compact,
        _ => OutputFormat::Table,
    }
}

pub fn is_json_output() -> bool {
    matches!(format(), OutputFormat::Json)
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a success message (skipped when quiet, simple object in JSON mode)
pub fn print_message(message: &str) {
    if QUIET.load(Ordering::Relaxed) {
        return;
    }
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{}", message.green());
    }
}

/// Print an operator-facing failure on stderr, regardless of quiet mode.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "!!".red().bold(), message.red().bold());
}

/// Print the four lanes in the current output format.
pub fn print_board(snapshot: &ProjectSnapshot) {
    match format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(snapshot).unwrap_or_default());
        }
        OutputFormat::Compact => print!("{}", render_compact(snapshot)),
        OutputFormat::Table => println!("{}", render_board(snapshot)),
    }
}

/// Print one lane in the current output format.
pub fn print_lane(snapshot: &ProjectSnapshot, group: StatusGroup) {
    let projects = snapshot.group(group);
    match format() {
        OutputFormat::Json => {
            let lane = serde_json::json!({ group.label(): projects });
            println!("{}", serde_json::to_string_pretty(&lane).unwrap_or_default());
        }
        _ => {
            println!("{} ({})", group.colored(), projects.len());
            for project in projects {
                println!("  {}", compact_line(project));
            }
        }
    }
}

/// Render the board as one table with a column per lane.
///
/// Cards keep their lane order top to bottom.
pub fn render_board(snapshot: &ProjectSnapshot) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        snapshot
            .groups()
            .map(|(group, projects)| format!("{} ({})", group.colored(), projects.len())),
    );

    let depth = snapshot
        .groups()
        .map(|(_, projects)| projects.len())
        .max()
        .unwrap_or(0);

    for row in 0..depth {
        builder.push_record(
            snapshot
                .groups()
                .map(|(_, projects)| projects.get(row).map(card).unwrap_or_default()),
        );
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Render the board as one line per project under lane headings.
pub fn render_compact(snapshot: &ProjectSnapshot) -> String {
    let mut out = String::new();
    for (group, projects) in snapshot.groups() {
        out.push_str(&format!("{} ({})\n", group.title(), projects.len()));
        for project in projects {
            out.push_str(&format!("  {}\n", compact_line(project)));
        }
    }
    out
}

fn card(project: &Project) -> String {
    format!(
        "{}  {}\n{}\n{}",
        format!("#{}", project.id).bold(),
        project.deadline.bright_black(),
        truncate(&project.subject_name, SUBJECT_WIDTH),
        truncate(project.display_user(), SUBJECT_WIDTH).bright_black(),
    )
}

fn compact_line(project: &Project) -> String {
    let mut line = format!(
        "#{} {} ({})",
        project.id,
        project.subject_name,
        project.display_user()
    );
    if !project.deadline.is_empty() {
        line.push_str(&format!(" due {}", project.deadline));
    }
    line
}

/// Render the detail view of a single project.
pub fn render_project(project: &Project) -> String {
    let mut out = format!("{}\n", format!("Project #{}", project.id).bold());
    out.push_str(&format!("  {} {}\n", "Subject:".bright_black(), project.subject_name));
    out.push_str(&format!("  {} {}\n", "User:".bright_black(), project.display_user()));
    out.push_str(&format!(
        "  {} {}\n",
        "Status:".bright_black(),
        status_colored(&project.status)
    ));
    if let Some(tutor) = project.tutor_name.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(&format!("  {} {}\n", "Tutor:".bright_black(), tutor));
    }
    if !project.deadline.is_empty() {
        out.push_str(&format!("  {} {}\n", "Deadline:".bright_black(), project.deadline));
    }
    if let Some((price, date)) = project.last_offer() {
        out.push_str(&format!(
            "  {} {} by {}\n",
            "Offer:".bright_black(),
            price,
            date
        ));
    }
    if !project.details.trim().is_empty() {
        out.push_str(&format!("  {}\n", "Details:".bright_black()));
        for line in project.details.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out
}

/// Format a backend status tag with color
pub fn status_colored(status: &str) -> String {
    let lower = status.to_lowercase();
    if lower == "pending" {
        status.yellow().to_string()
    } else if lower.contains("offer") {
        status.blue().to_string()
    } else if lower.contains("ongoing") || lower.contains("accepted") || lower.contains("progress") {
        status.green().to_string()
    } else if lower.contains("denied") || lower.contains("reject") || lower.contains("cancel") {
        status.red().to_string()
    } else {
        status.bright_black().to_string()
    }
}

/// Truncate a string with ellipsis, counting characters rather than bytes
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
