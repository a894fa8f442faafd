//! Output rendering and formatting

use crate::logging::log_event_with_tracing;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, ContentArrangement, Table};
use console::{Style, Term};
use std::io;
use sumcheck_events::{EventSink, VerifyEvent};
use sumcheck_types::{ColorChoice, ManifestSummary, VerificationResult};
use sumcheck_verify::RunReport;

const RULE: &str = "================================================";

/// Renders verification events to stdout as they arrive
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Suppress informational lines
    quiet: bool,
    /// Mirror every event into tracing
    mirror_events: bool,
    styles: Styles,
    /// Per-manifest rows for the totals table
    completed: Vec<(String, ManifestSummary)>,
}

struct Styles {
    banner: Style,
    ok: Style,
    fail: Style,
    warn: Style,
    plain: Style,
}

impl Styles {
    fn new(colors: bool) -> Self {
        let style = |s: Style| s.force_styling(colors);
        Self {
            banner: style(Style::new().cyan()),
            ok: style(Style::new().green()),
            fail: style(Style::new().red()),
            warn: style(Style::new().yellow()),
            plain: style(Style::new().white()),
        }
    }
}

impl OutputRenderer {
    /// Create new output renderer
    #[must_use]
    pub fn new(json_output: bool, quiet: bool, color_choice: ColorChoice) -> Self {
        let colors = !json_output && supports_color(color_choice);
        Self {
            json_output,
            quiet,
            mirror_events: false,
            styles: Styles::new(colors),
            completed: Vec::new(),
        }
    }

    /// Also log each event through tracing
    #[must_use]
    pub fn with_event_logging(mut self, enabled: bool) -> Self {
        self.mirror_events = enabled;
        self
    }

    /// Print the final report; only JSON mode prints anything here
    pub fn render_report(&self, report: &RunReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            println!("{json}");
        }
        Ok(())
    }

    fn render_event(&mut self, event: &VerifyEvent) {
        match event {
            VerifyEvent::DiscoveryStarted { .. } => {}
            VerifyEvent::NoManifestsFound { root, pattern } => {
                println!(
                    "{}",
                    self.styles.warn.apply_to(format!(
                        "No files matching '{pattern}' were found under {}",
                        root.display()
                    ))
                );
            }
            VerifyEvent::ManifestsDiscovered { count } => {
                if !self.quiet {
                    println!(
                        "{}",
                        self.styles
                            .banner
                            .apply_to(format!("Found {count} manifest file(s)"))
                    );
                    println!();
                }
            }
            VerifyEvent::ManifestStarted { path } => {
                let banner = &self.styles.banner;
                println!("{}", banner.apply_to(RULE));
                println!(
                    "{}",
                    banner.apply_to(format!("Processing: {}", path.display()))
                );
                println!("{}", banner.apply_to(RULE));
            }
            VerifyEvent::ManifestUnreadable { path, message } => {
                println!(
                    "{}",
                    self.styles
                        .fail
                        .apply_to(format!("Could not read {}: {message}", path.display()))
                );
                println!();
            }
            VerifyEvent::EntryVerified {
                file_name, result, ..
            } => self.render_entry(file_name, result),
            VerifyEvent::ManifestCompleted { name, summary, .. } => {
                self.render_summary(name, summary);
                self.completed.push((name.clone(), *summary));
            }
            VerifyEvent::RunCompleted { totals, .. } => {
                if self.completed.len() > 1 {
                    println!("{}", self.totals_table(totals));
                    println!();
                }
                if !self.quiet {
                    println!("{}", self.styles.banner.apply_to("Verification complete."));
                }
            }
        }
    }

    fn render_entry(&self, file_name: &str, result: &VerificationResult) {
        let s = &self.styles;
        match result {
            VerificationResult::Match => {
                println!("{}", s.ok.apply_to(format!("[OK]   {file_name}")));
            }
            VerificationResult::Mismatch { expected, actual } => {
                println!("{}", s.fail.apply_to(format!("[FAIL] {file_name}")));
                println!("{}", s.fail.apply_to(format!("  Expected: {expected}")));
                println!("{}", s.fail.apply_to(format!("  Actual  : {actual}")));
            }
            VerificationResult::NotFound => {
                println!("{}", s.warn.apply_to(format!("[NOT FOUND] {file_name}")));
            }
            VerificationResult::HashError { message } => {
                println!("{}", s.fail.apply_to(format!("[ERROR] {file_name}")));
                println!("{}", s.fail.apply_to(format!("  Cause   : {message}")));
            }
        }
    }

    fn render_summary(&self, name: &str, summary: &ManifestSummary) {
        let s = &self.styles;
        println!();
        println!("{}", s.banner.apply_to(format!("Summary for {name}:")));
        println!("{}", s.plain.apply_to(format!("  Total      : {}", summary.total)));
        println!("{}", s.ok.apply_to(format!("  Correct    : {}", summary.correct)));
        println!(
            "{}",
            s.fail.apply_to(format!("  Incorrect  : {}", summary.incorrect))
        );
        println!(
            "{}",
            s.warn.apply_to(format!("  Not found  : {}", summary.not_found))
        );
        println!("{}", s.fail.apply_to(format!("  Errors     : {}", summary.errors)));
        println!();
    }

    fn totals_table(&self, totals: &ManifestSummary) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Manifest").add_attribute(Attribute::Bold),
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new("Correct").add_attribute(Attribute::Bold),
            Cell::new("Incorrect").add_attribute(Attribute::Bold),
            Cell::new("Not found").add_attribute(Attribute::Bold),
            Cell::new("Errors").add_attribute(Attribute::Bold),
        ]);

        for (name, summary) in &self.completed {
            table.add_row(summary_row(Cell::new(name), summary));
        }
        table.add_row(summary_row(
            Cell::new("All manifests").add_attribute(Attribute::Bold),
            totals,
        ));

        table
    }
}

impl EventSink for OutputRenderer {
    fn send(&mut self, event: VerifyEvent) {
        if self.mirror_events {
            log_event_with_tracing(&event);
        }
        if !self.json_output {
            self.render_event(&event);
        }
    }
}

fn summary_row(label: Cell, summary: &ManifestSummary) -> Vec<Cell> {
    let count = |n: usize| Cell::new(n).set_alignment(CellAlignment::Right);
    vec![
        label,
        count(summary.total),
        count(summary.correct),
        count(summary.incorrect),
        count(summary.not_found),
        count(summary.errors),
    ]
}

/// Check if color output is supported
fn supports_color(color_choice: ColorChoice) -> bool {
    match color_choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => Term::stdout().features().colors_supported(),
    }
}
