//! Output formatters for ranked match reports

use crate::config::OutputFormat;
use crate::error::{MatcherError, Result};
use crate::output::report::{MatchReport, ReportStatus};
use crate::processing::matcher::MatchResult;
use colored::{Color, Colorize};
use std::fmt::Write;
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with colored eligibility verdicts
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_result(&self, rank: usize, result: &MatchResult) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();

        let verdict_color = if result.eligibility.is_eligible() {
            Color::Green
        } else {
            Color::Red
        };
        let name = result
            .source
            .clone()
            .unwrap_or_else(|| format!("Resume #{}", result.resume_index));

        writeln!(
            out,
            "{:>3}. {} {:>6.2}%  {}",
            rank,
            name,
            result.match_score,
            self.colorize(&result.eligibility.to_string(), verdict_color)
        )?;

        if self.detailed {
            let details = &result.details;
            writeln!(out, "       Skills: {:.2}%  Experience: {:.2}%  Role: {:.2}%",
                details.skill_match, details.experience_match, details.role_similarity)?;
            writeln!(out, "       Semantic similarity: {:.2}% (informational)", details.semantic_score)?;
            writeln!(out, "       Years of experience: {}", details.years_of_experience)?;
            if details.matched_skills.is_empty() {
                writeln!(out, "       Matched skills: none")?;
            } else {
                writeln!(out, "       Matched skills: {}", details.matched_skills.join(", "))?;
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let fmt_err = |e: std::fmt::Error| MatcherError::OutputFormatting(e.to_string());
        let mut out = String::new();

        out.push_str(&self.format_header("Resume Match Ranking"));
        writeln!(out, "Job: {}", report.job_source).map_err(fmt_err)?;
        writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")).map_err(fmt_err)?;

        match report.status {
            ReportStatus::NoInput => {
                writeln!(out, "\nNo job text, keywords or resumes to match.").map_err(fmt_err)?;
            }
            ReportStatus::Degraded => {
                let reason = report.reason.as_deref().unwrap_or("unknown error");
                writeln!(
                    out,
                    "\n{} {}",
                    self.colorize("No usable match signal:", Color::Yellow),
                    reason
                )
                .map_err(fmt_err)?;
            }
            ReportStatus::Ranked => {
                writeln!(
                    out,
                    "Eligible: {} of {}\n",
                    report.eligible_count,
                    report.results.len()
                )
                .map_err(fmt_err)?;

                for (i, result) in report.results.iter().enumerate() {
                    out.push_str(&self.format_result(i + 1, result).map_err(fmt_err)?);
                }
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
