use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::data::load_summary;
use crate::timeline::{AxisRange, ItemSpan};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the day-summary JSON data file
    #[arg(long)]
    pub data_file: PathBuf,
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub timeline: TimelineSummary,
    pub sections: SectionSummary,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub items: usize,
    pub point_events: usize,
    pub commits: usize,
    pub meetings: usize,
    pub axis_start: i64,
    pub axis_end: i64,
    pub span_hours: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionSummary {
    pub stats: usize,
    pub workspaces: usize,
    pub agents: usize,
}

impl CheckArgs {
    /// Validate a data file and report what a render would produce,
    /// without writing anything.
    pub fn execute(&self) -> anyhow::Result<()> {
        let day = load_summary(&self.data_file)?;

        let format = self.format.unwrap_or_else(|| {
            if std::io::stdout().is_terminal() {
                OutputFormat::Pretty
            } else {
                OutputFormat::Text
            }
        });

        let mut report = CheckReport {
            timeline: TimelineSummary {
                items: day.timeline.len(),
                point_events: 0,
                commits: 0,
                meetings: 0,
                axis_start: 0,
                axis_end: 0,
                span_hours: 0.0,
            },
            sections: SectionSummary {
                stats: day.stats.len(),
                workspaces: day.workspaces.len(),
                agents: day.agents.len(),
            },
            warnings: vec![],
        };

        let mut spans = Vec::with_capacity(day.timeline.len());
        for item in &day.timeline {
            let span = ItemSpan::resolve(item)?;
            if span.end.is_none() {
                report.timeline.point_events += 1;
            }
            if let Some(end) = span.end
                && end < span.start
            {
                report
                    .warnings
                    .push(format!("{:?} ends before it starts", item.title));
            }
            if item.is_commit {
                report.timeline.commits += 1;
            }
            if item.is_meeting {
                report.timeline.meetings += 1;
            }
            spans.push(span);
        }

        let axis = AxisRange::from_spans(&spans);
        report.timeline.axis_start = axis.start;
        report.timeline.axis_end = axis.end;
        report.timeline.span_hours = axis.span();

        match format {
            OutputFormat::Pretty => Self::print_pretty(&report),
            OutputFormat::Text => Self::print_text(&report),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }

    fn print_pretty(report: &CheckReport) {
        println!("=== Day Data Check ===\n");

        println!(
            "Timeline: {} items ({} point events, {} commits, {} meetings)",
            report.timeline.items,
            report.timeline.point_events,
            report.timeline.commits,
            report.timeline.meetings
        );
        println!(
            "Axis: {:02}:00 to {:02}:00  ({} hours)",
            report.timeline.axis_start, report.timeline.axis_end, report.timeline.span_hours
        );

        println!(
            "\nSections: {} stats, {} workspaces, {} agents",
            report.sections.stats, report.sections.workspaces, report.sections.agents
        );

        if report.warnings.is_empty() {
            println!("\nNo warnings.");
        } else {
            println!();
            for warning in &report.warnings {
                println!("warning: {warning}");
            }
        }
    }

    fn print_text(report: &CheckReport) {
        println!("daymap-check");
        println!(
            "timeline  items={}  point-events={}  commits={}  meetings={}",
            report.timeline.items,
            report.timeline.point_events,
            report.timeline.commits,
            report.timeline.meetings
        );
        println!(
            "axis  start={}  end={}  span={}",
            report.timeline.axis_start, report.timeline.axis_end, report.timeline.span_hours
        );
        println!(
            "sections  stats={}  workspaces={}  agents={}",
            report.sections.stats, report.sections.workspaces, report.sections.agents
        );
        for warning in &report.warnings {
            println!("warning  {warning}");
        }
    }
}
