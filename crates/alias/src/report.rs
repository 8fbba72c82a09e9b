use crate::{DemoError, DemoResult, Transcript};
use crate::registry::Demo;
use serde::Serialize;
use tracing::debug;

/// Output of one demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub demo: String,
    pub lines: Vec<String>,
    /// Set when the demo stopped on a fault; `lines` then holds what it
    /// printed before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One printed line per transcript line
    #[default]
    Text,
    /// A JSON array of `{demo, lines}` reports
    Json,
}

pub fn run_demo(demo: &'static Demo) -> DemoResult<Report> {
    debug!(demo = demo.name, "running demo");
    let mut out = Transcript::new();
    match (demo.run)(&mut out) {
        Ok(()) => Ok(Report {
            demo: demo.name.to_string(),
            lines: out.into_lines(),
            fault: None,
        }),
        Err(source) => Err(DemoError::Fault {
            demo: demo.name,
            partial: out.into_lines(),
            source,
        }),
    }
}

pub fn run_all(demos: &[&'static Demo]) -> DemoResult<Vec<Report>> {
    demos.iter().copied().map(run_demo).collect()
}

/// Runs `demos` in order and stops at the first fault. The faulting demo
/// still gets a report with its partial lines, and the fault is returned
/// alongside.
pub fn run_until_fault(demos: &[&'static Demo]) -> (Vec<Report>, Option<DemoError>) {
    let mut reports = Vec::with_capacity(demos.len());
    for &demo in demos {
        match run_demo(demo) {
            Ok(report) => reports.push(report),
            Err(e) => {
                if let DemoError::Fault {
                    demo,
                    partial,
                    source,
                } = &e
                {
                    reports.push(Report {
                        demo: demo.to_string(),
                        lines: partial.clone(),
                        fault: Some(source.to_string()),
                    });
                }
                return (reports, Some(e));
            }
        }
    }
    (reports, None)
}

pub fn render_text(reports: &[Report]) -> String {
    let mut text = String::new();
    for line in reports.iter().flat_map(|r| r.lines.iter()) {
        text.push_str(line);
        text.push('\n');
    }
    text
}

pub fn render_json(reports: &[Report]) -> DemoResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
