use clap::Args;
use serde::Serialize;
use tonebridge_palette::{LintIssue, build_palette, lint_palette};

use crate::error::{Result, ToneError};
use crate::inputs::{InputArgs, LoadedInputs, PolicyArgs};

/// Exit code for `check --strict` when any issue is found.
pub const LINT_FAILURE_EXIT_CODE: i32 = 2;

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Fail with exit code 2 when any issue is found.
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub hues: usize,
    pub issues: Vec<LintIssue>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for issue in &self.issues {
            out.push_str(&issue.to_string());
            out.push('\n');
        }
        out.push_str(&format!(
            "checked {} hues: {} issue{}\n",
            self.hues,
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" }
        ));
        out
    }
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut loaded = args.inputs.load()?;
    args.policy.apply(&mut loaded);
    let report = check_inputs(&loaded)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    strict_outcome(&report, args.strict)
}

pub fn check_inputs(loaded: &LoadedInputs) -> Result<CheckReport> {
    let derived = build_palette(&loaded.source, &loaded.defaults, loaded.policy)?;
    let issues = lint_palette(&derived);
    for issue in &issues {
        tracing::debug!(hue = issue.hue(), "{issue}");
    }
    Ok(CheckReport {
        hues: derived.len(),
        issues,
    })
}

fn strict_outcome(report: &CheckReport, strict: bool) -> Result<()> {
    if strict && !report.is_clean() {
        return Err(ToneError::exit(
            LINT_FAILURE_EXIT_CODE,
            format!("check failed: {} issue(s) found", report.issues.len()),
        ));
    }
    Ok(())
}
