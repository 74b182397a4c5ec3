//! check command - Report what a fixture contains

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::fixture::Fixture;
use crate::store::{CourseDao, StudentDao};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct CheckReport {
    students: usize,
    courses: usize,
    warnings: Vec<String>,
}

/// Print student and course counts plus every load warning.
pub fn check(ctx: &Context, fixture: &Fixture) -> Result<()> {
    let report = CheckReport {
        students: fixture.students.len(),
        courses: fixture.courses.len(),
        warnings: fixture.warnings.iter().map(ToString::to_string).collect(),
    };

    if ctx.json {
        output::json(&report)?;
        return Ok(());
    }

    output::print(
        format!("{} students, {} courses", report.students, report.courses),
        ctx.verbosity,
    );
    if !report.warnings.is_empty() {
        output::warn(
            format!(
                "{} problem(s) found:\n{}",
                report.warnings.len(),
                output::format_list(&report.warnings, "  - ")
            ),
            ctx.verbosity,
        );
    }
    Ok(())
}
