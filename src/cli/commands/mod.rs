//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each query handler receives the stores as `&dyn StudentDao` /
//! `&dyn CourseDao`; it never sees the concrete in-memory types. Handlers:
//! 1. Run one store operation
//! 2. Print the result as text or JSON
//!
//! Empty results are not errors. `get` prints `not found` (or `null`) and
//! `find` prints nothing (or `[]`).

mod check;
mod completion;
mod courses;
mod students;

pub use check::check;
pub use completion::completion;
pub use courses::courses;
pub use students::students;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::args::Command;
use super::Context;
use crate::fixture::Fixture;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Completion { shell } => completion(shell, &mut std::io::stdout()),
        Command::Check => check(ctx, &load_fixture(ctx)?),
        Command::Students { action } => {
            let fixture = load_fixture(ctx)?;
            students(ctx, &fixture.students, action)
        }
        Command::Courses { action } => {
            let fixture = load_fixture(ctx)?;
            courses(ctx, &fixture.courses, &fixture.students, action)
        }
    }
}

/// Load the fixture named by `--data` or the config file.
fn load_fixture(ctx: &Context) -> Result<Fixture> {
    let path = ctx.data.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No fixture file given. Pass --data <FILE> or set data_file in ~/.rollbook/config.toml"
        )
    })?;

    output::debug(format!("loading fixture {}", path.display()), ctx.verbosity);
    let fixture = Fixture::load(path).context("Failed to load fixture")?;

    // Query commands mention load problems once; `check` lists them itself.
    if !fixture.warnings.is_empty() {
        output::debug(
            format!("{} fixture warning(s); run `rollbook check`", fixture.warnings.len()),
            ctx.verbosity,
        );
    }
    Ok(fixture)
}

/// Print a single lookup result.
fn print_one<T: Serialize>(
    ctx: &Context,
    found: Option<&T>,
    format: impl Fn(&T) -> String,
) -> Result<()> {
    if ctx.json {
        output::json(&found)?;
    } else {
        match found {
            Some(value) => println!("{}", format(value)),
            None => println!("not found"),
        }
    }
    Ok(())
}

/// Print a list of results, one per line.
fn print_many<T: Serialize>(
    ctx: &Context,
    found: &[&T],
    format: impl Fn(&T) -> String,
) -> Result<()> {
    if ctx.json {
        output::json(found)?;
    } else {
        for value in found.iter().copied() {
            println!("{}", format(value));
        }
    }
    Ok(())
}
