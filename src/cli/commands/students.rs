//! students command - Query the student store

use anyhow::Result;

use super::{print_many, print_one};
use crate::cli::args::StudentAction;
use crate::cli::Context;
use crate::core::types::StudentId;
use crate::store::StudentDao;
use crate::ui::output;

/// Run a student query.
pub fn students(ctx: &Context, store: &dyn StudentDao, action: StudentAction) -> Result<()> {
    match action {
        StudentAction::List => {
            let all = store.find_all();
            print_many(ctx, &all.iter().collect::<Vec<_>>(), output::format_student)
        }
        StudentAction::Get { id } => {
            let found = store.find_by_id(StudentId::new(id));
            output::debug(
                format!("student {id}: {}", if found.is_some() { "hit" } else { "miss" }),
                ctx.verbosity,
            );
            print_one(ctx, found, output::format_student)
        }
        StudentAction::Find {
            email: Some(email), ..
        } => print_one(ctx, store.find_by_email(&email), output::format_student),
        StudentAction::Find {
            name: Some(name), ..
        } => print_many(ctx, &store.find_by_name(&name), output::format_student),
        StudentAction::Find { .. } => anyhow::bail!("either --name or --email is required"),
    }
}
