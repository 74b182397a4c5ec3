//! courses command - Query the course store

use anyhow::Result;

use super::{print_many, print_one};
use crate::cli::args::CourseAction;
use crate::cli::Context;
use crate::core::student::Student;
use crate::core::types::CourseId;
use crate::store::{dangling_roster_ids, resolve_roster, CourseDao, StudentDao};
use crate::ui::output;

/// Run a course query.
///
/// `students` is only read by `roster`, to resolve registered keys.
pub fn courses(
    ctx: &Context,
    store: &dyn CourseDao,
    students: &dyn StudentDao,
    action: CourseAction,
) -> Result<()> {
    match action {
        CourseAction::List => {
            let all = store.find_all();
            print_many(ctx, &all.iter().collect::<Vec<_>>(), output::format_course)
        }
        CourseAction::Get { id } => {
            print_one(ctx, store.find_by_id(CourseId::new(id)), output::format_course)
        }
        CourseAction::Find {
            date: Some(date), ..
        } => print_many(ctx, &store.find_by_date(date), output::format_course),
        CourseAction::Find {
            name: Some(name), ..
        } => print_many(ctx, &store.find_by_name(&name), output::format_course),
        CourseAction::Find { .. } => anyhow::bail!("either --name or --date is required"),
        CourseAction::Roster { id } => {
            let Some(course) = store.find_by_id(CourseId::new(id)) else {
                return print_one::<Student>(ctx, None, output::format_student);
            };
            for missing in dangling_roster_ids(course, students) {
                output::warn(
                    format!("course {} lists unknown student {}", course.id(), missing),
                    ctx.verbosity,
                );
            }
            print_many(ctx, &resolve_roster(course, students), output::format_student)
        }
    }
}
