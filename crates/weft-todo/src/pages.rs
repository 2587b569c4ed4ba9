//! Page templates and their context types.
//!
//! Templates are composed here once, at startup, and held by the
//! application context for the life of the process. Each request handler
//! picks a page, builds a scope with [`SiteChrome`] pushed first and the
//! page-specific context second, and renders.

use weft::{Template, field};

use crate::store::Task;

/// Context shared by every page; the bottom frame of every scope.
pub struct SiteChrome {
    pub title: String,
}

/// Context of the index page.
pub struct IndexContext {
    pub total_tasks: usize,
}

/// Context of the task list page.
pub struct TaskListContext {
    pub tasks: Vec<Task>,
}

/// The application's compiled pages.
#[derive(Clone)]
pub struct Pages {
    /// `GET /` — task count summary.
    pub index: Template,
    /// `GET /tasks` — task list plus the add-task form.
    pub tasks: Template,
}

impl Pages {
    pub fn build() -> Self {
        let index = page_shell(
            Template::literal("Total tasks: ")
                .slot(field(|page: &IndexContext| &page.total_tasks))
                .text("."),
        );

        let row = Template::literal("<li>")
            .slot(field(|task: &Task| task.description.as_str()))
            .text("</li>");

        let tasks = page_shell(
            Template::literal("<ul>")
                .repeat(field(|page: &TaskListContext| page.tasks.as_slice()), row)
                .text("</ul>")
                .text(concat!(
                    "<form method=\"post\" action=\"/tasks\">",
                    "<input name=\"description\">",
                    "<button>Add</button>",
                    "</form>",
                )),
        );

        Self { index, tasks }
    }
}

/// Wrap a page body in the shared HTML shell. The title resolves from the
/// [`SiteChrome`] frame at the bottom of the scope.
fn page_shell(body: Template) -> Template {
    Template::concat([
        Template::literal("<html><head><title>")
            .slot(field(|chrome: &SiteChrome| chrome.title.as_str()))
            .text("</title></head><body>"),
        body,
        Template::literal("</body></html>"),
    ])
}
