//! HTTP server setup and routing.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use weft::{Scope, Template};

use crate::context::{AppConfig, AppContext, SharedContext};
use crate::error::{Error, Result};
use crate::pages::{IndexContext, SiteChrome, TaskListContext};

/// Add-task form payload.
#[derive(Deserialize)]
struct NewTask {
    description: String,
}

/// Index page: task count summary.
async fn index(State(ctx): State<SharedContext>) -> Response {
    let chrome = SiteChrome {
        title: ctx.title().to_string(),
    };
    let page = IndexContext {
        total_tasks: ctx.store().count(),
    };

    let mut scope = Scope::new();
    scope.push(&chrome);
    scope.push(&page);

    match render_page(&ctx.pages().index, &scope) {
        Ok(html) => html.into_response(),
        Err(err) => render_failure(err),
    }
}

/// Task list page.
async fn task_list(State(ctx): State<SharedContext>) -> Response {
    let chrome = SiteChrome {
        title: ctx.title().to_string(),
    };
    let page = TaskListContext {
        tasks: ctx.store().all(),
    };

    let mut scope = Scope::new();
    scope.push(&chrome);
    scope.push(&page);

    match render_page(&ctx.pages().tasks, &scope) {
        Ok(html) => html.into_response(),
        Err(err) => render_failure(err),
    }
}

/// Add a task from the form on the task list page.
async fn add_task(
    State(ctx): State<SharedContext>,
    Form(form): Form<NewTask>,
) -> impl IntoResponse {
    let task = ctx.store().add(form.description);
    info!(id = task.id, "Task added");
    Redirect::to("/tasks")
}

/// Render a page template against a request's scope.
fn render_page(template: &Template, scope: &Scope<'_>) -> Result<Html<String>> {
    Ok(Html(template.render(scope)?))
}

/// A render failure is a template/scope mismatch, not a transient fault:
/// surface it as a 500 rather than serving incomplete output.
fn render_failure(err: Error) -> Response {
    error!(error = %err, "Template rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
}

/// 404 handler
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Build the axum router
fn build_router(ctx: SharedContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tasks", get(task_list).post(add_task))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Run the application server.
///
/// This function blocks until the server is shut down.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let ctx = Arc::new(AppContext::new(&config));
    let router = build_router(ctx);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Application is running");

    axum::serve(listener, router)
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    Ok(())
}
