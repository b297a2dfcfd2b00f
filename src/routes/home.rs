//! Landing page handler.
//!
//! Renders a fixed document: the product name, a short description, and the
//! front-end tooling commands contributors run from the `ui/` workspace.

use axum::{extract::State, response::Html, Extension};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::RequestId;
use crate::state::AppState;

pub const SITE_NAME: &str = "TailWhale UI";

pub const DESCRIPTION: &str = "Next.js (TypeScript) app scaffolded with pnpm and Biome.";

/// A tooling command listed on the landing page. Documentation only; nothing
/// here is ever executed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolingCommand {
    pub label: &'static str,
    pub command: &'static str,
}

pub const TOOLING_COMMANDS: [ToolingCommand; 6] = [
    ToolingCommand { label: "dev", command: "pnpm dev" },
    ToolingCommand { label: "build", command: "pnpm build" },
    ToolingCommand { label: "start", command: "pnpm start" },
    ToolingCommand { label: "typecheck", command: "pnpm typecheck" },
    ToolingCommand { label: "lint", command: "pnpm lint" },
    ToolingCommand { label: "format", command: "pnpm format" },
];

/// Home page handler.
#[instrument(name = "home::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("site_name", SITE_NAME);
    context.insert("description", DESCRIPTION);
    context.insert("commands", &TOOLING_COMMANDS);

    let html = state.tera.render("home.html", &context).map_err(|e| {
        tracing::error!(request_id = %request_id.0, error = %e, "Failed to render landing page");
        AppError::from(e)
    })?;
    Ok(Html(html))
}
