use crate::core::resolver::Resolver;
use crate::core::response::CondensedResponse;
use crate::domain::ports::PackageTool;
use crate::domain::release::DEFAULT_RELEASE;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

const HELP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Debian dependency resolver</title></head>
<body>
<h1>Debian dependency resolver</h1>
<p>Resolves the transitive dependencies of a Debian package in the <code>stable</code> release.</p>
<h2>Endpoints</h2>
<ul>
<li><code>GET /dependencies/&lt;package&gt;</code> resolve the latest version of a package</li>
<li><code>GET /dependencies/&lt;package&gt;/&lt;version&gt;</code> resolve a specific version</li>
</ul>
<h2>Response</h2>
<p>A JSON list of <code>{"product": ..., "version": ...}</code> objects, or
<code>{"error": ...}</code> when apt cannot satisfy the request.</p>
<h2>Examples</h2>
<ul>
<li><a href="/dependencies/debianutils">/dependencies/debianutils</a></li>
<li><a href="/dependencies/debianutils/4.8.6.1">/dependencies/debianutils/4.8.6.1</a></li>
</ul>
</body>
</html>
"#;

/// Create the application router
pub fn create_router<T: PackageTool + 'static>(resolver: Arc<Resolver<T>>) -> Router {
    Router::new()
        .route("/", get(help))
        .route("/dependencies/:package", get(dependencies::<T>))
        .route(
            "/dependencies/:package/:version",
            get(versioned_dependencies::<T>),
        )
        .fallback(not_found)
        .with_state(resolver)
}

async fn help() -> Html<&'static str> {
    Html(HELP_PAGE)
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(HELP_PAGE))
}

async fn dependencies<T: PackageTool + 'static>(
    State(resolver): State<Arc<Resolver<T>>>,
    Path(package): Path<String>,
) -> Response {
    resolve(resolver, package).await
}

async fn versioned_dependencies<T: PackageTool + 'static>(
    State(resolver): State<Arc<Resolver<T>>>,
    Path((package, version)): Path<(String, String)>,
) -> Response {
    resolve(resolver, format!("{}={}", package, version)).await
}

/// Resolution spawns external processes, so it runs on the blocking pool.
async fn resolve<T: PackageTool + 'static>(resolver: Arc<Resolver<T>>, input: String) -> Response {
    let task_input = input.clone();
    let joined =
        tokio::task::spawn_blocking(move || resolver.resolve(&task_input, DEFAULT_RELEASE)).await;

    match joined {
        Ok(Ok(result)) => Json(CondensedResponse::new(&result)).into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Request for '{}' failed: {}", input, e);
            (e.status_code(), Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            tracing::error!("Resolution task for '{}' panicked: {}", input, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}
