//! HTTP front end. Every request resolves against `stable`.

pub mod routes;

pub use routes::create_router;

use crate::adapters::AptVenv;
use crate::config::ServiceConfig;
use crate::core::resolver::Resolver;
use crate::utils::error::Result;
use std::sync::Arc;

/// Bind to the configured address and serve until the process is stopped.
pub async fn serve(config: &ServiceConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let resolver = Arc::new(Resolver::new(AptVenv::new(config.tool.program.clone())));
    let app = create_router(resolver);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Serving dependency API on http://{} (tool: {})",
        listener.local_addr()?,
        config.tool.program
    );

    axum::serve(listener, app).await?;
    Ok(())
}
