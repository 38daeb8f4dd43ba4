use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use catalog::Dispatcher;
use chrono::Utc;
use tiny_http::{Request, Server};
use tracing::{info, warn};

use crate::config::{Overrides, ServerConfig};
use crate::router::route;

pub fn serve_command(overrides: &Overrides) -> Result<()> {
    let config = ServerConfig::load(overrides).context("failed to load configuration")?;
    if let Some(path) = &overrides.config {
        info!(path = %path.display(), "configuration loaded from file");
    }
    serve(&config)
}

/// Bind and handle requests one at a time until the listener closes.
pub fn serve(config: &ServerConfig) -> Result<()> {
    let dispatcher =
        Dispatcher::with_catalog(config.limits).context("failed to build the function registry")?;
    let addr = config.addr();
    let server = Server::http(&addr).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?;

    info!(
        %addr,
        functions = dispatcher.registry().len(),
        max_depth = config.limits.max_depth,
        max_len = config.limits.max_len,
        stack_size = config.limits.stack_size,
        "mathd listening"
    );

    for request in server.incoming_requests() {
        handle(&dispatcher, request);
    }
    Ok(())
}

fn handle(dispatcher: &Dispatcher, request: Request) {
    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = route(&method, &url, dispatcher, Utc::now());
    let status = reply.status;
    if let Err(e) = request.respond(reply.into_response()) {
        warn!(%method, %url, error = %e, "failed to write response");
    }

    info!(
        %method,
        %url,
        status,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "request"
    );
}
