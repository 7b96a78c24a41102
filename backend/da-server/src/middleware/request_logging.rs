use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};

/// Log one line per request: `METHOD path -> status (Nms)`
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    if status.is_server_error() {
        warn!("{} {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        info!("{} {} -> {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    }

    response
}
