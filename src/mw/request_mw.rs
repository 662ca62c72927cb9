use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Wraps each request in a span keyed by a fresh request id and logs the
/// outcome once the response is produced.
pub async fn request_mw(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let start = Instant::now();

    async move {
        let response = next.run(req).await;
        info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
