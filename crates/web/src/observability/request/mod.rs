//! Request-level logging and request IDs.

mod request_ids;
mod spans;

use std::time::Instant;

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Assigns a request id, wraps the request in an `http.request` span and logs
/// its outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold_ms: u64,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold_ms: u64) -> Self {
        Self {
            slow_request_threshold_ms,
        }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let route = spans::route_name(&path);
        let remote_addr = req.remote_addr().to_string();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            route = %route,
            path = %path,
            remote_addr = %remote_addr,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let status = request_ids::response_status_or_ok(res.status_code);
        let duration_ms = started.elapsed().as_millis();
        let threshold_ms = u128::from(self.slow_request_threshold_ms);

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(
                    status = status.as_u16(),
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    "server error response"
                );
            } else if status.is_client_error() {
                warn!(
                    status = status.as_u16(),
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    "client error response"
                );
            }

            if duration_ms > threshold_ms {
                warn!(
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    duration_ms,
                    threshold_ms,
                    "slow request detected"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(RequestLogging::new(1_000))
                .push(Router::with_path("ping").get(ok)),
        )
    }

    #[tokio::test]
    async fn generates_a_request_id() {
        let res = TestClient::get("http://example.com/ping")
            .send(&service())
            .await;

        let header = res
            .headers()
            .get(request_ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        assert!(header.is_some_and(|id| uuid::Uuid::parse_str(&id).is_ok()));
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/ping")
            .add_header(request_ids::REQUEST_ID_HEADER, "req-123", true)
            .send(&service())
            .await;

        assert_eq!(
            res.headers()
                .get(request_ids::REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("req-123")
        );
    }
}
