use axum::body::Body;
use axum::http::Request;
use tower_http::trace::{DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info_span, Level, Span};
use uuid::Uuid;

/// One span per request, tagged with a fresh trace id; responses are logged
/// with their status and latency.
pub fn http_trace_layer() -> TraceLayer<HttpMakeClassifier, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        trace_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        user_agent = ?request.headers().get("user-agent"),
    )
}
