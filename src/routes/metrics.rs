use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, TextEncoder};

use crate::metrics::REGISTRY;

pub async fn get() -> Response {
    let encoder = TextEncoder::new();

    let mut body = encode(&encoder, &REGISTRY.gather(), "service");
    body.push_str(&encode(&encoder, &prometheus::gather(), "default"));

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        body,
    )
        .into_response()
}

fn encode(encoder: &TextEncoder, families: &[MetricFamily], registry: &str) -> String {
    let mut buffer = Vec::new();
    if let Err(error) = encoder.encode(families, &mut buffer) {
        log::error!("Could not encode the {registry} metrics. Error: '{error}'.");
        return String::default();
    }

    String::from_utf8(buffer).unwrap_or_else(|error| {
        log::error!("The {registry} metrics are not valid UTF-8. Error: '{error}'.");
        String::default()
    })
}
