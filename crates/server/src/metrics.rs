use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder};

// Prometheus metrics (default registry)
pub static HERO_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hero_server_operations_total",
        "Hero operations handled, by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register hero_operations_total")
});

pub static HERO_STORE_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "hero_server_store_size",
        "Heroes currently held in the store"
    )
    .expect("register hero_store_size")
});

pub fn record(op: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    HERO_OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
}

pub fn record_operation<T, E>(op: &str, res: &Result<T, E>) {
    record(op, res.is_ok());
}

pub fn set_store_size(len: usize) {
    HERO_STORE_SIZE.set(i64::try_from(len).unwrap_or(i64::MAX));
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
