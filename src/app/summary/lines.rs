use std::time::Duration;

use crate::run::RunReport;

/// Hundredths per unit for fixed-point output.
const PERCENT_DIVISOR: u64 = 100;
const SEPARATOR: &str =
    "----------------------------------------------------------------------";

pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    vec![
        SEPARATOR.to_owned(),
        format!("Test completed in {} ms", format_ms(report.duration)),
        format!("Total requests: {}", report.total_requests),
        format!("  -> Success: {}", report.successful_requests),
        format!("  -> Failure: {}", report.failed_requests),
        format!(
            "Performance: ~{} requests/second (RPS)",
            format_x100(report.rps_x100)
        ),
        format!(
            "Response times (ms): min {} | avg {} | max {}",
            format_ms(report.min_latency),
            format_ms(report.avg_latency),
            format_ms(report.max_latency)
        ),
    ]
}

pub(crate) fn report_json(report: &RunReport) -> serde_json::Value {
    serde_json::json!({
        "duration_ms": millis_f64(report.duration),
        "total_requests": report.total_requests,
        "successful_requests": report.successful_requests,
        "failed_requests": report.failed_requests,
        "requests_per_second": x100_f64(report.rps_x100),
        "latency_ms": {
            "min": millis_f64(report.min_latency),
            "avg": millis_f64(report.avg_latency),
            "max": millis_f64(report.max_latency)
        }
    })
}

/// Milliseconds with two decimals, truncated.
pub(super) fn format_ms(duration: Duration) -> String {
    let hundredths = duration
        .as_micros()
        .checked_div(10)
        .map_or(u64::MAX, |value| u64::try_from(value).unwrap_or(u64::MAX));
    format_x100(hundredths)
}

pub(super) fn format_x100(value: u64) -> String {
    format!(
        "{}.{:02}",
        value / PERCENT_DIVISOR,
        value % PERCENT_DIVISOR
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "JSON report exposes fractional milliseconds"
)]
fn millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

#[expect(
    clippy::float_arithmetic,
    reason = "JSON report exposes fractional requests per second"
)]
fn x100_f64(value: u64) -> f64 {
    value as f64 / 100.0
}
