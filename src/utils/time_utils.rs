/// Monotonic clock that also works on wasm32.
pub type AppInstant = web_time::Instant;

/// Short human form of a duration: `850ms`, `2.4s`.
pub fn format_duration_ms(ms: u128) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration_ms(850), "850ms");
        assert_eq!(format_duration_ms(2400), "2.4s");
    }
}
