/// Fixed-point formatting with ties rounded away from zero, matching how the
/// simulator's web page printed metrics (`6.25` at one decimal is `6.3`).
///
/// Rounding works on the exact binary value, so `1.005` stays `1.00`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    // 1074 fractional digits hold any f64 exactly.
    let exact = format!("{:.1074}", magnitude);
    let tie = exact
        .split_once('.')
        .and_then(|(_, frac)| frac.as_bytes().get(decimals..))
        .and_then(|rest| rest.split_first())
        .is_some_and(|(first, tail)| *first == b'5' && tail.iter().all(|b| *b == b'0'));
    // std breaks exact ties to even; nudging one ulp up forces them away from zero.
    let rounded = if tie { magnitude.next_up() } else { magnitude };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, decimals, rounded)
}
