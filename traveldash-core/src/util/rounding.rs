/// number of decimal places used for every derived display value.
pub const DISPLAY_DECIMALS: i32 = 2;

/// rounds a value to a fixed number of decimal places. ties are rounded
/// half away from zero (the behavior of [`f64::round`]).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// rounds a value to [`DISPLAY_DECIMALS`] places.
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}
