/// Rent at or below which a city gets a perfect rent score.
pub const MIN_RENT: f64 = 300.0;
/// Rent at or above which a city gets a zero rent score.
pub const MAX_RENT: f64 = 4500.0;

/// Rounds to one decimal place using the exact decimal expansion of `value`.
///
/// Formatting picks the nearest one-decimal value of the binary double, so
/// `17.449999…` stays `17.4` even though `value * 10.0` would round up.
/// Exact ties (a fractional part of .25 or .75) go away from zero.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled = value.abs() * 10.0;
    let is_exact_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_exact_tie {
        // `scaled` is exact here: the tie has a short binary expansion.
        return (scaled.ceil() / 10.0).copysign(value);
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

/// Monthly one-bedroom rent after applying the live adjustment, in whole units.
pub fn live_rent(base_rent: f64, adjustment: f64) -> u32 {
    // Validation bounds `base_rent`, so the product always fits.
    (base_rent * adjustment).round() as u32
}

/// Cheaper rent scores higher, linearly between `MAX_RENT` (0) and
/// `MIN_RENT` (100), clamped outside that range.
pub fn rent_score(live_rent: u32) -> f64 {
    let scaled = (MAX_RENT - f64::from(live_rent)) / (MAX_RENT - MIN_RENT) * 100.0;
    round1(scaled.clamp(0.0, 100.0))
}

pub fn total_score(rent_score: f64, safety_index: f64, expat_index: f64) -> f64 {
    round1((rent_score + safety_index + expat_index) / 3.0)
}
