//! Body-mass index

/// Default rounding for reported BMI values
pub const BMI_DECIMALS: u32 = 2;

/// BMI in kg/m², rounded to two decimals
///
/// Returns `None` when either measurement is missing or non-finite, or when
/// the height is zero or negative.
#[must_use]
pub fn body_mass_index(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    body_mass_index_with_precision(weight_kg, height_cm, BMI_DECIMALS)
}

/// BMI in kg/m², rounded to `decimals` places
#[must_use]
pub fn body_mass_index_with_precision(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    decimals: u32,
) -> Option<f64> {
    let weight = weight_kg.filter(|w| w.is_finite())?;
    let height = height_cm.filter(|h| h.is_finite() && *h > 0.0)?;

    let metres = height / 100.0;
    Some(round_to(weight / (metres * metres), decimals))
}

fn round_to(value: f64, decimals: u32) -> f64 {
    // f64 carries ~15 significant digits
    let factor = 10f64.powi(decimals.min(15) as i32);
    (value * factor).round() / factor
}
