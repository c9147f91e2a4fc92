//! Psychrometric and radiometric relations used to derive CONTAM inputs.
//!
//! All temperatures are absolute (K) and pressures in Pa.

/// Lower clamp for the saturation pressure curve fit [K]
pub const SATURATION_MIN_K: f64 = 203.0;

/// Upper clamp for the saturation pressure curve fit [K]
pub const SATURATION_MAX_K: f64 = 373.0;

/// Triple point of water; the curve fit switches from ice to liquid here [K]
pub const ICE_POINT_K: f64 = 273.16;

/// Ratio of molecular weights of water and dry air, adjusted by 1.0044
pub const MOLECULAR_WEIGHT_RATIO: f64 = 0.62472;

/// Reference temperature for the sky emissivity dew point term [K]
const SKY_EMISSIVITY_REFERENCE_K: f64 = 273.15;

/// Saturation vapour pressure [Pa] at temperature `temp_k` [K].
///
/// Curve fit from the 1985 ASHRAE Handbook of Fundamentals, chapter 6,
/// equations 3 (over ice) and 4 (over liquid water). Temperatures outside
/// 203-373 K are clamped to the fitted range.
pub fn saturation_pressure(temp_k: f64) -> f64 {
    let x = temp_k.clamp(SATURATION_MIN_K, SATURATION_MAX_K);

    let log_pressure = if x < ICE_POINT_K {
        x * (-9.677843e-3 + x * (6.2215701e-7 + x * (2.0747825e-9 - x * 9.484024e-13)))
            + 4.1635019 * x.ln()
            - 5.6745359e3 / x
            + 6.3925247
    } else {
        x * (-4.8640239e-2 + x * (4.1764768e-5 - x * 1.4452093e-8)) + 6.5459673 * x.ln()
            - 5.8002206e3 / x
            + 1.3914993
    };

    log_pressure.exp()
}

/// Humidity ratio [kg water / kg dry air] from dew point [K] and barometric pressure [Pa].
///
/// Not guarded against `pressure_pa <= saturation_pressure(dew_point_k)`; such
/// input yields a negative or unbounded ratio.
pub fn humidity_ratio(dew_point_k: f64, pressure_pa: f64) -> f64 {
    let dew_pressure = saturation_pressure(dew_point_k);
    dew_pressure * MOLECULAR_WEIGHT_RATIO / (pressure_pa - dew_pressure)
}

/// Effective sky emissivity from dew point [K] and cloud cover
pub fn sky_emissivity(dew_point_k: f64, cloud_cover: f64) -> f64 {
    let clear_sky = 0.787 + 0.764 * (dew_point_k / SKY_EMISSIVITY_REFERENCE_K).ln();
    let cloud_factor =
        1.0 + cloud_cover * (0.0224 + cloud_cover * (-0.0035 + 0.00028 * cloud_cover));
    clear_sky * cloud_factor
}

/// Effective sky temperature [K] from dry bulb [K], dew point [K] and cloud cover
pub fn sky_temperature(dry_bulb_k: f64, dew_point_k: f64, cloud_cover: f64) -> f64 {
    dry_bulb_k * sky_emissivity(dew_point_k, cloud_cover).sqrt().sqrt()
}
