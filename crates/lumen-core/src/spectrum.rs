// ---------------------------------------------------------------------------
// Band layout
// ---------------------------------------------------------------------------

/// Centre wavelengths of the 12 emitter channels, in nanometres.
pub const WAVELENGTHS_NM: [u32; BAND_COUNT] =
    [400, 430, 460, 490, 520, 550, 580, 610, 630, 660, 690, 730];

pub const BAND_COUNT: usize = 12;

/// One intensity per channel, positionally matching [`WAVELENGTHS_NM`].
pub type Bands = [f64; BAND_COUNT];

// ---------------------------------------------------------------------------
// Reference curves
// ---------------------------------------------------------------------------

// Human / circadian: blue-cyan daytime, warm evening.
pub const HUMAN_SLEEP: Bands = [
    0.05, 0.08, 0.12, 0.18, 0.22, 0.20, 0.16, 0.12, 0.10, 0.08, 0.06, 0.06,
];
pub const HUMAN_WAKE: Bands = [
    0.06, 0.12, 0.28, 0.48, 0.58, 0.52, 0.36, 0.24, 0.18, 0.14, 0.10, 0.08,
];
pub const HUMAN_WORK: Bands = [
    0.05, 0.10, 0.24, 0.40, 0.50, 0.46, 0.34, 0.26, 0.20, 0.16, 0.12, 0.10,
];
pub const HUMAN_WIND: Bands = [
    0.04, 0.06, 0.12, 0.18, 0.26, 0.26, 0.22, 0.18, 0.16, 0.14, 0.12, 0.14,
];

// Plant / growth: blue plus red and far-red.
pub const PLANT_NIGHT: Bands = [
    0.35, 0.50, 0.45, 0.28, 0.18, 0.22, 0.45, 0.60, 0.75, 0.88, 0.85, 0.70,
];
pub const PLANT_SURGE: Bands = [
    0.50, 0.72, 0.62, 0.40, 0.30, 0.40, 0.66, 0.82, 0.92, 1.00, 0.98, 0.82,
];
pub const PLANT_MAINT: Bands = [
    0.44, 0.64, 0.56, 0.38, 0.28, 0.36, 0.60, 0.78, 0.88, 0.96, 0.94, 0.80,
];

// ---------------------------------------------------------------------------
// Band math
// ---------------------------------------------------------------------------

pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Rescale so the brightest channel is exactly 1.0.
///
/// A vector whose peak is not positive comes back as all zeros.
pub fn normalize<const N: usize>(bands: [f64; N]) -> [f64; N] {
    let peak = bands.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if N == 0 || peak <= 0.0 {
        return [0.0; N];
    }
    bands.map(|v| clamp01(v / peak))
}

/// Elementwise interpolation from `a` (t = 0) to `b` (t = 1), truncated to
/// the shorter input.
pub fn morph(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&x, &y)| lerp(x, y, t)).collect()
}

/// Scale a reference curve by `factor`, clamp, then renormalize.
pub fn apply_day_mod(reference: Bands, factor: f64) -> Bands {
    normalize(reference.map(|v| clamp01(v * factor)))
}

#[cfg(test)]
pub(crate) fn peak(bands: &[f64]) -> f64 {
    bands.iter().copied().fold(0.0, f64::max)
}
