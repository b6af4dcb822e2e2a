/// Wrap `v` onto the half-open interval `[0, extent)`.
///
/// Leaving one edge re-enters at the opposite one (toroidal topology). Any overshoot is
/// folded, so even velocities larger than the extent land inside.
pub(crate) fn wrap_coord(v: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !v.is_finite() {
        return 0.0;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if r >= extent { 0.0 } else { r }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Oscillator mapped onto `[0, 1]`.
pub(crate) fn pulse01(phase: f64) -> f64 {
    0.5 + 0.5 * phase.sin()
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// SplitMix64 generator used to seed particle fields deterministically.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
