use crate::foundation::math::{Fnv1a64, lerp, smoothstep};
use crate::fx::random::Rng64;

fn lattice(seed: u64, channel: &str, ix: i64, iy: i64) -> f64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(seed);
    h.write_str(channel);
    h.write_i64(ix);
    h.write_i64(iy);
    Rng64::new(h.finish()).next_f64_01() * 2.0 - 1.0
}

/// 2D value noise in `[-1, 1]`.
///
/// Hashed lattice values blended with smoothstep weights, so the field is
/// continuous in `x` and `y`. Non-finite coordinates sample the origin.
pub fn noise2d(seed: u64, channel: &str, x: f64, y: f64) -> f64 {
    let x = if x.is_finite() { x } else { 0.0 };
    let y = if y.is_finite() { y } else { 0.0 };

    let x0 = x.floor();
    let y0 = y.floor();
    let tx = smoothstep(x - x0);
    let ty = smoothstep(y - y0);
    let ix = x0 as i64;
    let iy = y0 as i64;

    let v00 = lattice(seed, channel, ix, iy);
    let v10 = lattice(seed, channel, ix.wrapping_add(1), iy);
    let v01 = lattice(seed, channel, ix, iy.wrapping_add(1));
    let v11 = lattice(seed, channel, ix.wrapping_add(1), iy.wrapping_add(1));

    let top = lerp(v00, v10, tx);
    let bottom = lerp(v01, v11, tx);
    lerp(top, bottom, ty).clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/fx/noise.rs"]
mod tests;
