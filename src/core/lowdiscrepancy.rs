//! Low-discrepancy point sets: the additive R2 recurrence built on the
//! generalized golden ratio and the first two dimensions of the Sobol'
//! sequence generated in Gray-code order.

// others
use hexf::*;
// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::{clamp_t, fract, log_2_int_ceil_u64, Float, PLASTIC_NUMBER};
use crate::core::rng::FLOAT_ONE_MINUS_EPSILON;

/// Number of direction numbers needed to cover every 32 bit index.
pub const SOBOL_BITS: usize = 32;

/// Additive step of the R2 sequence along x: 1/g.
pub const R2_A1: Float = 1.0 as Float / PLASTIC_NUMBER;
/// Additive step of the R2 sequence along y: 1/g^2.
pub const R2_A2: Float = 1.0 as Float / (PLASTIC_NUMBER * PLASTIC_NUMBER);

// R2

/// One step of the additive R2 recurrence, see
/// http://extremelearning.com.au/unreasonable-effectiveness-of-quasirandom-sequences/
pub fn r2_additive(p: &Point2f) -> Point2f {
    Point2f {
        x: fract(p.x + R2_A1),
        y: fract(p.y + R2_A2),
    }
}

/// The *index*-th point of the R2 sequence, i.e. *index* additive
/// steps away from the origin. Evaluated in double precision so points
/// far into the sequence keep their fractional bits.
pub fn r2_at_index(index: u64) -> Point2f {
    let i: f64 = index as f64;
    Point2f {
        x: clamp_t(
            fract(R2_A1 as f64 * i) as Float,
            0.0 as Float,
            FLOAT_ONE_MINUS_EPSILON,
        ),
        y: clamp_t(
            fract(R2_A2 as f64 * i) as Float,
            0.0 as Float,
            FLOAT_ONE_MINUS_EPSILON,
        ),
    }
}

// Sobol'

/// The ruler function: number of trailing zero bits of *n*, 0 for 0.
pub fn ruler(n: u64) -> u32 {
    if n == 0_u64 {
        0_u32
    } else {
        n.trailing_zeros()
    }
}

/// The bits of an integer quantity can be efficiently reversed with a
/// series of logical bit operations.
pub fn reverse_bits_32(n: u32) -> u32 {
    let mut n = (n << 16) | (n >> 16);
    n = ((n & 0x00ff00ff) << 8) | ((n & 0xff00ff00) >> 8);
    n = ((n & 0x0f0f0f0f) << 4) | ((n & 0xf0f0f0f0) >> 4);
    n = ((n & 0x33333333) << 2) | ((n & 0xcccccccc) >> 2);
    n = ((n & 0x55555555) << 1) | ((n & 0xaaaaaaaa) >> 1);
    n
}

/// Van der Corput direction numbers `1 << (31 - k)` for the x axis.
pub fn van_der_corput_direction_numbers(len: usize) -> Vec<u32> {
    let len: usize = clamp_t(len, 1_usize, SOBOL_BITS);
    (0..len).map(|k| 1_u32 << (31 - k as u32)).collect()
}

/// Direction numbers `V[0] = 1 << 31`, `V[k] = V[k-1] ^ (V[k-1] >> 1)`
/// for the y axis (the second Sobol' dimension).
pub fn sobol_direction_numbers(len: usize) -> Vec<u32> {
    let len: usize = clamp_t(len, 1_usize, SOBOL_BITS);
    let mut v: Vec<u32> = Vec::with_capacity(len);
    v.push(1_u32 << 31);
    for k in 1..len {
        let previous: u32 = v[k - 1];
        v.push(previous ^ (previous >> 1));
    }
    v
}

/// Number of direction numbers needed to generate *num_values* points;
/// index 0 is skipped so `ruler(num_values)` must still be addressable.
pub fn sobol_table_size(num_values: u32) -> usize {
    clamp_t(
        log_2_int_ceil_u64(num_values as u64 + 1_u64),
        1_usize,
        SOBOL_BITS,
    )
}

/// Map a 32 bit fixed point value to [0,1).
pub fn fixed_point_to_float(v: u32) -> Float {
    // 1/2^32
    (v as Float * hexf32!("0x1.0p-32") as Float).min(FLOAT_ONE_MINUS_EPSILON)
}

/// Takes two generator matrices *c0* and *c1*, a number of 2D samples
/// to generate *n*, and stores the corresponding samples in *p*. The
/// accumulators are advanced before each sample is written, so the
/// first point is `(c0[0], c1[0])` scaled to [0,1).
pub fn gray_code_sample_2d(c0: &[u32], c1: &[u32], n: u32, p: &mut [Point2f]) {
    let mut v: [u32; 2] = [0_u32; 2];
    for i in 0..n as usize {
        let r: usize = ruler(i as u64 + 1_u64) as usize;
        v[0] ^= c0[r];
        v[1] ^= c1[r];
        p[i].x = fixed_point_to_float(v[0]);
        p[i].y = fixed_point_to_float(v[1]);
    }
}

/// The first *num_values* points of the 2D Sobol' sequence. The result
/// depends only on *num_values*; any prefix equals a shorter request.
pub fn generate_sobol(num_values: u32) -> Vec<Point2f> {
    let table_size: usize = sobol_table_size(num_values);
    let c0: Vec<u32> = van_der_corput_direction_numbers(table_size);
    let c1: Vec<u32> = sobol_direction_numbers(table_size);
    let mut samples: Vec<Point2f> = vec![Point2f::default(); num_values as usize];
    gray_code_sample_2d(&c0, &c1, num_values, &mut samples[..]);
    samples
}

/// The *index*-th point of `generate_sobol()`, evaluated directly from
/// the Gray code of `index + 1`. *c1* must hold all `SOBOL_BITS`
/// direction numbers.
pub fn sobol_at_index(index: u32, c1: &[u32]) -> Point2f {
    let n: u64 = index as u64 + 1_u64;
    let gray: u32 = (n ^ (n >> 1)) as u32;
    let x: u32 = reverse_bits_32(gray);
    let mut y: u32 = 0_u32;
    let mut bits: u32 = gray;
    let mut k: usize = 0;
    while bits != 0_u32 {
        if bits & 1_u32 == 1_u32 {
            y ^= c1[k];
        }
        bits >>= 1;
        k += 1;
    }
    Point2f {
        x: fixed_point_to_float(x),
        y: fixed_point_to_float(y),
    }
}
