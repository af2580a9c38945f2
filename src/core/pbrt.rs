//! Type definition of Float, otherwise constants and functions which
//! can be used almost everywhere else in the code.

// others
use num;

pub type Float = f32;

/// Fractional part of the golden ratio, used for 1D equidistribution.
pub const GOLDEN_RATIO_CONJUGATE: Float = 0.618_033_988_75;
/// Fractional part of pi.
pub const PI_FRACT: Float = 0.141_592_653_59;
/// Fractional part of the square root of two.
pub const SQRT_2_FRACT: Float = 0.414_213_562_37;
/// The generalized golden ratio, the unique real root of g^3 = g + 1.
pub const PLASTIC_NUMBER: Float = 1.324_717_957_244_746_025_96;

/// Returns the fractional part `x - floor(x)`. Used to keep additive
/// recurrences bounded to [0,1).
pub fn fract<T>(x: T) -> T
where
    T: num::Float,
{
    x - x.floor()
}

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    let r: T;
    if val < low {
        r = low;
    } else if val > high {
        r = high;
    } else {
        r = val;
    }
    r
}

/// Compute an integer base-2 logarithm function.
pub fn log_2_int_u64(v: u64) -> i64 {
    63_i64 - v.leading_zeros() as i64
}

/// Number of bits needed to address every value in `[0, v)`, that is
/// `ceil(log2(v))`. Returns 0 for `v <= 1`.
pub fn log_2_int_ceil_u64(v: u64) -> usize {
    if v <= 1_u64 {
        0_usize
    } else {
        (log_2_int_u64(v - 1) + 1) as usize
    }
}
