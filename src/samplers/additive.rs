// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::{fract, Float};
use crate::core::pbrt::{GOLDEN_RATIO_CONJUGATE, SQRT_2_FRACT};

/// 1D additive recurrence `value = fract(value + delta)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdditiveSampler {
    pub delta: Float,
    pub value: Float,
}

impl AdditiveSampler {
    /// Start at *start*, any value in [0,1) is valid.
    pub fn new(delta: Float, start: Float) -> Self {
        AdditiveSampler {
            delta,
            value: fract(start),
        }
    }
    /// Walk the items in order, starting half a step in to keep the
    /// values away from bucket edges.
    pub fn sequential(delta: Float) -> Self {
        AdditiveSampler::new(delta, delta / 2.0 as Float)
    }
    pub fn get_1d(&mut self) -> Float {
        self.value = fract(self.value + self.delta);
        self.value
    }
}

/// Pairs two independent additive recurrences, the golden ratio
/// conjugate on x and the fractional part of sqrt 2 on y.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GoldenRatioSqrt2Sampler {
    pub golden_ratio: AdditiveSampler,
    pub sqrt_2: AdditiveSampler,
}

impl Default for GoldenRatioSqrt2Sampler {
    fn default() -> Self {
        GoldenRatioSqrt2Sampler {
            golden_ratio: AdditiveSampler::new(GOLDEN_RATIO_CONJUGATE, 0.0),
            sqrt_2: AdditiveSampler::new(SQRT_2_FRACT, 0.0),
        }
    }
}

impl GoldenRatioSqrt2Sampler {
    pub fn get_2d(&mut self) -> Point2f {
        // x first
        let x = self.golden_ratio.get_1d();
        let y = self.sqrt_2.get_1d();
        Point2f { x, y }
    }
}
