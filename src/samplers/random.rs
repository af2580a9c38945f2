// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;
use crate::core::rng::Rng;

/// White noise from the PCG32 generator.
#[derive(Debug, Default, Copy, Clone)]
pub struct RandomSampler {
    pub rng: Rng,
}

impl RandomSampler {
    pub fn new(rng: Rng) -> Self {
        RandomSampler { rng }
    }
    pub fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }
    pub fn get_2d(&mut self) -> Point2f {
        // x first
        let x = self.rng.uniform_float();
        let y = self.rng.uniform_float();
        Point2f { x, y }
    }
}
