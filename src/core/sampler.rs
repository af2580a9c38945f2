//! The **Sampler** enum is the interface between the point generators
//! and the code consuming their coordinates. Every variant produces
//! genuinely two dimensional output so the alias table gets
//! independent values for column selection and the alias decision.

// pbrt
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;
use crate::samplers::additive::{AdditiveSampler, GoldenRatioSqrt2Sampler};
use crate::samplers::r2::{R2AdditiveSampler, R2Sampler};
use crate::samplers::random::RandomSampler;
use crate::samplers::sobol::SobolSampler;

pub enum Sampler {
    GoldenRatioSqrt2(GoldenRatioSqrt2Sampler),
    R2(R2Sampler),
    R2Additive(R2AdditiveSampler),
    Random(RandomSampler),
    Sobol(SobolSampler),
}

impl Sampler {
    pub fn get_2d(&mut self) -> Point2f {
        match self {
            Sampler::GoldenRatioSqrt2(sampler) => sampler.get_2d(),
            Sampler::R2(sampler) => sampler.get_2d(),
            Sampler::R2Additive(sampler) => sampler.get_2d(),
            Sampler::Random(sampler) => sampler.get_2d(),
            Sampler::Sobol(sampler) => sampler.get_2d(),
        }
    }
}

/// Scalar generators, mapped to items one value at a time.
pub enum Sampler1D {
    Additive(AdditiveSampler),
    Random(RandomSampler),
}

impl Sampler1D {
    pub fn get_1d(&mut self) -> Float {
        match self {
            Sampler1D::Additive(sampler) => sampler.get_1d(),
            Sampler1D::Random(sampler) => sampler.get_1d(),
        }
    }
}
