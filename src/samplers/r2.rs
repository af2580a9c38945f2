// pbrt
use crate::core::geometry::Point2f;
use crate::core::lowdiscrepancy::{r2_additive, r2_at_index};

/// R2 points addressed by index, starting at index 0 (the origin).
#[derive(Debug, Default, Copy, Clone)]
pub struct R2Sampler {
    pub index: u64,
}

impl R2Sampler {
    pub fn new(start_index: u64) -> Self {
        R2Sampler { index: start_index }
    }
    pub fn get_2d(&mut self) -> Point2f {
        let p: Point2f = r2_at_index(self.index);
        self.index += 1_u64;
        p
    }
}

/// Walk-forward R2 recurrence; every call advances one additive step
/// from the previous point.
#[derive(Debug, Default, Copy, Clone)]
pub struct R2AdditiveSampler {
    pub point: Point2f,
}

impl R2AdditiveSampler {
    pub fn new(start: Point2f) -> Self {
        R2AdditiveSampler { point: start }
    }
    pub fn get_2d(&mut self) -> Point2f {
        self.point = r2_additive(&self.point);
        self.point
    }
}
