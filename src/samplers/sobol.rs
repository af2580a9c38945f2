// pbrt
use crate::core::geometry::Point2f;
use crate::core::lowdiscrepancy::{fixed_point_to_float, ruler};
use crate::core::lowdiscrepancy::{
    sobol_direction_numbers, van_der_corput_direction_numbers, SOBOL_BITS,
};

/// Walk-forward 2D Sobol' points. Each axis keeps its own accumulator
/// which is XORed with the direction number picked by the ruler
/// function of the next index.
#[derive(Debug, Clone)]
pub struct SobolSampler {
    pub c0: Vec<u32>,
    pub c1: Vec<u32>,
    pub index: u64,
    accumulator: [u32; 2],
}

impl Default for SobolSampler {
    fn default() -> Self {
        SobolSampler::new()
    }
}

impl SobolSampler {
    pub fn new() -> Self {
        SobolSampler {
            c0: van_der_corput_direction_numbers(SOBOL_BITS),
            c1: sobol_direction_numbers(SOBOL_BITS),
            index: 0_u64,
            accumulator: [0_u32; 2],
        }
    }
    pub fn get_2d(&mut self) -> Point2f {
        assert!(
            self.index < u32::MAX as u64,
            "Sobol' sequence exhausted after 2^32 - 1 points"
        );
        let r: usize = ruler(self.index + 1_u64) as usize;
        self.accumulator[0] ^= self.c0[r];
        self.accumulator[1] ^= self.c1[r];
        self.index += 1_u64;
        Point2f {
            x: fixed_point_to_float(self.accumulator[0]),
            y: fixed_point_to_float(self.accumulator[1]),
        }
    }
}
