//! Draw discrete items from a chosen probability mass function (pmf).
//!
//! Scalar uniform values are mapped to items either by uniform
//! bucketing or by a linear scan through the weights. Pairs of
//! uniform values are mapped through an alias table built with the
//! stable variant of Vose's method, see
//! https://www.keithschwarz.com/darts-dice-coins/

// pbrt
use crate::core::error::{Result, SamplingError};
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;

/// Remap *f* in [0,1] to an item in `[0, num_items - 1]`. Values of
/// exactly 1.0 (or anything rounding past the last bucket) saturate
/// to the last item.
pub fn map_uniform(f: Float, num_items: usize) -> usize {
    assert!(num_items > 0, "map_uniform() needs at least one item");
    std::cmp::min((f * num_items as Float) as usize, num_items - 1)
}

/// Subtract each weight from *f* in order and return the first index
/// where the running value drops to zero or below. If rounding leaves
/// a positive residual after the last weight, the last index is
/// returned.
pub fn map_weighted(f: Float, normalized_weights: &[Float]) -> usize {
    assert!(
        !normalized_weights.is_empty(),
        "map_weighted() needs at least one weight"
    );
    let mut f: Float = f;
    for (i, weight) in normalized_weights.iter().enumerate() {
        f -= *weight;
        if f <= 0.0 as Float {
            return i;
        }
    }
    normalized_weights.len() - 1
}

/// Check the pmf contract: at least one weight, every weight finite
/// and non-negative.
pub fn validate_weights(weights: &[Float]) -> Result<()> {
    if weights.is_empty() {
        return Err(SamplingError::invalid_weights("weight vector is empty"));
    }
    for (i, w) in weights.iter().enumerate() {
        if !w.is_finite() {
            return Err(SamplingError::invalid_weights(format!(
                "weight {} is not finite ({})",
                i, w
            )));
        }
        if *w < 0.0 as Float {
            return Err(SamplingError::invalid_weights(format!(
                "weight {} is negative ({})",
                i, w
            )));
        }
    }
    Ok(())
}

/// Scale *weights* so they sum to one.
pub fn normalize_weights(weights: &[Float]) -> Result<Vec<Float>> {
    validate_weights(weights)?;
    let total: Float = weights.iter().sum();
    if total <= 0.0 as Float {
        return Err(SamplingError::invalid_weights("weights sum to zero"));
    }
    Ok(weights.iter().map(|w| *w / total).collect())
}

/// Normalized weights proportional to `i + 1` for *num_items* items.
pub fn linear_weights(num_items: usize) -> Result<Vec<Float>> {
    let weights: Vec<Float> = (1..=num_items).map(|i| i as Float).collect();
    normalize_weights(&weights)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AliasTableEntry {
    /// Threshold in [0,1] below which the column itself is picked.
    pub probability: Float,
    /// Alternate item picked above the threshold. `None` means the
    /// column is always picked directly.
    pub alias_index: Option<usize>,
}

impl Default for AliasTableEntry {
    fn default() -> Self {
        AliasTableEntry {
            probability: 1.0 as Float,
            alias_index: None,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct AliasItem {
    index: usize,
    probability: Float,
}

/// O(1) sampling of a discrete distribution. Built once from a
/// normalized weight vector and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    entries: Vec<AliasTableEntry>,
}

impl AliasTable {
    /// Build the table in O(N). The weights are expected to sum to
    /// one already; no renormalization is done here.
    pub fn new(normalized_weights: &[Float]) -> Result<Self> {
        validate_weights(normalized_weights)?;
        let n: usize = normalized_weights.len();
        let mut entries: Vec<AliasTableEntry> = vec![AliasTableEntry::default(); n];
        // make the small and large item lists
        let mut small_items: Vec<AliasItem> = Vec::with_capacity(n);
        let mut large_items: Vec<AliasItem> = Vec::with_capacity(n);
        for (index, weight) in normalized_weights.iter().enumerate() {
            let item: AliasItem = AliasItem {
                index,
                probability: *weight * n as Float,
            };
            if item.probability < 1.0 as Float {
                small_items.push(item);
            } else {
                large_items.push(item);
            }
        }
        loop {
            match (small_items.pop(), large_items.pop()) {
                // pair one small with one large item
                (Some(small_item), Some(mut large_item)) => {
                    entries[small_item.index] = AliasTableEntry {
                        probability: small_item.probability,
                        alias_index: Some(large_item.index),
                    };
                    large_item.probability =
                        (large_item.probability + small_item.probability) - 1.0 as Float;
                    if large_item.probability < 1.0 as Float {
                        small_items.push(large_item);
                    } else {
                        large_items.push(large_item);
                    }
                }
                // rounding residue, always pick the column directly
                (Some(item), None) | (None, Some(item)) => {
                    entries[item.index] = AliasTableEntry::default();
                }
                (None, None) => break,
            }
        }
        Ok(AliasTable { entries })
    }
    /// Sample with two independent uniform values: *x* picks the
    /// column, *y* decides between the column and its alias.
    pub fn sample(&self, x: Float, y: Float) -> usize {
        let column: usize = map_uniform(x, self.entries.len());
        let entry: &AliasTableEntry = &self.entries[column];
        if entry.probability >= 1.0 as Float || y <= entry.probability {
            return column;
        }
        match entry.alias_index {
            Some(alias) => alias,
            None => column,
        }
    }
    pub fn sample_point(&self, u: &Point2f) -> usize {
        self.sample(u.x, u.y)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn entries(&self) -> &[AliasTableEntry] {
        &self.entries
    }
    /// The distribution encoded by the table: each column contributes
    /// `probability / N` to itself and the rest to its alias.
    pub fn pmf(&self) -> Vec<Float> {
        let n: usize = self.entries.len();
        let inv_n: f64 = 1.0 / n as f64;
        let mut pmf: Vec<f64> = vec![0.0; n];
        for (column, entry) in self.entries.iter().enumerate() {
            match entry.alias_index {
                Some(alias) if entry.probability < 1.0 as Float => {
                    pmf[column] += entry.probability as f64 * inv_n;
                    pmf[alias] += (1.0 - entry.probability as f64) * inv_n;
                }
                _ => pmf[column] += inv_n,
            }
        }
        pmf.into_iter().map(|p| p as Float).collect()
    }
}
