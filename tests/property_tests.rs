use proptest::prelude::*;
use rs_alias::core::lowdiscrepancy::{generate_sobol, r2_additive, r2_at_index};
use rs_alias::core::geometry::Point2f;
use rs_alias::core::pbrt::Float;
use rs_alias::core::sampling::{map_uniform, map_weighted, normalize_weights, AliasTable};
use rs_alias::core::sampling::AliasTableEntry;

fn weight_vector() -> impl Strategy<Value = Vec<Float>> {
    prop::collection::vec(0.0f32..100.0, 1..64).prop_filter("weights must not all be zero", |w| {
        w.iter().any(|x| *x > 0.0)
    })
}

proptest! {
    #[test]
    fn prop_alias_table_entries_valid(raw in weight_vector()) {
        let weights: Vec<Float> = normalize_weights(&raw).unwrap();
        let table: AliasTable = AliasTable::new(&weights).unwrap();
        prop_assert_eq!(table.len(), weights.len());
        let entries: &[AliasTableEntry] = table.entries();
        for (column, entry) in entries.iter().enumerate() {
            prop_assert!(entry.probability >= 0.0 && entry.probability <= 1.0);
            if let Some(alias) = entry.alias_index {
                prop_assert!(alias < weights.len());
                prop_assert_ne!(alias, column);
            }
            if entry.probability < 1.0 {
                prop_assert!(entry.alias_index.is_some());
            }
        }
    }

    #[test]
    fn prop_alias_table_encodes_pmf(raw in weight_vector()) {
        let weights: Vec<Float> = normalize_weights(&raw).unwrap();
        let table: AliasTable = AliasTable::new(&weights).unwrap();
        for (p, w) in table.pmf().iter().zip(weights.iter()) {
            prop_assert!((p - w).abs() < 1e-4, "{} vs {}", p, w);
        }
    }

    #[test]
    fn prop_alias_sample_in_range(raw in weight_vector(), x in 0.0f32..=1.0, y in 0.0f32..=1.0) {
        let weights: Vec<Float> = normalize_weights(&raw).unwrap();
        let table: AliasTable = AliasTable::new(&weights).unwrap();
        prop_assert!(table.sample(x, y) < weights.len());
    }

    #[test]
    fn prop_map_uniform_in_range(f in 0.0f32..=1.0, n in 1usize..1000) {
        prop_assert!(map_uniform(f, n) < n);
    }

    #[test]
    fn prop_map_weighted_in_range(raw in weight_vector(), f in 0.0f32..=1.0) {
        let weights: Vec<Float> = normalize_weights(&raw).unwrap();
        prop_assert!(map_weighted(f, &weights) < weights.len());
    }

    #[test]
    fn prop_r2_index_matches_additive(i in 0u64..512) {
        let mut p: Point2f = Point2f::default();
        for _ in 0..i {
            p = r2_additive(&p);
        }
        let q: Point2f = r2_at_index(i);
        let dx: Float = (p.x - q.x).abs();
        let dy: Float = (p.y - q.y).abs();
        prop_assert!(dx.min(1.0 - dx) < 1e-4);
        prop_assert!(dy.min(1.0 - dy) < 1e-4);
    }

    #[test]
    fn prop_sobol_prefix_stable(k in 0u32..2048) {
        let full: Vec<Point2f> = generate_sobol(2048);
        let prefix: Vec<Point2f> = generate_sobol(k);
        prop_assert_eq!(&full[..k as usize], &prefix[..]);
    }
}
