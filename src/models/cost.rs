// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Cost estimate derived from the marker list.

use super::annotation::{Annotation, PoleCategory};

/// Count and subtotal for a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryCost {
    pub count: usize,
    pub cost: f64,
}

/// Per-category counts and costs plus the grand total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostSummary {
    pub planned: CategoryCost,
    pub existing: CategoryCost,
    pub rural_standard: CategoryCost,
    pub total: f64,
}

impl CostSummary {
    pub fn from_annotations(annotations: &[Annotation]) -> Self {
        let tally = |category: PoleCategory| {
            let count = annotations.iter().filter(|a| a.category == category).count();
            CategoryCost {
                count,
                cost: count as f64 * category.unit_price(),
            }
        };

        let planned = tally(PoleCategory::Planned);
        let existing = tally(PoleCategory::Existing);
        let rural_standard = tally(PoleCategory::RuralStandard);

        Self {
            planned,
            existing,
            rural_standard,
            total: planned.cost + existing.cost + rural_standard.cost,
        }
    }

    pub fn get(&self, category: PoleCategory) -> CategoryCost {
        match category {
            PoleCategory::Planned => self.planned,
            PoleCategory::Existing => self.existing,
            PoleCategory::RuralStandard => self.rural_standard,
        }
    }

    pub fn pole_count(&self) -> usize {
        self.planned.count + self.existing.count + self.rural_standard.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(planned: usize, existing: usize, rural: usize) -> Vec<Annotation> {
        let mut list = Vec::new();
        for (category, n) in [
            (PoleCategory::Planned, planned),
            (PoleCategory::Existing, existing),
            (PoleCategory::RuralStandard, rural),
        ] {
            for _ in 0..n {
                list.push(Annotation::placeholder(category, list.len() + 1));
            }
        }
        list
    }

    #[test]
    fn test_mixed_partition_total() {
        let summary = CostSummary::from_annotations(&markers(3, 2, 1));
        assert_eq!(summary.planned.count, 3);
        assert_eq!(summary.existing.count, 2);
        assert_eq!(summary.rural_standard.count, 1);
        assert!((summary.planned.cost - 1.05).abs() < 1e-9);
        assert!((summary.existing.cost - 0.40).abs() < 1e-9);
        assert!((summary.rural_standard.cost - 1.40).abs() < 1e-9);
        assert!((summary.total - 2.85).abs() < 1e-9);
        assert_eq!(summary.pole_count(), 6);
    }

    #[test]
    fn test_empty_list_costs_nothing() {
        let summary = CostSummary::from_annotations(&[]);
        assert_eq!(summary, CostSummary::default());
    }

    #[test]
    fn test_total_matches_unit_prices_for_any_partition() {
        for planned in 0..4 {
            for existing in 0..4 {
                for rural in 0..4 {
                    let summary = CostSummary::from_annotations(&markers(planned, existing, rural));
                    let expected = planned as f64 * 0.35 + existing as f64 * 0.20 + rural as f64 * 1.40;
                    assert!((summary.total - expected).abs() < 1e-9);
                }
            }
        }
    }
}
