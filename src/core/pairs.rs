//! Folding directed shipments into one row per country pair.
//!
//! [`collect_pairs`] walks adjacent records after sorting by quantity, so it
//! only pairs the two directions of a trade when they end up next to each
//! other. [`aggregate_pairs`] keys on the unordered country pair instead and
//! does not depend on adjacency.

use crate::domain::model::{CountryCode, ShipmentPair, ShipmentRecord};
use crate::domain::options::{MergeArithmetic, PairingOptions, ScanStride};
use std::collections::HashMap;

/// Copy of `shipments` ordered by quantity, largest first. Equal quantities
/// keep their input order.
pub fn sort_by_quantity_desc(shipments: &[ShipmentRecord]) -> Vec<ShipmentRecord> {
    let mut sorted = shipments.to_vec();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sorted
}

/// Adjacency scan with the default options: overlapping windows, summed merge.
pub fn collect_pairs(shipments: &[ShipmentRecord]) -> Vec<ShipmentPair> {
    collect_pairs_with(shipments, PairingOptions::default())
}

pub fn collect_pairs_with(shipments: &[ShipmentRecord], options: PairingOptions) -> Vec<ShipmentPair> {
    let sorted = sort_by_quantity_desc(shipments);
    let step = match options.stride {
        ScanStride::Overlapping => 1,
        ScanStride::Chunked => 2,
    };

    let mut shipment_pairs = Vec::with_capacity(sorted.len().saturating_sub(1) * 2);

    for window in sorted.windows(2).step_by(step) {
        let (current, next) = (&window[0], &window[1]);

        if current.origin == next.origin {
            let forward = match options.merge {
                MergeArithmetic::Summed => current.quantity.saturating_add(next.quantity),
                MergeArithmetic::Raw => current.quantity,
            };
            shipment_pairs.push(ShipmentPair::new(
                current.origin.clone(),
                current.destination.clone(),
                forward,
                next.quantity,
            ));
        } else {
            shipment_pairs.push(ShipmentPair::new(
                current.origin.clone(),
                current.destination.clone(),
                current.quantity,
                0,
            ));
            shipment_pairs.push(ShipmentPair::new(
                next.origin.clone(),
                next.destination.clone(),
                0,
                next.quantity,
            ));
        }
    }

    tracing::debug!(
        "collect_pairs produced {} rows from {} records ({:?})",
        shipment_pairs.len(),
        shipments.len(),
        options
    );

    shipment_pairs
}

fn unordered_key(a: &CountryCode, b: &CountryCode) -> (CountryCode, CountryCode) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// One row per unordered country pair, summing every record in each direction.
///
/// A row is oriented by the largest single record of its pair (the first one
/// seen after sorting), not by the larger accumulated total. Rows come out in
/// order of first appearance. Intra-country records count toward
/// `quantity_a_to_b`.
pub fn aggregate_pairs(shipments: &[ShipmentRecord]) -> Vec<ShipmentPair> {
    let mut slots: HashMap<(CountryCode, CountryCode), usize> = HashMap::new();
    let mut pairs: Vec<ShipmentPair> = Vec::new();

    for shipment in sort_by_quantity_desc(shipments) {
        let key = unordered_key(&shipment.origin, &shipment.destination);

        match slots.get(&key) {
            Some(&slot) => {
                let pair = &mut pairs[slot];
                if pair.country_a == shipment.origin {
                    pair.quantity_a_to_b = pair.quantity_a_to_b.saturating_add(shipment.quantity);
                } else {
                    pair.quantity_b_to_a = pair.quantity_b_to_a.saturating_add(shipment.quantity);
                }
            }
            None => {
                slots.insert(key, pairs.len());
                pairs.push(ShipmentPair::new(
                    shipment.origin,
                    shipment.destination,
                    shipment.quantity,
                    0,
                ));
            }
        }
    }

    tracing::debug!(
        "aggregate_pairs produced {} rows from {} records",
        pairs.len(),
        shipments.len()
    );

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(origin: &str, destination: &str, quantity: u64) -> ShipmentRecord {
        ShipmentRecord::new(origin, destination, quantity)
    }

    fn pair(a: &str, b: &str, ab: u64, ba: u64) -> ShipmentPair {
        ShipmentPair::new(a, b, ab, ba)
    }

    fn worked_example() -> Vec<ShipmentRecord> {
        vec![
            record("US", "IN", 14),
            record("US", "CA", 17),
            record("IN", "US", 8),
            record("IN", "CA", 12),
            record("CA", "US", 7),
            record("CA", "IN", 5),
        ]
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let shipments = vec![
            record("A", "B", 3),
            record("C", "D", 9),
            record("E", "F", 3),
            record("G", "H", 9),
        ];

        let sorted = sort_by_quantity_desc(&shipments);

        assert_eq!(
            sorted,
            vec![
                record("C", "D", 9),
                record("G", "H", 9),
                record("A", "B", 3),
                record("E", "F", 3),
            ]
        );
        // 排序作用於副本
        assert_eq!(shipments[0], record("A", "B", 3));
    }

    #[test]
    fn test_worked_example_sort_order() {
        let quantities: Vec<u64> = sort_by_quantity_desc(&worked_example())
            .iter()
            .map(|s| s.quantity)
            .collect();
        assert_eq!(quantities, vec![17, 14, 12, 8, 7, 5]);
    }

    #[test]
    fn test_collect_pairs_empty_and_singleton() {
        assert!(collect_pairs(&[]).is_empty());
        assert!(collect_pairs(&[record("US", "IN", 14)]).is_empty());
    }

    #[test]
    fn test_collect_pairs_worked_example_default_options() {
        let pairs = collect_pairs(&worked_example());

        assert_eq!(
            pairs,
            vec![
                pair("US", "CA", 31, 14),
                pair("US", "IN", 14, 0),
                pair("IN", "CA", 0, 12),
                pair("IN", "CA", 20, 8),
                pair("IN", "US", 8, 0),
                pair("CA", "US", 0, 7),
                pair("CA", "US", 12, 5),
            ]
        );
    }

    #[test]
    fn test_collect_pairs_worked_example_chunked_raw() {
        let options = PairingOptions {
            merge: MergeArithmetic::Raw,
            stride: ScanStride::Chunked,
        };

        let pairs = collect_pairs_with(&worked_example(), options);

        assert_eq!(
            pairs,
            vec![
                pair("US", "CA", 17, 14),
                pair("IN", "CA", 12, 8),
                pair("CA", "US", 7, 5),
            ]
        );
    }

    #[test]
    fn test_collect_pairs_raw_overlapping_keeps_current_quantity() {
        let options = PairingOptions {
            merge: MergeArithmetic::Raw,
            stride: ScanStride::Overlapping,
        };
        let shipments = vec![record("US", "IN", 14), record("US", "CA", 17)];

        assert_eq!(
            collect_pairs_with(&shipments, options),
            vec![pair("US", "CA", 17, 14)]
        );
    }

    #[test]
    fn test_collect_pairs_different_origins_split() {
        let shipments = vec![record("US", "IN", 4), record("IN", "US", 9)];

        assert_eq!(
            collect_pairs(&shipments),
            vec![pair("IN", "US", 9, 0), pair("US", "IN", 0, 4)]
        );
    }

    #[test]
    fn test_collect_pairs_chunked_drops_trailing_record() {
        let options = PairingOptions {
            merge: MergeArithmetic::Summed,
            stride: ScanStride::Chunked,
        };
        let shipments = vec![
            record("US", "IN", 3),
            record("US", "CA", 2),
            record("MX", "VE", 1),
        ];

        assert_eq!(
            collect_pairs_with(&shipments, options),
            vec![pair("US", "IN", 5, 2)]
        );
    }

    #[test]
    fn test_collect_pairs_saturates_instead_of_overflowing() {
        let shipments = vec![record("US", "IN", u64::MAX), record("US", "CA", 1)];
        assert_eq!(
            collect_pairs(&shipments),
            vec![pair("US", "IN", u64::MAX, 1)]
        );
    }

    #[test]
    fn test_aggregate_pairs_worked_example() {
        assert_eq!(
            aggregate_pairs(&worked_example()),
            vec![
                pair("US", "CA", 17, 7),
                pair("US", "IN", 14, 8),
                pair("IN", "CA", 12, 5),
            ]
        );
    }

    #[test]
    fn test_aggregate_pairs_sums_duplicates_and_intra() {
        let shipments = vec![
            record("US", "IN", 5),
            record("IN", "US", 2),
            record("US", "IN", 1),
            record("MX", "MX", 3),
            record("MX", "MX", 4),
        ];

        assert_eq!(
            aggregate_pairs(&shipments),
            vec![pair("US", "IN", 6, 2), pair("MX", "MX", 7, 0)]
        );
    }

    #[test]
    fn test_aggregate_pairs_orients_by_largest_single_record() {
        let shipments = vec![
            record("US", "IN", 5),
            record("IN", "US", 4),
            record("IN", "US", 4),
        ];

        // IN -> US 合計較大，但 US -> IN 的單筆最大
        assert_eq!(aggregate_pairs(&shipments), vec![pair("US", "IN", 5, 8)]);
    }

    #[test]
    fn test_aggregate_pairs_empty() {
        assert!(aggregate_pairs(&[]).is_empty());
    }
}
