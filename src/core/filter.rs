use crate::domain::model::ShipmentRecord;

/// Drops every record whose origin and destination are the same country.
///
/// Relative order of the remaining records is preserved and the input is
/// left untouched.
pub fn remove_intra(shipments: &[ShipmentRecord]) -> Vec<ShipmentRecord> {
    let export_only: Vec<ShipmentRecord> = shipments
        .iter()
        .filter(|shipment| !shipment.is_intra())
        .cloned()
        .collect();

    tracing::debug!(
        "remove_intra kept {} of {} records",
        export_only.len(),
        shipments.len()
    );

    export_only
}
