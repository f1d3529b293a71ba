// Adapters layer: where shipment tables come from and how results are rendered.

pub mod output;
pub mod source;
