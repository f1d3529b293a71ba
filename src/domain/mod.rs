// Domain layer: shipment models, pipeline options and ports (interfaces).

pub mod model;
pub mod options;
pub mod ports;
