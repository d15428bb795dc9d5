// Domain layer: shipment and inventory models plus the ports the UI layer talks through.

pub mod model;
pub mod ports;
