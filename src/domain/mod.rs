// Domain layer: practitioner models and the catalog supply port.

pub mod model;
pub mod ports;
