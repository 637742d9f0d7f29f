// Domain layer: models and ports. No I/O here beyond the port traits.

pub mod model;
pub mod ports;
