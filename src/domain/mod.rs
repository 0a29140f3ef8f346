// Domain layer: collection model and ports (interfaces).

pub mod model;
pub mod ports;
