// Domain layer: the operator model and the ports the driver talks through.

pub mod model;
pub mod ports;
