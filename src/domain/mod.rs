// Domain layer: content-model types and the ports the generator talks through.

pub mod model;
pub mod ports;
