// Domain layer: catalog entities and the ports the core persists through.

pub mod model;
pub mod ports;
