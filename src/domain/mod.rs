// Domain layer: catalog entities and the traits the stores are built on.

pub mod model;
pub mod ports;
