// Domain layer: endpoint model and the port the scenarios are written against.

pub mod model;
pub mod ports;
