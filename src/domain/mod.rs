// Domain layer: record model, report types and the catalog port.

pub mod model;
pub mod ports;
