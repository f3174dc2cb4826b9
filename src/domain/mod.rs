// Domain layer: hair data, formula and store models plus the ports they are persisted through.

pub mod model;
pub mod ports;
