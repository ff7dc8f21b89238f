// Domain layer: row model, verdicts, run report and the ports the core talks through.

pub mod model;
pub mod ports;
