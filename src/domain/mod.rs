// Domain layer: the contracts the driver consumes from pipeline stages.

pub mod ports;
