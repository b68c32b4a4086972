// Domain layer: the persisted record and the storage port. No I/O here beyond `load`.

pub mod model;
pub mod ports;
