// Domain layer: site content models, form state, and ports (interfaces).

pub mod model;
pub mod ports;
