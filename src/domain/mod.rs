// Domain layer: the transient values a session works with.

pub mod model;
