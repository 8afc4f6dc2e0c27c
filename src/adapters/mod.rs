// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod http;
pub mod line;
