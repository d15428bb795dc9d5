// Adapters layer: concrete implementations of the domain ports (HTTP).

pub mod http;
