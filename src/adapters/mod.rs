// Adapters layer: concrete implementations for external systems (hardware registry).

pub mod hardware;
