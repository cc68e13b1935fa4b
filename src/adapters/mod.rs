// Adapters layer: concrete implementations for external systems (load harness, HTTP probe).

pub mod goose_client;
pub mod preflight;
