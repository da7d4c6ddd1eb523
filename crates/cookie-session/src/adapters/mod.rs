//! Adapters: concrete implementations of the outbound transport port.

pub mod memory;
