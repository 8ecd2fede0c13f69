pub mod event_bus;
pub mod exchange;
pub mod ports;
pub mod store;
