pub mod field_merge;
pub mod ports;
pub mod server_clock;
