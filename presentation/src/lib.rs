pub mod application_ports;
pub mod discord;
