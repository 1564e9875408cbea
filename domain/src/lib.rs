pub mod command;
pub mod interaction;
pub mod ports;
pub mod responses;
