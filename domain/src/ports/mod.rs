pub mod discord;
pub mod reply;
