pub mod command_dispatch;
pub mod reply;
