use application_ports::command_dispatch::CommandDispatchPort;

pub trait Locator {
    fn get_command_dispatch_port(&self) -> &(dyn CommandDispatchPort + Send + Sync);
}
