use application::command_dispatch::CommandDispatchService;
use application_ports::command_dispatch::CommandDispatchPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) command_dispatch_adapter: Arc<CommandDispatchService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(command_dispatch_adapter: Arc<CommandDispatchService>) -> Self {
        Self {
            command_dispatch_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_command_dispatch_port(&self) -> &(dyn CommandDispatchPort + Send + Sync) {
        &*self.command_dispatch_adapter
    }
}
