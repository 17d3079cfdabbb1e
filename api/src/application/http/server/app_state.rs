use std::sync::Arc;

use subtrack_core::application::SubtrackService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<SubtrackService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SubtrackService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
