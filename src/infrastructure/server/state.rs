use crate::application::Assistant;
use crate::infrastructure::model::ModelProvider;
use std::sync::Arc;

pub struct ServerState<P: ModelProvider> {
    assistant: Arc<Assistant<P>>,
}

impl<P: ModelProvider> ServerState<P> {
    pub fn new(assistant: Arc<Assistant<P>>) -> Self {
        Self { assistant }
    }

    pub fn assistant(&self) -> Arc<Assistant<P>> {
        Arc::clone(&self.assistant)
    }
}
