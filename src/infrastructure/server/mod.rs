mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, RestChatRequest, RestChatResponse};
pub use error::ServerError;
pub use router::build_router;

use crate::application::Assistant;
use crate::config::RestConfig;
use crate::infrastructure::model::ModelProvider;
use std::sync::Arc;

pub async fn serve<P>(assistant: Arc<Assistant<P>>, config: RestConfig) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(assistant, config).await
}
