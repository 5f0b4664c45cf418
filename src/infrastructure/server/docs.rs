use super::dto::{ErrorResponse, RestChatRequest, RestChatResponse};
use super::routes;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::chat_handler, routes::reset::reset_handler),
    components(schemas(RestChatRequest, RestChatResponse, ErrorResponse)),
    tags(
        (name = "chat", description = "Guided resort extraction over chat")
    )
)]
pub(super) struct ApiDoc;
