use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    application::queue_service::TopicQueue,
    common::{errors::WebhookError, types::EventPayload},
};

/// Shared by `/generic-invite` and `/basic-message`; the body is queued untouched.
#[tracing::instrument(
    name = "Receiving generic message event",
    skip(request, body, topic_queue),
    fields(route = %request.path())
)]
pub async fn messages(
    request: HttpRequest,
    body: EventPayload,
    topic_queue: web::Data<TopicQueue>,
) -> Result<HttpResponse, WebhookError> {
    tracing::info!("received generic msg event");

    topic_queue.submit(body).await?;
    Ok(HttpResponse::Ok().finish())
}
