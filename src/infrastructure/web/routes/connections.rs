use actix_web::{web, HttpResponse};

use crate::{
    application::queue_service::TopicQueue,
    common::{errors::WebhookError, types::EventPayload},
    domain::models::connection::ConnectionMsg,
};

#[tracing::instrument(name = "Receiving connection state event", skip(body, topic_queue))]
pub async fn connections(
    body: EventPayload,
    topic_queue: web::Data<TopicQueue>,
) -> Result<HttpResponse, WebhookError> {
    let connection_msg = ConnectionMsg::parse(&body).map_err(|err| {
        tracing::warn!("Rejecting malformed connection state event: {}", err);
        err
    })?;

    tracing::info!(
        connection_id = %connection_msg.connection_id,
        state = %connection_msg.state,
        "received state transition event :: {}",
        connection_msg
    );

    topic_queue.submit(body).await?;
    Ok(HttpResponse::Ok().finish())
}
