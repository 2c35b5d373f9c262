use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    application::queue_service::{PollTopicResult, TopicQueue},
    common::types::NO_TOPIC_FOUND,
};

#[tracing::instrument(name = "Checking topics", skip(topic_queue))]
pub async fn check_topics(topic_queue: web::Data<TopicQueue>) -> HttpResponse {
    match topic_queue.poll().await {
        PollTopicResult::Topic(topic) => {
            tracing::info!("Returning topic of {} bytes", topic.len());
            HttpResponse::Ok().body(topic)
        }
        PollTopicResult::Empty => HttpResponse::Ok().json(json!({ "error": NO_TOPIC_FOUND })),
    }
}
