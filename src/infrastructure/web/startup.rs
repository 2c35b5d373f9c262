use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    middleware::NormalizePath,
    web::{self, Data},
    App, HttpServer,
};
use tracing_actix_web::TracingLogger;

use crate::application::queue_service::TopicQueue;

use super::routes::{connections, health_check, messages, topics};

pub const CONNECTIONS_PATH: &str = "/connections";
pub const CHECK_TOPICS_PATH: &str = "/checktopics";
pub const GENERIC_INVITE_PATH: &str = "/generic-invite";
pub const BASIC_MESSAGE_PATH: &str = "/basic-message";

pub fn run(
    listener: TcpListener,
    topic_queue: TopicQueue,
    max_payload_bytes: usize,
) -> Result<Server, std::io::Error> {
    let topic_queue = web::Data::new(topic_queue);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "HEAD"])
            .allow_any_header();

        App::new()
            .wrap(NormalizePath::trim())
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::PayloadConfig::new(max_payload_bytes))
            .app_data(Data::clone(&topic_queue))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource(CONNECTIONS_PATH).route(web::post().to(connections::connections)),
            )
            .service(web::resource(CHECK_TOPICS_PATH).route(web::get().to(topics::check_topics)))
            .service(
                web::resource(GENERIC_INVITE_PATH).route(web::post().to(messages::messages)),
            )
            .service(web::resource(BASIC_MESSAGE_PATH).route(web::post().to(messages::messages)))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
