use std::net::TcpListener;

use webhook_relay::application::queue_service::TopicQueue;
use webhook_relay::common::configuration::get_configuration;
use webhook_relay::common::telemetry::{get_subscriber, init_tracing_subscriber};
use webhook_relay::infrastructure::web::startup::run;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let subscriber = get_subscriber("webhook-relay".into(), "info".into(), std::io::stdout);
    init_tracing_subscriber(subscriber);

    let configuration =
        get_configuration().expect("Failed to read configuration, WEBHOOK_PORT must be set");

    let topic_queue =
        TopicQueue::from_settings(&configuration.relay).expect("Invalid topic queue settings");
    tracing::info!(
        capacity = topic_queue.capacity(),
        poll_timeout_ms = topic_queue.poll_timeout().as_millis() as u64,
        "Topic queue ready"
    );

    let listener = TcpListener::bind(configuration.address()).map_err(|err| {
        tracing::error!("Failed to bind {}: {}", configuration.address(), err);
        err
    })?;
    tracing::info!("Webhook relay listening on {}", listener.local_addr()?);

    let server = run(listener, topic_queue, configuration.relay.max_payload_bytes)?;
    if let Err(err) = server.await {
        tracing::error!("webhook server start error {}", err);
        return Err(err);
    }

    Ok(())
}
