use actix_web::web::Bytes;

/// One received event body, kept exactly as it arrived on the wire.
pub type EventPayload = Bytes;

/// Body returned by `/checktopics` when nothing arrived before the poll timeout.
pub const NO_TOPIC_FOUND: &str = "no topic found in queue";
