use std::time::Duration;

use tokio::sync::{
    mpsc::{self, Receiver, Sender},
    Mutex,
};

use crate::common::{configuration::RelaySettings, errors::QueueError, types::EventPayload};

use super::PollTopicResult;

/// Bounded FIFO shared by every ingress route and drained by `/checktopics`.
///
/// Producers hold clones of the channel sender, so concurrent submissions never
/// interleave inside a payload. The single receiver is guarded by a mutex; a
/// poll acquires it and waits for the next item under one deadline.
#[derive(Debug)]
pub struct TopicQueue {
    sender: Sender<EventPayload>,
    receiver: Mutex<Receiver<EventPayload>>,
    capacity: usize,
    poll_timeout: Duration,
}

impl TopicQueue {
    pub fn new(capacity: usize, poll_timeout: Duration) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        let (sender, receiver) = mpsc::channel::<EventPayload>(capacity);
        Ok(Self {
            sender,
            receiver: Mutex::new(receiver),
            capacity,
            poll_timeout,
        })
    }

    pub fn from_settings(settings: &RelaySettings) -> Result<Self, QueueError> {
        Self::new(settings.capacity, settings.poll_timeout())
    }

    /// Appends a payload, waiting for a free slot while the queue is full.
    pub async fn submit(&self, payload: EventPayload) -> Result<(), QueueError> {
        self.sender
            .send(payload)
            .await
            .map_err(|_| QueueError::Closed)?;
        tracing::debug!("Topic queue depth is now {}", self.pending());
        Ok(())
    }

    /// Takes the oldest payload, or reports `Empty` once the poll timeout elapses.
    pub async fn poll(&self) -> PollTopicResult<EventPayload> {
        let next_topic = tokio::time::timeout(self.poll_timeout, async {
            let mut receiver = self.receiver.lock().await;
            receiver.recv().await
        })
        .await;

        match next_topic {
            Ok(Some(topic)) => PollTopicResult::Topic(topic),
            // The queue owns a sender, so `None` only shows up if it is being torn down.
            Ok(None) | Err(_) => PollTopicResult::Empty,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// Number of payloads waiting to be polled.
    pub fn pending(&self) -> usize {
        self.capacity - self.sender.capacity()
    }
}
