pub mod topic_queue;

pub use topic_queue::TopicQueue;

/// Outcome of a single poll against the topic queue.
#[derive(Debug, PartialEq, Eq)]
pub enum PollTopicResult<T> {
    Topic(T),
    Empty,
}
