use crate::model::{SubscriptionArn, TopicArn};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("malformed endpoint identifier {endpoint:?}")]
    MalformedEndpoint { endpoint: String },

    #[error("endpoint {endpoint:?} belongs to service {service:?}, only sqs endpoints are supported")]
    UnexpectedService { endpoint: String, service: String },

    #[error("endpoint {endpoint:?} is in region {region:?}, expected {expected:?}")]
    UnexpectedRegion {
        endpoint: String,
        region: String,
        expected: String,
    },

    #[error("malformed subscription record: {reason}")]
    MalformedSubscription { reason: String },

    #[error("failed to list subscriptions for topic {topic}")]
    ListSubscriptions {
        topic: TopicArn,
        #[source]
        source: BoxError,
    },

    #[error("failed to unsubscribe {subscription}")]
    Unsubscribe {
        subscription: SubscriptionArn,
        #[source]
        source: BoxError,
    },

    #[error("failed to look up queue {queue:?}")]
    QueueLookup {
        queue: String,
        #[source]
        source: BoxError,
    },
}
