use async_trait::async_trait;

use crate::{
    error::BackendError,
    model::{EndpointArn, QueueExistence, Subscription, SubscriptionArn, TopicArn},
};

/// One response of a paginated subscription listing.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPage {
    pub subscriptions: Vec<Subscription>,
    pub next_token: Option<String>,
}

/// The publish/subscribe side: listing a topic's subscriptions and removing them.
#[async_trait]
pub trait SubscriptionService: Sync {
    async fn list_subscriptions(
        &self,
        topic: &TopicArn,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, BackendError>;

    async fn unsubscribe(&self, subscription: &SubscriptionArn) -> Result<(), BackendError>;
}

/// The queueing side. Implementations must map the service's "no such queue"
/// response to [`QueueExistence::Absent`] and every other failure to an error.
#[async_trait]
pub trait QueueService: Sync {
    async fn queue_exists(&self, queue: &EndpointArn) -> Result<QueueExistence, BackendError>;
}
