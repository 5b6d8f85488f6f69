use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use sns_sweeper_backend::{
    client::{QueueService, SubscriptionPage, SubscriptionService},
    model::{EndpointArn, QueueExistence, Subscription, SubscriptionArn, TopicArn},
    BackendError,
};

pub fn topic() -> TopicArn {
    TopicArn("arn:aws:sns:r:a:replica-search-events".into())
}

pub fn subscription(id: &str, endpoint: &str) -> Subscription {
    Subscription {
        arn: SubscriptionArn(id.into()),
        endpoint: endpoint.into(),
        protocol: Some("sqs".into()),
    }
}

#[derive(Default)]
pub struct TopicState {
    pub subscriptions: Vec<Subscription>,
    pub unsubscribed: Vec<SubscriptionArn>,
    pub list_calls: usize,
}

/// An in-memory SNS topic. Continuation tokens name the first subscription of the next
/// page, so unsubscribing while paging neither skips nor repeats anything.
pub struct FakeTopic {
    page_size: usize,
    state: Mutex<TopicState>,
}

impl FakeTopic {
    pub fn new(page_size: usize, subscriptions: Vec<Subscription>) -> Self {
        Self {
            page_size,
            state: Mutex::new(TopicState {
                subscriptions,
                ..Default::default()
            }),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, TopicState> {
        self.state.lock().unwrap()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.state()
            .subscriptions
            .iter()
            .map(|s| s.endpoint.clone())
            .collect()
    }
}

#[async_trait]
impl SubscriptionService for FakeTopic {
    async fn list_subscriptions(
        &self,
        topic: &TopicArn,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, BackendError> {
        let mut state = self.state();
        state.list_calls += 1;

        let start = match next_token {
            None => 0,
            Some(token) => state
                .subscriptions
                .iter()
                .position(|s| s.arn.0 == token)
                .ok_or_else(|| BackendError::ListSubscriptions {
                    topic: topic.clone(),
                    source: format!("invalid token {token}").into(),
                })?,
        };
        let end = (start + self.page_size).min(state.subscriptions.len());

        Ok(SubscriptionPage {
            subscriptions: state.subscriptions[start..end].to_vec(),
            next_token: state.subscriptions.get(end).map(|s| s.arn.0.clone()),
        })
    }

    async fn unsubscribe(&self, subscription: &SubscriptionArn) -> Result<(), BackendError> {
        let mut state = self.state();
        state.subscriptions.retain(|s| s.arn != *subscription);
        state.unsubscribed.push(subscription.clone());
        Ok(())
    }
}

/// An in-memory SQS account holding the named queues.
#[derive(Default)]
pub struct FakeQueues {
    pub existing: HashSet<String>,
    /// Lookups for these queues fail as if access were denied.
    pub denied: HashSet<String>,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeQueues {
    pub fn with_queues(names: &[&str]) -> Self {
        Self {
            existing: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl QueueService for FakeQueues {
    async fn queue_exists(&self, queue: &EndpointArn) -> Result<QueueExistence, BackendError> {
        self.lookups.lock().unwrap().push(queue.resource.clone());

        if self.denied.contains(&queue.resource) {
            return Err(BackendError::QueueLookup {
                queue: queue.resource.clone(),
                source: "AccessDenied".into(),
            });
        }

        Ok(if self.existing.contains(&queue.resource) {
            QueueExistence::Exists
        } else {
            QueueExistence::Absent
        })
    }
}
