//! [`SubscriptionService`] and [`QueueService`] backed by the AWS SDK clients.

use async_trait::async_trait;
use aws_sdk_sqs::operation::get_queue_url::GetQueueUrlError;

use crate::{
    client::{QueueService, SubscriptionPage, SubscriptionService},
    error::BackendError,
    model::{EndpointArn, QueueExistence, Subscription, SubscriptionArn, TopicArn},
};

#[async_trait]
impl SubscriptionService for aws_sdk_sns::Client {
    async fn list_subscriptions(
        &self,
        topic: &TopicArn,
        next_token: Option<String>,
    ) -> Result<SubscriptionPage, BackendError> {
        let output = self
            .list_subscriptions_by_topic()
            .topic_arn(&topic.0)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|err| BackendError::ListSubscriptions {
                topic: topic.clone(),
                source: Box::new(aws_sdk_sns::Error::from(err)),
            })?;

        let subscriptions = output
            .subscriptions()
            .iter()
            .map(|sub| subscription_from_sdk(topic, sub))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SubscriptionPage {
            subscriptions,
            next_token: output.next_token().map(str::to_owned),
        })
    }

    async fn unsubscribe(&self, subscription: &SubscriptionArn) -> Result<(), BackendError> {
        self.unsubscribe()
            .subscription_arn(&subscription.0)
            .send()
            .await
            .map_err(|err| BackendError::Unsubscribe {
                subscription: subscription.clone(),
                source: Box::new(aws_sdk_sns::Error::from(err)),
            })?;

        Ok(())
    }
}

fn subscription_from_sdk(
    topic: &TopicArn,
    sub: &aws_sdk_sns::types::Subscription,
) -> Result<Subscription, BackendError> {
    let arn = sub
        .subscription_arn()
        .ok_or_else(|| BackendError::MalformedSubscription {
            reason: format!("subscription on {topic} has no subscription ARN"),
        })?;

    let endpoint = sub
        .endpoint()
        .ok_or_else(|| BackendError::MalformedSubscription {
            reason: format!("subscription {arn} has no endpoint"),
        })?;

    Ok(Subscription {
        arn: SubscriptionArn(arn.to_owned()),
        endpoint: endpoint.to_owned(),
        protocol: sub.protocol().map(str::to_owned),
    })
}

#[async_trait]
impl QueueService for aws_sdk_sqs::Client {
    async fn queue_exists(&self, queue: &EndpointArn) -> Result<QueueExistence, BackendError> {
        let result = self
            .get_queue_url()
            .queue_name(&queue.resource)
            .queue_owner_aws_account_id(&queue.account)
            .send()
            .await;

        match result {
            Ok(_) => Ok(QueueExistence::Exists),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(GetQueueUrlError::is_queue_does_not_exist) =>
            {
                Ok(QueueExistence::Absent)
            }
            Err(err) => Err(BackendError::QueueLookup {
                queue: queue.resource.clone(),
                source: Box::new(aws_sdk_sqs::Error::from(err)),
            }),
        }
    }
}
