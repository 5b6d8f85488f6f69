use futures::TryStreamExt;
use log::{debug, info, warn};

use crate::{
    client::{QueueService, SubscriptionService},
    enumerator,
    error::BackendError,
    model::{CleanupReport, Outcome, QueueExistence, Subscription, TopicArn},
    resolver::EndpointResolver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Delete,
    /// Orphaned, but SNS has no subscription ARN to unsubscribe yet.
    Skip,
}

impl Decision {
    pub fn for_subscription(subscription: &Subscription, existence: QueueExistence) -> Self {
        match existence {
            QueueExistence::Exists => Decision::Keep,
            QueueExistence::Absent if subscription.is_pending_confirmation() => Decision::Skip,
            QueueExistence::Absent => Decision::Delete,
        }
    }
}

/// Sweeps one topic, one subscription at a time.
///
/// Any error stops the sweep where it is. Subscriptions already handled stay handled
/// and the rest are untouched, so running again picks up where this left off.
pub struct Cleaner<'a, S: ?Sized, Q: ?Sized> {
    subscriptions: &'a S,
    resolver: EndpointResolver<'a, Q>,
    dry_run: bool,
}

impl<'a, S, Q> Cleaner<'a, S, Q>
where
    S: SubscriptionService + ?Sized,
    Q: QueueService + ?Sized,
{
    pub fn new(subscriptions: &'a S, resolver: EndpointResolver<'a, Q>) -> Self {
        Self {
            subscriptions,
            resolver,
            dry_run: false,
        }
    }

    /// Decide and report as usual, but never unsubscribe.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self, topic: &TopicArn) -> Result<CleanupReport, BackendError> {
        let mut report = CleanupReport::new(topic.clone(), self.dry_run);

        let subscriptions = enumerator::subscriptions(self.subscriptions, topic);
        futures_util::pin_mut!(subscriptions);

        while let Some(subscription) = subscriptions.try_next().await? {
            let existence = self.resolver.resolve(&subscription.endpoint).await?;
            let decision = Decision::for_subscription(&subscription, existence);
            let protocol = subscription.protocol.as_deref().unwrap_or("unknown");

            match decision {
                Decision::Keep => {
                    info!("keeping {protocol} subscription for {:?}", subscription.endpoint);
                    report.kept.push(Outcome::from(&subscription));
                }
                Decision::Delete if self.dry_run => {
                    info!("would delete {protocol} subscription for {:?}", subscription.endpoint);
                    report.deleted.push(Outcome::from(&subscription));
                }
                Decision::Delete => {
                    info!("deleting {protocol} subscription for {:?}", subscription.endpoint);
                    self.subscriptions.unsubscribe(&subscription.arn).await?;
                    report.deleted.push(Outcome::from(&subscription));
                }
                Decision::Skip => {
                    warn!(
                        "queue for {:?} is gone but its {protocol} subscription is pending confirmation, skipping",
                        subscription.endpoint
                    );
                    report.skipped.push(Outcome::from(&subscription));
                }
            }
        }

        debug!(
            "swept {} subscriptions on {topic}: {} kept, {} deleted, {} skipped",
            report.total(),
            report.kept.len(),
            report.deleted.len(),
            report.skipped.len()
        );

        Ok(report)
    }
}
