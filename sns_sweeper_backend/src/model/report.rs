use std::fmt;

use super::{Subscription, SubscriptionArn, TopicArn};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Outcome {
    pub subscription: SubscriptionArn,
    pub endpoint: String,
    pub protocol: Option<String>,
}

impl From<&Subscription> for Outcome {
    fn from(value: &Subscription) -> Self {
        Self {
            subscription: value.arn.clone(),
            endpoint: value.endpoint.clone(),
            protocol: value.protocol.clone(),
        }
    }
}

/// What a single sweep of one topic did, in the order subscriptions were listed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CleanupReport {
    pub topic: TopicArn,
    pub dry_run: bool,
    pub kept: Vec<Outcome>,
    /// Unsubscribed, or in a dry run, the subscriptions that would have been.
    pub deleted: Vec<Outcome>,
    /// Orphaned but still pending confirmation, so there is nothing to unsubscribe.
    pub skipped: Vec<Outcome>,
}

impl CleanupReport {
    pub fn new(topic: TopicArn, dry_run: bool) -> Self {
        Self {
            topic,
            dry_run,
            kept: vec![],
            deleted: vec![],
            skipped: vec![],
        }
    }

    pub fn total(&self) -> usize {
        self.kept.len() + self.deleted.len() + self.skipped.len()
    }
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deleted_label = if self.dry_run { "would delete" } else { "deleted" };

        for outcome in &self.deleted {
            writeln!(f, "{deleted_label}\t{}\t{}", outcome.endpoint, outcome.subscription)?;
        }
        for outcome in &self.skipped {
            writeln!(f, "skipped\t{}\t{}", outcome.endpoint, outcome.subscription)?;
        }

        writeln!(
            f,
            "{}: {} subscriptions, {} kept, {} {deleted_label}, {} skipped",
            self.topic,
            self.total(),
            self.kept.len(),
            self.deleted.len(),
            self.skipped.len(),
        )
    }
}
