mod endpoint;
mod report;
pub use endpoint::{EndpointArn, QUEUE_SERVICE};
pub use report::{CleanupReport, Outcome};

use std::fmt;

/// The subscription identifier SNS reports for subscriptions that were never confirmed.
pub const PENDING_CONFIRMATION: &str = "PendingConfirmation";

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct TopicArn(pub String);

impl fmt::Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SubscriptionArn(pub String);

impl fmt::Display for SubscriptionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub arn: SubscriptionArn,
    /// Raw endpoint identifier, e.g. `arn:aws:sqs:eu-west-1:123456789012:orders`.
    pub endpoint: String,
    pub protocol: Option<String>,
}

impl Subscription {
    pub fn is_pending_confirmation(&self) -> bool {
        self.arn.0 == PENDING_CONFIRMATION
    }
}

/// Outcome of a queue lookup. Lookup failures are carried by the surrounding `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueExistence {
    Exists,
    Absent,
}
