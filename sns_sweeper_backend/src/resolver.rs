use crate::{
    client::QueueService,
    error::BackendError,
    model::{EndpointArn, QueueExistence, QUEUE_SERVICE},
};

/// Decides whether the queue behind a subscription endpoint still exists.
///
/// Only `sqs` endpoints are understood; anything else is an error rather than a guess,
/// since guessing wrong either deletes a live subscription or keeps an orphan forever.
pub struct EndpointResolver<'a, Q: ?Sized> {
    queues: &'a Q,
    expected_region: Option<String>,
}

impl<'a, Q> EndpointResolver<'a, Q>
where
    Q: QueueService + ?Sized,
{
    pub fn new(queues: &'a Q) -> Self {
        Self {
            queues,
            expected_region: None,
        }
    }

    /// Rejects endpoints outside `region`. The queue client can only see its own region,
    /// so a queue elsewhere would look absent.
    pub fn with_expected_region(mut self, region: impl Into<String>) -> Self {
        self.expected_region = Some(region.into());
        self
    }

    pub async fn resolve(&self, endpoint: &str) -> Result<QueueExistence, BackendError> {
        let arn: EndpointArn = endpoint.parse()?;

        if arn.service != QUEUE_SERVICE {
            return Err(BackendError::UnexpectedService {
                endpoint: endpoint.to_owned(),
                service: arn.service,
            });
        }

        if let Some(expected) = &self.expected_region {
            if arn.region != *expected {
                return Err(BackendError::UnexpectedRegion {
                    endpoint: endpoint.to_owned(),
                    region: arn.region,
                    expected: expected.clone(),
                });
            }
        }

        self.queues.queue_exists(&arn).await
    }
}
