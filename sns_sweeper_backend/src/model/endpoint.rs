use std::{fmt, str::FromStr};

use crate::error::BackendError;

/// Service segment of the only endpoint type the sweeper knows how to check.
pub const QUEUE_SERVICE: &str = "sqs";

/// A parsed `arn:partition:service:region:account:resource` endpoint identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointArn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    pub resource: String,
}

impl FromStr for EndpointArn {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();

        match fields.as_slice() {
            ["arn", partition, service, region, account, resource]
                if !service.is_empty() && !resource.is_empty() =>
            {
                Ok(Self {
                    partition: partition.to_string(),
                    service: service.to_string(),
                    region: region.to_string(),
                    account: account.to_string(),
                    resource: resource.to_string(),
                })
            }
            _ => Err(BackendError::MalformedEndpoint {
                endpoint: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for EndpointArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account, self.resource
        )
    }
}
