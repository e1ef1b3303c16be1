/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;

use crate::types::{ConcurrencyMode, PartSize};
use crate::MEBIBYTE;

pub(crate) mod loader;

/// Minimum part size in bytes for any part other than the last one
pub(crate) const MIN_MULTIPART_PART_SIZE_BYTES: u64 = 5 * MEBIBYTE;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    multipart_threshold: PartSize,
    target_part_size: PartSize,
    concurrency: ConcurrencyMode,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a reference to the multipart copy threshold
    pub fn multipart_threshold(&self) -> &PartSize {
        &self.multipart_threshold
    }

    /// Returns a reference to the target part size to use for copy transfers
    pub fn part_size(&self) -> &PartSize {
        &self.target_part_size
    }

    /// Returns the concurrency mode to use for copy transfers.
    ///
    /// This is the mode used for concurrent in-flight requests across _all_ operations.
    pub fn concurrency(&self) -> &ConcurrencyMode {
        &self.concurrency
    }

    /// The S3 client instance that will be used to send requests to the object storage service.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    multipart_threshold_part_size: PartSize,
    target_part_size: PartSize,
    concurrency: ConcurrencyMode,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Minimum source object size that should trigger a multipart copy.
    ///
    /// Sources smaller than this are copied with a single `CopyObject` request.
    /// The minimum is 5 MiB, any value less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn multipart_threshold(self, threshold: PartSize) -> Self {
        let threshold = match threshold {
            PartSize::Target(part_size) => {
                PartSize::Target(cmp::max(part_size, MIN_MULTIPART_PART_SIZE_BYTES))
            }
            tps => tps,
        };

        self.set_multipart_threshold(threshold)
    }

    /// The target size of each ranged part copy when copying a whole object.
    ///
    /// NOTE: The actual part size used may be larger than the configured part size if
    /// the current value would result in more than 10,000 parts for a copy request.
    ///
    /// The minimum part size is 5 MiB, any part size less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn part_size(self, part_size: PartSize) -> Self {
        let part_size = match part_size {
            PartSize::Target(part_size) => {
                PartSize::Target(cmp::max(part_size, MIN_MULTIPART_PART_SIZE_BYTES))
            }
            tps => tps,
        };

        self.set_target_part_size(part_size)
    }

    /// Minimum source object size that should trigger a multipart copy.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_multipart_threshold(mut self, threshold: PartSize) -> Self {
        self.multipart_threshold_part_size = threshold;
        self
    }

    /// Target part size for a multipart copy.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_target_part_size(mut self, part_size: PartSize) -> Self {
        self.target_part_size = part_size;
        self
    }

    /// Set the concurrency mode this client should use.
    ///
    /// This sets the mode used for concurrent in-flight requests across _all_ operations.
    /// Default is [ConcurrencyMode::Auto].
    pub fn concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency = mode;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            multipart_threshold: self.multipart_threshold_part_size,
            target_part_size: self.target_part_size,
            concurrency: self.concurrency,
            client: self.client.expect("client set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, MIN_MULTIPART_PART_SIZE_BYTES};
    use crate::types::PartSize;
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    #[test]
    fn test_part_size_rounded_up_to_minimum() {
        let head_object =
            mock!(aws_sdk_s3::Client::head_object).then_output(|| HeadObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&head_object]);
        let config = Config::builder()
            .part_size(PartSize::Target(64 * 1024))
            .multipart_threshold(PartSize::Target(1))
            .client(client)
            .build();

        assert!(matches!(
            config.part_size(),
            PartSize::Target(size) if *size == MIN_MULTIPART_PART_SIZE_BYTES
        ));
        assert!(matches!(
            config.multipart_threshold(),
            PartSize::Target(size) if *size == MIN_MULTIPART_PART_SIZE_BYTES
        ));
    }
}
