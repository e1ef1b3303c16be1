/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Builder;
use crate::{
    types::{ConcurrencyMode, PartSize},
    Config,
};

/// Load part copy [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
}

impl ConfigLoader {
    /// Minimum source object size that should trigger a multipart copy.
    ///
    /// The minimum is 5 MiB, any value less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn multipart_threshold(mut self, threshold: PartSize) -> Self {
        self.builder = self.builder.multipart_threshold(threshold);
        self
    }

    /// The target size of each ranged part copy when copying a whole object.
    ///
    /// NOTE: The actual part size used may be larger than the configured part size if
    /// the current value would result in more than 10,000 parts for a copy request.
    ///
    /// Default is [PartSize::Auto]
    pub fn part_size(mut self, part_size: PartSize) -> Self {
        self.builder = self.builder.part_size(part_size);
        self
    }

    /// Set the concurrency mode this client should use.
    ///
    /// This sets the mode used for concurrent in-flight requests across _all_ operations.
    /// Default is [ConcurrencyMode::Auto].
    pub fn concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.builder = self.builder.concurrency(mode);
        self
    }

    /// Send requests to an S3 compatible service at the given endpoint instead of
    /// the endpoint resolved from the environment.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Address buckets as part of the path (`https://endpoint/bucket/key`) rather than as a
    /// virtual host (`https://bucket.endpoint/key`).
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let shared_config: aws_types::SdkConfig = aws_config::from_env().load().await;
        let s3_config = s3_config(&shared_config, self.endpoint_url, self.force_path_style);
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
        self.builder.client(s3_client).build()
    }
}

/// Build the S3 client configuration, keeping the shared endpoint unless an override is set.
fn s3_config(
    shared_config: &aws_types::SdkConfig,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
) -> aws_sdk_s3::Config {
    tracing::debug!(
        shared_endpoint = ?shared_config.endpoint_url(),
        endpoint_override = ?endpoint_url,
        force_path_style = ?force_path_style,
        "loading object storage client configuration"
    );
    let mut builder = aws_sdk_s3::config::Builder::from(shared_config);
    if let Some(endpoint_url) = endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }
    if let Some(force_path_style) = force_path_style {
        builder = builder.force_path_style(force_path_style);
    }
    builder.build()
}
