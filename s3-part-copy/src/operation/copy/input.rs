/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::FailedMultipartUploadPolicy;

/// Input type for copying an entire object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CopyInput {
    /// The bucket containing the object to copy.
    pub source_bucket: Option<String>,

    /// The key of the object to copy.
    pub source_key: Option<String>,

    /// The version of the object to copy. The latest version is used when not set.
    pub source_version_id: Option<String>,

    /// The bucket to copy the object into.
    pub bucket: Option<String>,

    /// The key of the copied object.
    pub key: Option<String>,

    /// What to do with the multipart upload when a part copy fails.
    pub failed_multipart_upload_policy: FailedMultipartUploadPolicy,
}

impl CopyInput {
    /// Creates a new builder-style object to manufacture [`CopyInput`](crate::operation::copy::CopyInput).
    pub fn builder() -> CopyInputBuilder {
        CopyInputBuilder::default()
    }

    /// The bucket containing the object to copy.
    pub fn source_bucket(&self) -> Option<&str> {
        self.source_bucket.as_deref()
    }

    /// The key of the object to copy.
    pub fn source_key(&self) -> Option<&str> {
        self.source_key.as_deref()
    }

    /// The version of the object to copy.
    pub fn source_version_id(&self) -> Option<&str> {
        self.source_version_id.as_deref()
    }

    /// The bucket to copy the object into.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the copied object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn failed_multipart_upload_policy(&self) -> &FailedMultipartUploadPolicy {
        &self.failed_multipart_upload_policy
    }
}

/// A builder for [`CopyInput`](crate::operation::copy::CopyInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CopyInputBuilder {
    pub(crate) source_bucket: Option<String>,
    pub(crate) source_key: Option<String>,
    pub(crate) source_version_id: Option<String>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) failed_multipart_upload_policy: Option<FailedMultipartUploadPolicy>,
}

impl CopyInputBuilder {
    /// The bucket containing the object to copy.
    ///
    /// This field is required.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.source_bucket = Some(input.into());
        self
    }

    /// The bucket containing the object to copy.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.source_bucket = input;
        self
    }

    /// The bucket containing the object to copy.
    pub fn get_source_bucket(&self) -> &Option<String> {
        &self.source_bucket
    }

    /// The key of the object to copy.
    ///
    /// This field is required.
    pub fn source_key(mut self, input: impl Into<String>) -> Self {
        self.source_key = Some(input.into());
        self
    }

    /// The key of the object to copy.
    pub fn set_source_key(mut self, input: Option<String>) -> Self {
        self.source_key = input;
        self
    }

    /// The key of the object to copy.
    pub fn get_source_key(&self) -> &Option<String> {
        &self.source_key
    }

    /// The version of the object to copy.
    pub fn source_version_id(mut self, input: impl Into<String>) -> Self {
        self.source_version_id = Some(input.into());
        self
    }

    /// The version of the object to copy.
    pub fn set_source_version_id(mut self, input: Option<String>) -> Self {
        self.source_version_id = input;
        self
    }

    /// The version of the object to copy.
    pub fn get_source_version_id(&self) -> &Option<String> {
        &self.source_version_id
    }

    /// The bucket to copy the object into.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to copy the object into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to copy the object into.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key of the copied object.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the copied object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key of the copied object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// What to do with the multipart upload when a part copy fails.
    ///
    /// Default is [`FailedMultipartUploadPolicy::AbortUpload`].
    pub fn failed_multipart_upload_policy(mut self, input: FailedMultipartUploadPolicy) -> Self {
        self.failed_multipart_upload_policy = Some(input);
        self
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn set_failed_multipart_upload_policy(
        mut self,
        input: Option<FailedMultipartUploadPolicy>,
    ) -> Self {
        self.failed_multipart_upload_policy = input;
        self
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn get_failed_multipart_upload_policy(&self) -> &Option<FailedMultipartUploadPolicy> {
        &self.failed_multipart_upload_policy
    }

    /// Consumes the builder and constructs a [`CopyInput`](crate::operation::copy::CopyInput).
    pub fn build(self) -> Result<CopyInput, BuildError> {
        if self.source_bucket.is_none() {
            return Err(BuildError::missing_field(
                "source_bucket",
                "A source bucket is required",
            ));
        }

        if self.source_key.is_none() {
            return Err(BuildError::missing_field(
                "source_key",
                "A source key is required",
            ));
        }

        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        Ok(CopyInput {
            source_bucket: self.source_bucket,
            source_key: self.source_key,
            source_version_id: self.source_version_id,
            bucket: self.bucket,
            key: self.key,
            failed_multipart_upload_policy: self.failed_multipart_upload_policy.unwrap_or_default(),
        })
    }
}
