/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for aborting a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct AbortMultipartUploadInput {
    /// The bucket the target object was being assembled in.
    pub bucket: Option<String>,

    /// The key of the target object.
    pub key: Option<String>,

    /// ID of the multipart upload to abort.
    pub upload_id: Option<String>,
}

impl AbortMultipartUploadInput {
    /// Creates a new builder-style object to manufacture [`AbortMultipartUploadInput`](crate::operation::abort_multipart_upload::AbortMultipartUploadInput).
    pub fn builder() -> AbortMultipartUploadInputBuilder {
        AbortMultipartUploadInputBuilder::default()
    }

    /// The bucket the target object was being assembled in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the target object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// ID of the multipart upload to abort.
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }
}

/// A builder for [`AbortMultipartUploadInput`](crate::operation::abort_multipart_upload::AbortMultipartUploadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct AbortMultipartUploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
}

impl AbortMultipartUploadInputBuilder {
    /// The bucket the target object was being assembled in.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket the target object was being assembled in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket the target object was being assembled in.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key of the target object.
    ///
    /// This field is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the target object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key of the target object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// ID of the multipart upload to abort.
    ///
    /// This field is required.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID of the multipart upload to abort.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.upload_id = input;
        self
    }

    /// ID of the multipart upload to abort.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// Consumes the builder and constructs a [`AbortMultipartUploadInput`](crate::operation::abort_multipart_upload::AbortMultipartUploadInput).
    pub fn build(self) -> Result<AbortMultipartUploadInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        if self.upload_id.is_none() {
            return Err(BuildError::missing_field(
                "upload_id",
                "An upload ID is required",
            ));
        }

        Ok(AbortMultipartUploadInput {
            bucket: self.bucket,
            key: self.key,
            upload_id: self.upload_id,
        })
    }
}
