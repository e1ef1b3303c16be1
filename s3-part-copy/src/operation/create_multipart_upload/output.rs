/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Output type for starting a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CreateMultipartUploadOutput {
    /// The bucket the target object is assembled in.
    pub bucket: String,

    /// The key of the target object.
    pub key: String,

    /// ID for the initiated multipart upload.
    pub upload_id: String,

    /// The ID of the `CreateMultipartUpload` request.
    pub request_id: Option<String>,
}

impl CreateMultipartUploadOutput {
    /// Creates a new builder-style object to manufacture [`CreateMultipartUploadOutput`](crate::operation::create_multipart_upload::CreateMultipartUploadOutput).
    pub fn builder() -> CreateMultipartUploadOutputBuilder {
        CreateMultipartUploadOutputBuilder::default()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the target object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// ID for the initiated multipart upload.
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    /// The ID of the `CreateMultipartUpload` request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// A builder for [`CreateMultipartUploadOutput`](crate::operation::create_multipart_upload::CreateMultipartUploadOutput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CreateMultipartUploadOutputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
    pub(crate) request_id: Option<String>,
}

impl CreateMultipartUploadOutputBuilder {
    /// The bucket the target object is assembled in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The key of the target object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// ID for the initiated multipart upload.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID for the initiated multipart upload.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// The ID of the `CreateMultipartUpload` request.
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Consumes the builder and constructs a [`CreateMultipartUploadOutput`](crate::operation::create_multipart_upload::CreateMultipartUploadOutput).
    pub fn build(self) -> Result<CreateMultipartUploadOutput, BuildError> {
        Ok(CreateMultipartUploadOutput {
            bucket: self.bucket.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            upload_id: self.upload_id.ok_or_else(|| {
                BuildError::missing_field("upload_id", "An upload ID is required")
            })?,
            request_id: self.request_id,
        })
    }
}
