/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for completing a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteMultipartUploadOutput {
    /// The URI that identifies the newly created object.
    pub location: Option<String>,

    /// The bucket containing the newly created object.
    pub bucket: String,

    /// The key of the newly created object.
    pub key: String,

    /// Entity tag of the newly created object. For a multipart object this is
    /// not an MD5 digest of the object data, see [`multipart_etag`](crate::etag::multipart_etag).
    pub e_tag: Option<String>,

    /// Version ID of the newly created object, if versioning is enabled on the bucket.
    pub version_id: Option<String>,

    /// The ID of the `CompleteMultipartUpload` request.
    pub request_id: Option<String>,
}

impl CompleteMultipartUploadOutput {
    /// Creates a new builder-style object to manufacture [`CompleteMultipartUploadOutput`](crate::operation::complete_multipart_upload::CompleteMultipartUploadOutput).
    pub fn builder() -> CompleteMultipartUploadOutputBuilder {
        CompleteMultipartUploadOutputBuilder::default()
    }

    /// The URI that identifies the newly created object.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The bucket containing the newly created object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the newly created object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Entity tag of the newly created object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the newly created object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The ID of the `CompleteMultipartUpload` request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// A builder for [`CompleteMultipartUploadOutput`](crate::operation::complete_multipart_upload::CompleteMultipartUploadOutput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CompleteMultipartUploadOutputBuilder {
    pub(crate) location: Option<String>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) request_id: Option<String>,
}

impl CompleteMultipartUploadOutputBuilder {
    /// The URI that identifies the newly created object.
    pub fn set_location(mut self, input: Option<String>) -> Self {
        self.location = input;
        self
    }

    /// The bucket containing the newly created object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The key of the newly created object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Entity tag of the newly created object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Entity tag of the newly created object.
    pub fn get_e_tag(&self) -> &Option<String> {
        &self.e_tag
    }

    /// Version ID of the newly created object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// The ID of the `CompleteMultipartUpload` request.
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> CompleteMultipartUploadOutput {
        CompleteMultipartUploadOutput {
            location: self.location,
            bucket: self.bucket.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            e_tag: self.e_tag,
            version_id: self.version_id,
            request_id: self.request_id,
        }
    }
}
