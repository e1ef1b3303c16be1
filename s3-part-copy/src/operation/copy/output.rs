/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::PartETag;

/// Output type for copying an entire object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CopyOutput {
    /// The bucket the object was copied into.
    pub bucket: String,

    /// The key of the copied object.
    pub key: String,

    /// The size of the copied object in bytes.
    pub content_length: u64,

    /// ID of the multipart upload used, `None` when the object was copied with a single request.
    pub upload_id: Option<String>,

    /// Entity tag of the copied object.
    pub e_tag: Option<String>,

    /// The URI that identifies the copied object (multipart copies only).
    pub location: Option<String>,

    /// Version ID of the copied object, if versioning is enabled on the bucket.
    pub version_id: Option<String>,

    /// The parts the object was assembled from (multipart copies only).
    pub parts: Option<Vec<PartETag>>,
}

impl CopyOutput {
    /// Creates a new builder-style object to manufacture [`CopyOutput`](crate::operation::copy::CopyOutput).
    pub fn builder() -> CopyOutputBuilder {
        CopyOutputBuilder::default()
    }

    /// The bucket the object was copied into.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the copied object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The size of the copied object in bytes.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// ID of the multipart upload used.
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// Entity tag of the copied object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// The URI that identifies the copied object.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Version ID of the copied object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The parts the object was assembled from, in part number order.
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.parts.is_none()`
    pub fn parts(&self) -> &[PartETag] {
        self.parts.as_deref().unwrap_or_default()
    }
}

/// A builder for [`CopyOutput`](crate::operation::copy::CopyOutput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CopyOutputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) content_length: u64,
    pub(crate) upload_id: Option<String>,
    pub(crate) e_tag: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) parts: Option<Vec<PartETag>>,
}

impl CopyOutputBuilder {
    /// The bucket the object was copied into.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The key of the copied object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The size of the copied object in bytes.
    pub fn content_length(mut self, input: u64) -> Self {
        self.content_length = input;
        self
    }

    /// ID of the multipart upload used.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID of the multipart upload used.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// Entity tag of the copied object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// The URI that identifies the copied object.
    pub fn set_location(mut self, input: Option<String>) -> Self {
        self.location = input;
        self
    }

    /// Version ID of the copied object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// The parts the object was assembled from.
    pub fn set_parts(mut self, input: Option<Vec<PartETag>>) -> Self {
        self.parts = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> CopyOutput {
        CopyOutput {
            bucket: self.bucket.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            content_length: self.content_length,
            upload_id: self.upload_id,
            e_tag: self.e_tag,
            location: self.location,
            version_id: self.version_id,
            parts: self.parts,
        }
    }
}
