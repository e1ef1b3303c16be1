/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;
use aws_smithy_types::DateTime;

use crate::types::PartETag;

/// Output type for a single part copy
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadPartCopyOutput {
    /// Number of the part that was copied.
    pub part_number: i32,

    /// Entity tag of the copied part.
    pub e_tag: String,

    /// Date and time at which the part was copied.
    pub last_modified: Option<DateTime>,

    /// The version of the source object that was copied, if versioning is enabled on the source bucket.
    pub copy_source_version_id: Option<String>,

    /// The ID of the `UploadPartCopy` request.
    pub request_id: Option<String>,
}

impl UploadPartCopyOutput {
    /// Creates a new builder-style object to manufacture [`UploadPartCopyOutput`](crate::operation::upload_part_copy::UploadPartCopyOutput).
    pub fn builder() -> UploadPartCopyOutputBuilder {
        UploadPartCopyOutputBuilder::default()
    }

    /// Number of the part that was copied.
    pub fn part_number(&self) -> i32 {
        self.part_number
    }

    /// Entity tag of the copied part.
    pub fn e_tag(&self) -> &str {
        &self.e_tag
    }

    /// Date and time at which the part was copied.
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// The version of the source object that was copied.
    pub fn copy_source_version_id(&self) -> Option<&str> {
        self.copy_source_version_id.as_deref()
    }

    /// The ID of the `UploadPartCopy` request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The part number and ETag pair to pass when completing the upload
    pub fn part_etag(&self) -> PartETag {
        PartETag {
            part_number: self.part_number,
            e_tag: self.e_tag.clone(),
            size: None,
            last_modified: self.last_modified,
        }
    }
}

/// A builder for [`UploadPartCopyOutput`](crate::operation::upload_part_copy::UploadPartCopyOutput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct UploadPartCopyOutputBuilder {
    pub(crate) part_number: Option<i32>,
    pub(crate) e_tag: Option<String>,
    pub(crate) last_modified: Option<DateTime>,
    pub(crate) copy_source_version_id: Option<String>,
    pub(crate) request_id: Option<String>,
}

impl UploadPartCopyOutputBuilder {
    /// Number of the part that was copied.
    pub fn part_number(mut self, input: i32) -> Self {
        self.part_number = Some(input);
        self
    }

    /// Entity tag of the copied part.
    pub fn e_tag(mut self, input: impl Into<String>) -> Self {
        self.e_tag = Some(input.into());
        self
    }

    /// Date and time at which the part was copied.
    pub fn set_last_modified(mut self, input: Option<DateTime>) -> Self {
        self.last_modified = input;
        self
    }

    /// The version of the source object that was copied.
    pub fn set_copy_source_version_id(mut self, input: Option<String>) -> Self {
        self.copy_source_version_id = input;
        self
    }

    /// The ID of the `UploadPartCopy` request.
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Consumes the builder and constructs a [`UploadPartCopyOutput`](crate::operation::upload_part_copy::UploadPartCopyOutput).
    pub fn build(self) -> Result<UploadPartCopyOutput, BuildError> {
        Ok(UploadPartCopyOutput {
            part_number: self.part_number.ok_or_else(|| {
                BuildError::missing_field("part_number", "A part number is required")
            })?,
            e_tag: self
                .e_tag
                .ok_or_else(|| BuildError::missing_field("e_tag", "An ETag is required"))?,
            last_modified: self.last_modified,
            copy_source_version_id: self.copy_source_version_id,
            request_id: self.request_id,
        })
    }
}
