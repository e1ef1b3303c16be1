/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::{CopyRange, CopySource, MAX_PART_NUMBER, MIN_PART_NUMBER};

/// Input type for copying an object (or a byte range of it) into one part of a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadPartCopyInput {
    /// The bucket containing the object to copy from.
    pub source_bucket: Option<String>,

    /// The key of the object to copy from.
    pub source_key: Option<String>,

    /// The version of the object to copy from. The latest version is used when not set.
    pub source_version_id: Option<String>,

    /// The bucket the target object is assembled in.
    pub bucket: Option<String>,

    /// The key of the target object.
    pub key: Option<String>,

    /// ID of the multipart upload the part belongs to.
    pub upload_id: Option<String>,

    /// Number of the part being copied, between 1 and 10,000 (inclusive).
    pub part_number: i32,

    /// The first byte of the source object to copy.
    pub begin_index: Option<u64>,

    /// The number of bytes of the source object to copy.
    pub part_size: Option<u64>,
}

impl UploadPartCopyInput {
    /// Creates a new builder-style object to manufacture [`UploadPartCopyInput`](crate::operation::upload_part_copy::UploadPartCopyInput).
    pub fn builder() -> UploadPartCopyInputBuilder {
        UploadPartCopyInputBuilder::default()
    }

    /// The bucket containing the object to copy from.
    pub fn source_bucket(&self) -> Option<&str> {
        self.source_bucket.as_deref()
    }

    /// The key of the object to copy from.
    pub fn source_key(&self) -> Option<&str> {
        self.source_key.as_deref()
    }

    /// The version of the object to copy from.
    pub fn source_version_id(&self) -> Option<&str> {
        self.source_version_id.as_deref()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the target object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// ID of the multipart upload the part belongs to.
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// Number of the part being copied.
    pub fn part_number(&self) -> i32 {
        self.part_number
    }

    /// The first byte of the source object to copy.
    pub fn begin_index(&self) -> Option<u64> {
        self.begin_index
    }

    /// The number of bytes of the source object to copy.
    pub fn part_size(&self) -> Option<u64> {
        self.part_size
    }

    /// The object this part is copied from
    pub fn copy_source(&self) -> CopySource {
        let source = CopySource::new(
            self.source_bucket().unwrap_or_default(),
            self.source_key().unwrap_or_default(),
        );
        match self.source_version_id() {
            Some(version_id) => source.with_version_id(version_id),
            None => source,
        }
    }

    /// The byte range copied into this part, `None` to copy the whole source object
    pub fn copy_range(&self) -> Option<CopyRange> {
        match (self.begin_index, self.part_size) {
            (Some(begin_index), Some(part_size)) => CopyRange::new(begin_index, part_size),
            _ => None,
        }
    }
}

/// A builder for [`UploadPartCopyInput`](crate::operation::upload_part_copy::UploadPartCopyInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct UploadPartCopyInputBuilder {
    pub(crate) source_bucket: Option<String>,
    pub(crate) source_key: Option<String>,
    pub(crate) source_version_id: Option<String>,
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
    pub(crate) part_number: Option<i32>,
    pub(crate) begin_index: Option<u64>,
    pub(crate) part_size: Option<u64>,
}

impl UploadPartCopyInputBuilder {
    /// The bucket containing the object to copy from.
    ///
    /// This field is required.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.source_bucket = Some(input.into());
        self
    }

    /// The bucket containing the object to copy from.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.source_bucket = input;
        self
    }

    /// The bucket containing the object to copy from.
    pub fn get_source_bucket(&self) -> &Option<String> {
        &self.source_bucket
    }

    /// The key of the object to copy from. Any UTF-8 key is accepted, it is percent-encoded
    /// when the request is sent.
    ///
    /// This field is required.
    pub fn source_key(mut self, input: impl Into<String>) -> Self {
        self.source_key = Some(input.into());
        self
    }

    /// The key of the object to copy from.
    pub fn set_source_key(mut self, input: Option<String>) -> Self {
        self.source_key = input;
        self
    }

    /// The key of the object to copy from.
    pub fn get_source_key(&self) -> &Option<String> {
        &self.source_key
    }

    /// The version of the object to copy from.
    pub fn source_version_id(mut self, input: impl Into<String>) -> Self {
        self.source_version_id = Some(input.into());
        self
    }

    /// The version of the object to copy from.
    pub fn set_source_version_id(mut self, input: Option<String>) -> Self {
        self.source_version_id = input;
        self
    }

    /// The version of the object to copy from.
    pub fn get_source_version_id(&self) -> &Option<String> {
        &self.source_version_id
    }

    /// The bucket the target object is assembled in.
    ///
    /// This field is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket the target object is assembled in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket the target object is assembled in.
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

    /// ID of the multipart upload the part belongs to.
    ///
    /// This field is required.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID of the multipart upload the part belongs to.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.upload_id = input;
        self
    }

    /// ID of the multipart upload the part belongs to.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// Number of the part being copied, between 1 and 10,000 (inclusive).
    ///
    /// This field is required.
    pub fn part_number(mut self, input: i32) -> Self {
        self.part_number = Some(input);
        self
    }

    /// Number of the part being copied.
    pub fn set_part_number(mut self, input: Option<i32>) -> Self {
        self.part_number = input;
        self
    }

    /// Number of the part being copied.
    pub fn get_part_number(&self) -> &Option<i32> {
        &self.part_number
    }

    /// The first byte of the source object to copy.
    ///
    /// Must be given together with [`part_size`](Self::part_size).
    pub fn begin_index(mut self, input: u64) -> Self {
        self.begin_index = Some(input);
        self
    }

    /// The first byte of the source object to copy.
    pub fn set_begin_index(mut self, input: Option<u64>) -> Self {
        self.begin_index = input;
        self
    }

    /// The first byte of the source object to copy.
    pub fn get_begin_index(&self) -> &Option<u64> {
        &self.begin_index
    }

    /// The number of bytes of the source object to copy.
    ///
    /// Must be given together with [`begin_index`](Self::begin_index). A range that extends
    /// past the end of the source object is sent as is; the service either copies the whole
    /// object or rejects the request with `InvalidRange`.
    pub fn part_size(mut self, input: u64) -> Self {
        self.part_size = Some(input);
        self
    }

    /// The number of bytes of the source object to copy.
    pub fn set_part_size(mut self, input: Option<u64>) -> Self {
        self.part_size = input;
        self
    }

    /// The number of bytes of the source object to copy.
    pub fn get_part_size(&self) -> &Option<u64> {
        &self.part_size
    }

    /// Consumes the builder and constructs a [`UploadPartCopyInput`](crate::operation::upload_part_copy::UploadPartCopyInput).
    pub fn build(self) -> Result<UploadPartCopyInput, BuildError> {
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

        if self.upload_id.is_none() {
            return Err(BuildError::missing_field(
                "upload_id",
                "An upload ID is required",
            ));
        }

        let part_number = self.part_number.ok_or_else(|| {
            BuildError::missing_field("part_number", "A part number is required")
        })?;
        if !(MIN_PART_NUMBER..=MAX_PART_NUMBER).contains(&part_number) {
            return Err(BuildError::invalid_field(
                "part_number",
                format!("part number {part_number} is outside of {MIN_PART_NUMBER}..={MAX_PART_NUMBER}"),
            ));
        }

        match (self.begin_index, self.part_size) {
            (Some(begin_index), Some(part_size)) => {
                if CopyRange::new(begin_index, part_size).is_none() {
                    return Err(BuildError::invalid_field(
                        "part_size",
                        format!("invalid copy range: {part_size} bytes starting at {begin_index}"),
                    ));
                }
            }
            (Some(_), None) => {
                return Err(BuildError::invalid_field(
                    "part_size",
                    "a part size is required when a begin index is set",
                ))
            }
            (None, Some(_)) => {
                return Err(BuildError::invalid_field(
                    "begin_index",
                    "a begin index is required when a part size is set",
                ))
            }
            (None, None) => {}
        }

        Ok(UploadPartCopyInput {
            source_bucket: self.source_bucket,
            source_key: self.source_key,
            source_version_id: self.source_version_id,
            bucket: self.bucket,
            key: self.key,
            upload_id: self.upload_id,
            part_number,
            begin_index: self.begin_index,
            part_size: self.part_size,
        })
    }
}
