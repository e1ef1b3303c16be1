/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_smithy_types::DateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Smallest part number a multipart upload accepts
pub const MIN_PART_NUMBER: i32 = 1;

/// Largest part number a multipart upload accepts
pub const MAX_PART_NUMBER: i32 = 10_000;

/// Characters left unescaped in a copy source key.
///
/// `/` separates "directories" in a key and is kept as is; everything else outside of
/// the RFC 3986 unreserved set is percent-encoded.
const COPY_SOURCE_KEY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// The target part size for a copy request.
#[derive(Debug, Clone, Default)]
pub enum PartSize {
    /// Automatically configure an optimal target part size.
    #[default]
    Auto,

    /// Target part size explicitly given.
    ///
    /// NOTE: This is a suggestion and will be used if possible but may be adjusted for an individual request
    /// as required by the underlying API.
    Target(u64),
}

/// The concurrency mode the client should use for executing requests.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub enum ConcurrencyMode {
    /// Automatically configured concurrency.
    #[default]
    Auto,

    /// Explicit concurrency control
    Explicit(usize),
}

/// Policy for how to handle a failed multipart copy
///
/// Default is to abort the upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FailedMultipartUploadPolicy {
    /// Abort the upload on any individual part failure
    #[default]
    AbortUpload,
    /// Retain any copied parts. The upload ID is logged so the parts can be listed or reused.
    Retain,
}

/// Describes the result of aborting an in-progress multipart upload.
#[derive(Debug, Default)]
pub struct AbortedUpload {
    pub(crate) upload_id: Option<String>,
    pub(crate) request_charged: Option<aws_sdk_s3::types::RequestCharged>,
}

impl AbortedUpload {
    /// Get the multipart upload ID that was cancelled
    ///
    /// Not present for transfers that did not utilize a multipart upload
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// If present, indicates that the requester was successfully charged for the request.
    pub fn request_charged(&self) -> &Option<aws_sdk_s3::types::RequestCharged> {
        &self.request_charged
    }
}

/// The object a part (or a whole object) is copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySource {
    bucket: String,
    key: String,
    version_id: Option<String>,
}

impl CopySource {
    /// Create a copy source for the latest version of `bucket/key`
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            version_id: None,
        }
    }

    /// Copy from a specific version of the source object
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// The source bucket
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The source key (not encoded)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The source version ID, if any
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Render the value of the copy source header: `bucket/encoded-key[?versionId=...]`
    pub fn header_value(&self) -> String {
        let key = utf8_percent_encode(&self.key, COPY_SOURCE_KEY);
        match &self.version_id {
            Some(version_id) => format!(
                "{}/{}?versionId={}",
                self.bucket,
                key,
                utf8_percent_encode(version_id, NON_ALPHANUMERIC)
            ),
            None => format!("{}/{}", self.bucket, key),
        }
    }
}

/// A byte range of the source object to copy into a part.
///
/// Expressed the way callers think about it: where to start and how many bytes to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRange {
    begin_index: u64,
    part_size: u64,
}

impl CopyRange {
    /// Create a new range of `part_size` bytes starting at `begin_index`.
    ///
    /// Returns `None` for an empty range.
    pub fn new(begin_index: u64, part_size: u64) -> Option<Self> {
        if part_size == 0 {
            return None;
        }
        begin_index.checked_add(part_size - 1)?;
        Some(Self {
            begin_index,
            part_size,
        })
    }

    /// The first byte of the range
    pub fn begin_index(&self) -> u64 {
        self.begin_index
    }

    /// The number of bytes in the range
    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// The last byte of the range (inclusive)
    pub fn end_index(&self) -> u64 {
        self.begin_index + self.part_size - 1
    }
}

impl fmt::Display for CopyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bytes={}-{}", self.begin_index, self.end_index())
    }
}

/// The part number and ETag of an uploaded part, as required to complete a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PartETag {
    pub(crate) part_number: i32,
    pub(crate) e_tag: String,
    pub(crate) size: Option<i64>,
    pub(crate) last_modified: Option<DateTime>,
}

impl PartETag {
    /// Create a new part ETag
    pub fn new(part_number: i32, e_tag: impl Into<String>) -> Self {
        Self {
            part_number,
            e_tag: e_tag.into(),
            size: None,
            last_modified: None,
        }
    }

    /// The part number
    pub fn part_number(&self) -> i32 {
        self.part_number
    }

    /// The ETag of the part
    pub fn e_tag(&self) -> &str {
        &self.e_tag
    }

    /// The part size in bytes, when known (e.g. from listing parts)
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    /// When the part was last modified, when known
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    pub(crate) fn to_completed_part(&self) -> aws_sdk_s3::types::CompletedPart {
        aws_sdk_s3::types::CompletedPart::builder()
            .part_number(self.part_number)
            .e_tag(self.e_tag.clone())
            .build()
    }
}

impl From<&aws_sdk_s3::types::Part> for PartETag {
    fn from(part: &aws_sdk_s3::types::Part) -> Self {
        Self {
            part_number: part.part_number().unwrap_or_default(),
            e_tag: part.e_tag().unwrap_or_default().to_owned(),
            size: part.size(),
            last_modified: part.last_modified().cloned(),
        }
    }
}
