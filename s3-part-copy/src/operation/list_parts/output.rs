/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::PartETag;

/// Output type for listing the parts of a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ListPartsOutput {
    /// The bucket the target object is assembled in.
    pub bucket: String,

    /// The key of the target object.
    pub key: String,

    /// ID of the multipart upload.
    pub upload_id: String,

    /// Maximum number of parts that were allowed in the response.
    pub max_parts: Option<i32>,

    /// The part number marker the listing started after.
    pub part_number_marker: Option<String>,

    /// The marker to use as `part_number_marker` in a subsequent request when the listing is truncated.
    pub next_part_number_marker: Option<String>,

    /// Whether more parts exist than were returned.
    pub is_truncated: bool,

    /// The parts in this page of the listing.
    pub parts: Option<Vec<PartETag>>,

    /// The ID of the `ListParts` request.
    pub request_id: Option<String>,
}

impl ListPartsOutput {
    /// Creates a new builder-style object to manufacture [`ListPartsOutput`](crate::operation::list_parts::ListPartsOutput).
    pub fn builder() -> ListPartsOutputBuilder {
        ListPartsOutputBuilder::default()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the target object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// ID of the multipart upload.
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    /// Maximum number of parts that were allowed in the response.
    pub fn max_parts(&self) -> Option<i32> {
        self.max_parts
    }

    /// The part number marker the listing started after.
    pub fn part_number_marker(&self) -> Option<&str> {
        self.part_number_marker.as_deref()
    }

    /// The marker to use in a subsequent request when the listing is truncated.
    pub fn next_part_number_marker(&self) -> Option<&str> {
        self.next_part_number_marker.as_deref()
    }

    /// Whether more parts exist than were returned.
    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    /// The parts in this page of the listing.
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.parts.is_none()`
    pub fn parts(&self) -> &[PartETag] {
        self.parts.as_deref().unwrap_or_default()
    }

    /// The ID of the `ListParts` request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// A builder for [`ListPartsOutput`](crate::operation::list_parts::ListPartsOutput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ListPartsOutputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
    pub(crate) max_parts: Option<i32>,
    pub(crate) part_number_marker: Option<String>,
    pub(crate) next_part_number_marker: Option<String>,
    pub(crate) is_truncated: bool,
    pub(crate) parts: Option<Vec<PartETag>>,
    pub(crate) request_id: Option<String>,
}

impl ListPartsOutputBuilder {
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

    /// ID of the multipart upload.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// Maximum number of parts that were allowed in the response.
    pub fn set_max_parts(mut self, input: Option<i32>) -> Self {
        self.max_parts = input;
        self
    }

    /// The part number marker the listing started after.
    pub fn set_part_number_marker(mut self, input: Option<String>) -> Self {
        self.part_number_marker = input;
        self
    }

    /// The marker to use in a subsequent request when the listing is truncated.
    pub fn set_next_part_number_marker(mut self, input: Option<String>) -> Self {
        self.next_part_number_marker = input;
        self
    }

    /// Whether more parts exist than were returned.
    pub fn is_truncated(mut self, input: bool) -> Self {
        self.is_truncated = input;
        self
    }

    /// Append a part.
    ///
    /// To override the contents of this collection use [`set_parts`](Self::set_parts)
    pub fn parts(mut self, input: PartETag) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// The parts in this page of the listing.
    pub fn set_parts(mut self, input: Option<Vec<PartETag>>) -> Self {
        self.parts = input;
        self
    }

    /// The ID of the `ListParts` request.
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> ListPartsOutput {
        ListPartsOutput {
            bucket: self.bucket.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            upload_id: self.upload_id.unwrap_or_default(),
            max_parts: self.max_parts,
            part_number_marker: self.part_number_marker,
            next_part_number_marker: self.next_part_number_marker,
            is_truncated: self.is_truncated,
            parts: self.parts,
            request_id: self.request_id,
        }
    }
}
