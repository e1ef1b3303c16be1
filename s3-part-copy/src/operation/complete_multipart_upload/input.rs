/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::{PartETag, MAX_PART_NUMBER, MIN_PART_NUMBER};

/// Input type for completing a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteMultipartUploadInput {
    /// The bucket the target object is assembled in.
    pub bucket: Option<String>,

    /// The key of the target object.
    pub key: Option<String>,

    /// ID of the multipart upload to complete.
    pub upload_id: Option<String>,

    /// The parts to assemble, sorted by part number.
    pub parts: Vec<PartETag>,
}

impl CompleteMultipartUploadInput {
    /// Creates a new builder-style object to manufacture [`CompleteMultipartUploadInput`](crate::operation::complete_multipart_upload::CompleteMultipartUploadInput).
    pub fn builder() -> CompleteMultipartUploadInputBuilder {
        CompleteMultipartUploadInputBuilder::default()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the target object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// ID of the multipart upload to complete.
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// The parts to assemble, sorted by part number.
    pub fn parts(&self) -> &[PartETag] {
        &self.parts
    }
}

/// A builder for [`CompleteMultipartUploadInput`](crate::operation::complete_multipart_upload::CompleteMultipartUploadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CompleteMultipartUploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
    pub(crate) parts: Option<Vec<PartETag>>,
}

impl CompleteMultipartUploadInputBuilder {
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

    /// ID of the multipart upload to complete.
    ///
    /// This field is required.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID of the multipart upload to complete.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.upload_id = input;
        self
    }

    /// ID of the multipart upload to complete.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// Append a part.
    ///
    /// To override the contents of this collection use [`set_parts`](Self::set_parts)
    pub fn part(mut self, input: PartETag) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Append all of the given parts.
    pub fn parts(mut self, input: impl IntoIterator<Item = PartETag>) -> Self {
        self.parts.get_or_insert_with(Vec::new).extend(input);
        self
    }

    /// The parts to assemble. They do not need to be sorted.
    pub fn set_parts(mut self, input: Option<Vec<PartETag>>) -> Self {
        self.parts = input;
        self
    }

    /// The parts to assemble.
    pub fn get_parts(&self) -> &Option<Vec<PartETag>> {
        &self.parts
    }

    /// Consumes the builder and constructs a [`CompleteMultipartUploadInput`](crate::operation::complete_multipart_upload::CompleteMultipartUploadInput).
    ///
    /// Parts are sorted by part number. Duplicate or out of range part numbers are rejected.
    pub fn build(self) -> Result<CompleteMultipartUploadInput, BuildError> {
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

        let mut parts = self.parts.unwrap_or_default();
        if parts.is_empty() {
            return Err(BuildError::missing_field(
                "parts",
                "At least one part is required",
            ));
        }

        // parts must be sorted
        parts.sort_by_key(|p| p.part_number());

        if let Some(part) = parts
            .iter()
            .find(|p| !(MIN_PART_NUMBER..=MAX_PART_NUMBER).contains(&p.part_number()))
        {
            return Err(BuildError::invalid_field(
                "parts",
                format!("part number {} is out of range", part.part_number()),
            ));
        }

        if let Some(pair) = parts
            .windows(2)
            .find(|pair| pair[0].part_number() == pair[1].part_number())
        {
            return Err(BuildError::invalid_field(
                "parts",
                format!("duplicate part number {}", pair[0].part_number()),
            ));
        }

        Ok(CompleteMultipartUploadInput {
            bucket: self.bucket,
            key: self.key,
            upload_id: self.upload_id,
            parts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CompleteMultipartUploadInput, CompleteMultipartUploadInputBuilder};
    use crate::types::PartETag;

    fn builder() -> CompleteMultipartUploadInputBuilder {
        CompleteMultipartUploadInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
    }

    #[test]
    fn test_parts_sorted() {
        let input = builder()
            .parts(vec![PartETag::new(2, "b"), PartETag::new(1, "a")])
            .build()
            .unwrap();
        let numbers: Vec<_> = input.parts().iter().map(|p| p.part_number()).collect();
        assert_eq!(vec![1, 2], numbers);
    }

    #[test]
    fn test_empty_parts_error() {
        let err = builder().build().unwrap_err();
        assert!(err.to_string().contains("At least one part is required"));
    }

    #[test]
    fn test_duplicate_parts_error() {
        let err = builder()
            .part(PartETag::new(1, "a"))
            .part(PartETag::new(1, "b"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate part number 1"));
    }

    #[test]
    fn test_out_of_range_part_error() {
        assert!(builder().part(PartETag::new(0, "a")).build().is_err());
        assert!(builder().part(PartETag::new(10_001, "a")).build().is_err());
    }
}
