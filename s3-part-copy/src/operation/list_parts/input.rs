/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing the parts of a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ListPartsInput {
    /// The bucket the target object is assembled in.
    pub bucket: Option<String>,

    /// The key of the target object.
    pub key: Option<String>,

    /// ID of the multipart upload whose parts are being listed.
    pub upload_id: Option<String>,

    /// Maximum number of parts to return in a single response. The service default is 1,000.
    pub max_parts: Option<i32>,

    /// Only parts with a higher part number are listed.
    pub part_number_marker: Option<i32>,
}

impl ListPartsInput {
    /// Creates a new builder-style object to manufacture [`ListPartsInput`](crate::operation::list_parts::ListPartsInput).
    pub fn builder() -> ListPartsInputBuilder {
        ListPartsInputBuilder::default()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the target object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// ID of the multipart upload whose parts are being listed.
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    /// Maximum number of parts to return in a single response.
    pub fn max_parts(&self) -> Option<i32> {
        self.max_parts
    }

    /// Only parts with a higher part number are listed.
    pub fn part_number_marker(&self) -> Option<i32> {
        self.part_number_marker
    }
}

/// A builder for [`ListPartsInput`](crate::operation::list_parts::ListPartsInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ListPartsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) upload_id: Option<String>,
    pub(crate) max_parts: Option<i32>,
    pub(crate) part_number_marker: Option<i32>,
}

impl ListPartsInputBuilder {
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

    /// ID of the multipart upload whose parts are being listed.
    ///
    /// This field is required.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.upload_id = Some(input.into());
        self
    }

    /// ID of the multipart upload whose parts are being listed.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.upload_id = input;
        self
    }

    /// ID of the multipart upload whose parts are being listed.
    pub fn get_upload_id(&self) -> &Option<String> {
        &self.upload_id
    }

    /// Maximum number of parts to return in a single response.
    pub fn max_parts(mut self, input: i32) -> Self {
        self.max_parts = Some(input);
        self
    }

    /// Maximum number of parts to return in a single response.
    pub fn set_max_parts(mut self, input: Option<i32>) -> Self {
        self.max_parts = input;
        self
    }

    /// Maximum number of parts to return in a single response.
    pub fn get_max_parts(&self) -> &Option<i32> {
        &self.max_parts
    }

    /// Only parts with a higher part number are listed.
    pub fn part_number_marker(mut self, input: i32) -> Self {
        self.part_number_marker = Some(input);
        self
    }

    /// Only parts with a higher part number are listed.
    pub fn set_part_number_marker(mut self, input: Option<i32>) -> Self {
        self.part_number_marker = input;
        self
    }

    /// Only parts with a higher part number are listed.
    pub fn get_part_number_marker(&self) -> &Option<i32> {
        &self.part_number_marker
    }

    /// Consumes the builder and constructs a [`ListPartsInput`](crate::operation::list_parts::ListPartsInput).
    pub fn build(self) -> Result<ListPartsInput, BuildError> {
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

        if matches!(self.max_parts, Some(max_parts) if max_parts < 1) {
            return Err(BuildError::invalid_field(
                "max_parts",
                "max parts must be a positive number",
            ));
        }

        Ok(ListPartsInput {
            bucket: self.bucket,
            key: self.key,
            upload_id: self.upload_id,
            max_parts: self.max_parts,
            part_number_marker: self.part_number_marker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ListPartsInput;

    #[test]
    fn test_no_upload_id_error() {
        let err = ListPartsInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("An upload ID is required"));
    }

    #[test]
    fn test_invalid_max_parts() {
        let result = ListPartsInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .max_parts(0)
            .build();
        assert!(result.is_err());
    }
}
