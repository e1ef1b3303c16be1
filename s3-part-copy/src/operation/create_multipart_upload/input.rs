/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_types::error::operation::BuildError;

/// Input type for starting a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CreateMultipartUploadInput {
    /// The bucket the target object is assembled in.
    pub bucket: Option<String>,

    /// The key of the target object.
    pub key: Option<String>,

    /// A standard MIME type describing the format of the target object.
    pub content_type: Option<String>,

    /// A map of metadata to store with the target object.
    pub metadata: Option<HashMap<String, String>>,
}

impl CreateMultipartUploadInput {
    /// Creates a new builder-style object to manufacture [`CreateMultipartUploadInput`](crate::operation::create_multipart_upload::CreateMultipartUploadInput).
    pub fn builder() -> CreateMultipartUploadInputBuilder {
        CreateMultipartUploadInputBuilder::default()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the target object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// A standard MIME type describing the format of the target object.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// A map of metadata to store with the target object.
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// A builder for [`CreateMultipartUploadInput`](crate::operation::create_multipart_upload::CreateMultipartUploadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CreateMultipartUploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) metadata: Option<HashMap<String, String>>,
}

impl CreateMultipartUploadInputBuilder {
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

    /// A standard MIME type describing the format of the target object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// A standard MIME type describing the format of the target object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// A standard MIME type describing the format of the target object.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Adds a key-value pair to `metadata`.
    ///
    /// To override the contents of this collection use [`set_metadata`](Self::set_metadata).
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(k.into(), v.into());
        self
    }

    /// A map of metadata to store with the target object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.metadata = input;
        self
    }

    /// A map of metadata to store with the target object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        &self.metadata
    }

    /// Consumes the builder and constructs a [`CreateMultipartUploadInput`](crate::operation::create_multipart_upload::CreateMultipartUploadInput).
    pub fn build(self) -> Result<CreateMultipartUploadInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        Ok(CreateMultipartUploadInput {
            bucket: self.bucket,
            key: self.key,
            content_type: self.content_type,
            metadata: self.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CreateMultipartUploadInput;

    #[test]
    fn test_no_bucket_error() {
        let err = CreateMultipartUploadInput::builder()
            .key("test-key")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }

    #[test]
    fn test_metadata_is_merged() {
        let input = CreateMultipartUploadInput::builder()
            .bucket("b")
            .key("k")
            .metadata("a", "1")
            .metadata("b", "2")
            .build()
            .unwrap();
        let metadata = input.metadata().unwrap();
        assert_eq!(2, metadata.len());
        assert_eq!(Some(&"2".to_owned()), metadata.get("b"));
    }
}
