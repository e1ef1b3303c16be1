/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{UploadPartCopyInputBuilder, UploadPartCopyOutput};

/// Fluent builder for copying an object (or a byte range of it) into one part of a multipart upload
#[derive(Debug)]
pub struct UploadPartCopyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadPartCopyInputBuilder,
}

impl UploadPartCopyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Copy the part
    pub async fn send(self) -> Result<UploadPartCopyOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::upload_part_copy::UploadPartCopy::orchestrate(self.handle, input).await
    }

    /// The bucket containing the object to copy from.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_bucket(input);
        self
    }

    /// The bucket containing the object to copy from.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_bucket(input);
        self
    }

    /// The bucket containing the object to copy from.
    pub fn get_source_bucket(&self) -> &Option<String> {
        self.inner.get_source_bucket()
    }

    /// The key of the object to copy from.
    pub fn source_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_key(input);
        self
    }

    /// The key of the object to copy from.
    pub fn set_source_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_key(input);
        self
    }

    /// The key of the object to copy from.
    pub fn get_source_key(&self) -> &Option<String> {
        self.inner.get_source_key()
    }

    /// The version of the object to copy from.
    pub fn source_version_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_version_id(input);
        self
    }

    /// The version of the object to copy from.
    pub fn set_source_version_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_version_id(input);
        self
    }

    /// The version of the object to copy from.
    pub fn get_source_version_id(&self) -> &Option<String> {
        self.inner.get_source_version_id()
    }

    /// The bucket the target object is assembled in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket the target object is assembled in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket the target object is assembled in.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// The key of the target object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key of the target object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key of the target object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// ID of the multipart upload the part belongs to.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.upload_id(input);
        self
    }

    /// ID of the multipart upload the part belongs to.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_upload_id(input);
        self
    }

    /// ID of the multipart upload the part belongs to.
    pub fn get_upload_id(&self) -> &Option<String> {
        self.inner.get_upload_id()
    }

    /// Number of the part being copied, between 1 and 10,000 (inclusive).
    pub fn part_number(mut self, input: i32) -> Self {
        self.inner = self.inner.part_number(input);
        self
    }

    /// Number of the part being copied.
    pub fn set_part_number(mut self, input: Option<i32>) -> Self {
        self.inner = self.inner.set_part_number(input);
        self
    }

    /// Number of the part being copied.
    pub fn get_part_number(&self) -> &Option<i32> {
        self.inner.get_part_number()
    }

    /// The first byte of the source object to copy.
    pub fn begin_index(mut self, input: u64) -> Self {
        self.inner = self.inner.begin_index(input);
        self
    }

    /// The first byte of the source object to copy.
    pub fn set_begin_index(mut self, input: Option<u64>) -> Self {
        self.inner = self.inner.set_begin_index(input);
        self
    }

    /// The first byte of the source object to copy.
    pub fn get_begin_index(&self) -> &Option<u64> {
        self.inner.get_begin_index()
    }

    /// The number of bytes of the source object to copy.
    pub fn part_size(mut self, input: u64) -> Self {
        self.inner = self.inner.part_size(input);
        self
    }

    /// The number of bytes of the source object to copy.
    pub fn set_part_size(mut self, input: Option<u64>) -> Self {
        self.inner = self.inner.set_part_size(input);
        self
    }

    /// The number of bytes of the source object to copy.
    pub fn get_part_size(&self) -> &Option<u64> {
        self.inner.get_part_size()
    }
}

impl crate::operation::upload_part_copy::input::UploadPartCopyInputBuilder {
    /// Copy the part described by this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadPartCopyOutput, Error> {
        let mut fluent_builder = client.upload_part_copy();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
