/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::PartETag;

use super::{CompleteMultipartUploadInputBuilder, CompleteMultipartUploadOutput};

/// Fluent builder for completing a multipart upload
#[derive(Debug)]
pub struct CompleteMultipartUploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CompleteMultipartUploadInputBuilder,
}

impl CompleteMultipartUploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Assemble the parts into the target object
    pub async fn send(self) -> Result<CompleteMultipartUploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::complete_multipart_upload::CompleteMultipartUpload::orchestrate(
            self.handle,
            input,
        )
        .await
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

    /// ID of the multipart upload to complete.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.upload_id(input);
        self
    }

    /// ID of the multipart upload to complete.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_upload_id(input);
        self
    }

    /// ID of the multipart upload to complete.
    pub fn get_upload_id(&self) -> &Option<String> {
        self.inner.get_upload_id()
    }

    /// Append a part.
    pub fn part(mut self, input: PartETag) -> Self {
        self.inner = self.inner.part(input);
        self
    }

    /// Append all of the given parts. They do not need to be sorted.
    pub fn parts(mut self, input: impl IntoIterator<Item = PartETag>) -> Self {
        self.inner = self.inner.parts(input);
        self
    }

    /// The parts to assemble.
    pub fn set_parts(mut self, input: Option<Vec<PartETag>>) -> Self {
        self.inner = self.inner.set_parts(input);
        self
    }

    /// The parts to assemble.
    pub fn get_parts(&self) -> &Option<Vec<PartETag>> {
        self.inner.get_parts()
    }
}

impl crate::operation::complete_multipart_upload::input::CompleteMultipartUploadInputBuilder {
    /// Complete the multipart upload with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<CompleteMultipartUploadOutput, Error> {
        let mut fluent_builder = client.complete_multipart_upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
