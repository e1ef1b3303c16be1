/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::AbortedUpload;

use super::AbortMultipartUploadInputBuilder;

/// Fluent builder for aborting a multipart upload
#[derive(Debug)]
pub struct AbortMultipartUploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: AbortMultipartUploadInputBuilder,
}

impl AbortMultipartUploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Abort the multipart upload
    pub async fn send(self) -> Result<AbortedUpload, Error> {
        let input = self.inner.build()?;
        crate::operation::abort_multipart_upload::AbortMultipartUpload::orchestrate(
            self.handle,
            input,
        )
        .await
    }

    /// The bucket the target object was being assembled in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket the target object was being assembled in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket the target object was being assembled in.
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

    /// ID of the multipart upload to abort.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.upload_id(input);
        self
    }

    /// ID of the multipart upload to abort.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_upload_id(input);
        self
    }

    /// ID of the multipart upload to abort.
    pub fn get_upload_id(&self) -> &Option<String> {
        self.inner.get_upload_id()
    }
}

impl crate::operation::abort_multipart_upload::input::AbortMultipartUploadInputBuilder {
    /// Abort the multipart upload with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<AbortedUpload, Error> {
        let mut fluent_builder = client.abort_multipart_upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
