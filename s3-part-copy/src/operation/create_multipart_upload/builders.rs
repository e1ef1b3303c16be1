/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;

use super::{CreateMultipartUploadInputBuilder, CreateMultipartUploadOutput};

/// Fluent builder for starting a multipart upload
#[derive(Debug)]
pub struct CreateMultipartUploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateMultipartUploadInputBuilder,
}

impl CreateMultipartUploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start the multipart upload and return its upload ID
    pub async fn send(self) -> Result<CreateMultipartUploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::create_multipart_upload::CreateMultipartUpload::orchestrate(
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

    /// A standard MIME type describing the format of the target object.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// A standard MIME type describing the format of the target object.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_content_type(input);
        self
    }

    /// A standard MIME type describing the format of the target object.
    pub fn get_content_type(&self) -> &Option<String> {
        self.inner.get_content_type()
    }

    /// Adds a key-value pair to the metadata stored with the target object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// A map of metadata to store with the target object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }

    /// A map of metadata to store with the target object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        self.inner.get_metadata()
    }
}

impl crate::operation::create_multipart_upload::input::CreateMultipartUploadInputBuilder {
    /// Start a multipart upload with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<CreateMultipartUploadOutput, Error> {
        let mut fluent_builder = client.create_multipart_upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
