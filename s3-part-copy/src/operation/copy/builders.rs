/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::FailedMultipartUploadPolicy;

use super::{CopyHandle, CopyInputBuilder};

/// Fluent builder for constructing a single object copy transfer
#[derive(Debug)]
pub struct CopyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CopyInputBuilder,
}

impl CopyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Initiate a copy transfer for a single object
    ///
    /// The transfer runs in the background, use [`CopyHandle::join`] to wait for it.
    pub fn initiate(self) -> Result<CopyHandle, Error> {
        let input = self.inner.build()?;
        crate::operation::copy::Copy::orchestrate(self.handle, input)
    }

    /// The bucket containing the object to copy.
    pub fn source_bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_bucket(input);
        self
    }

    /// The bucket containing the object to copy.
    pub fn set_source_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_bucket(input);
        self
    }

    /// The bucket containing the object to copy.
    pub fn get_source_bucket(&self) -> &Option<String> {
        self.inner.get_source_bucket()
    }

    /// The key of the object to copy.
    pub fn source_key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_key(input);
        self
    }

    /// The key of the object to copy.
    pub fn set_source_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_key(input);
        self
    }

    /// The key of the object to copy.
    pub fn get_source_key(&self) -> &Option<String> {
        self.inner.get_source_key()
    }

    /// The version of the object to copy.
    pub fn source_version_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.source_version_id(input);
        self
    }

    /// The version of the object to copy.
    pub fn set_source_version_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_source_version_id(input);
        self
    }

    /// The version of the object to copy.
    pub fn get_source_version_id(&self) -> &Option<String> {
        self.inner.get_source_version_id()
    }

    /// The bucket to copy the object into.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket to copy the object into.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to copy the object into.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// The key of the copied object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key of the copied object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key of the copied object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn failed_multipart_upload_policy(mut self, input: FailedMultipartUploadPolicy) -> Self {
        self.inner = self.inner.failed_multipart_upload_policy(input);
        self
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn set_failed_multipart_upload_policy(
        mut self,
        input: Option<FailedMultipartUploadPolicy>,
    ) -> Self {
        self.inner = self.inner.set_failed_multipart_upload_policy(input);
        self
    }

    /// What to do with the multipart upload when a part copy fails.
    pub fn get_failed_multipart_upload_policy(&self) -> &Option<FailedMultipartUploadPolicy> {
        self.inner.get_failed_multipart_upload_policy()
    }
}

impl crate::operation::copy::input::CopyInputBuilder {
    /// Initiate a copy transfer for a single object with this input using the given client.
    pub fn initiate_with(self, client: &crate::Client) -> Result<CopyHandle, Error> {
        let mut fluent_builder = client.copy();
        fluent_builder.inner = self;
        fluent_builder.initiate()
    }
}
