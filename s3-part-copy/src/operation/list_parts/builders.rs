/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ListPartsInputBuilder, ListPartsOutput, ListPartsPaginator};

/// Fluent builder for listing the parts of a multipart upload
#[derive(Debug)]
pub struct ListPartsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListPartsInputBuilder,
}

impl ListPartsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List a single page of parts
    pub async fn send(self) -> Result<ListPartsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_parts::ListParts::orchestrate(self.handle, input).await
    }

    /// Create a paginator that follows the part number marker across every page of the listing
    pub fn into_paginator(self) -> Result<ListPartsPaginator, Error> {
        let input = self.inner.build()?;
        Ok(ListPartsPaginator::new(self.handle, input))
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

    /// ID of the multipart upload whose parts are being listed.
    pub fn upload_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.upload_id(input);
        self
    }

    /// ID of the multipart upload whose parts are being listed.
    pub fn set_upload_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_upload_id(input);
        self
    }

    /// ID of the multipart upload whose parts are being listed.
    pub fn get_upload_id(&self) -> &Option<String> {
        self.inner.get_upload_id()
    }

    /// Maximum number of parts to return in a single response.
    pub fn max_parts(mut self, input: i32) -> Self {
        self.inner = self.inner.max_parts(input);
        self
    }

    /// Maximum number of parts to return in a single response.
    pub fn set_max_parts(mut self, input: Option<i32>) -> Self {
        self.inner = self.inner.set_max_parts(input);
        self
    }

    /// Maximum number of parts to return in a single response.
    pub fn get_max_parts(&self) -> &Option<i32> {
        self.inner.get_max_parts()
    }

    /// Only parts with a higher part number are listed.
    pub fn part_number_marker(mut self, input: i32) -> Self {
        self.inner = self.inner.part_number_marker(input);
        self
    }

    /// Only parts with a higher part number are listed.
    pub fn set_part_number_marker(mut self, input: Option<i32>) -> Self {
        self.inner = self.inner.set_part_number_marker(input);
        self
    }

    /// Only parts with a higher part number are listed.
    pub fn get_part_number_marker(&self) -> &Option<i32> {
        self.inner.get_part_number_marker()
    }
}

impl crate::operation::list_parts::input::ListPartsInputBuilder {
    /// List a single page of parts with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ListPartsOutput, Error> {
        let mut fluent_builder = client.list_parts();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
