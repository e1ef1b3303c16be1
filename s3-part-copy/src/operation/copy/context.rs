/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::copy::CopyInput;
use std::ops::Deref;
use std::sync::Arc;

/// Internal context used to drive a single Copy operation
#[derive(Debug, Clone)]
pub(crate) struct CopyContext {
    /// reference to client handle used to do actual work
    pub(crate) handle: Arc<crate::client::Handle>,
    /// the original request
    pub(crate) request: Arc<CopyInput>,
}

impl CopyContext {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    /// The original request
    pub(crate) fn request(&self) -> &CopyInput {
        self.request.deref()
    }
}
