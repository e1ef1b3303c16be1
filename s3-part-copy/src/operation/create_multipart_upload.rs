/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use aws_sdk_s3::operation::RequestId;
use tracing::Instrument;

use crate::error;
/// Request type for starting a multipart upload
pub use input::{CreateMultipartUploadInput, CreateMultipartUploadInputBuilder};
/// Response type for starting a multipart upload
pub use output::{CreateMultipartUploadOutput, CreateMultipartUploadOutputBuilder};

/// Operation struct for claiming a multipart upload ID
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateMultipartUpload;

impl CreateMultipartUpload {
    /// Execute a single `CreateMultipartUpload` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CreateMultipartUploadInput,
    ) -> Result<CreateMultipartUploadOutput, error::Error> {
        let _permit = handle.scheduler.acquire_permit().await?;

        let resp = handle
            .config
            .client()
            .create_multipart_upload()
            .set_bucket(input.bucket.clone())
            .set_key(input.key.clone())
            .set_content_type(input.content_type.clone())
            .set_metadata(input.metadata.clone())
            .send()
            .instrument(tracing::debug_span!(
                "send-create-multipart-upload",
                bucket = input.bucket().unwrap_or_default(),
                key = input.key().unwrap_or_default()
            ))
            .await?;

        let upload_id = resp
            .upload_id()
            .ok_or_else(|| error::missing_field("upload_id"))?;
        tracing::trace!("multipart upload started with upload id: {upload_id}");

        Ok(CreateMultipartUploadOutput::builder()
            .bucket(resp.bucket().or(input.bucket()).unwrap_or_default())
            .key(resp.key().or(input.key()).unwrap_or_default())
            .upload_id(upload_id)
            .set_request_id(resp.request_id().map(str::to_owned))
            .build()?)
    }
}
