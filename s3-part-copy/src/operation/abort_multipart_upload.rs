/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

use std::sync::Arc;

use tracing::Instrument;

use crate::error;
use crate::types::AbortedUpload;
/// Request type for aborting a multipart upload
pub use input::{AbortMultipartUploadInput, AbortMultipartUploadInputBuilder};

/// Operation struct for discarding a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct AbortMultipartUpload;

impl AbortMultipartUpload {
    /// Execute a single `AbortMultipartUpload` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: AbortMultipartUploadInput,
    ) -> Result<AbortedUpload, error::Error> {
        let _permit = handle.scheduler.acquire_permit().await?;
        send_abort_multipart_upload(
            handle.config.client(),
            input.bucket().unwrap_or_default(),
            input.key().unwrap_or_default(),
            input.upload_id().unwrap_or_default(),
        )
        .await
    }
}

/// Send `AbortMultipartUpload`
///
/// Callers are responsible for acquiring a scheduler permit.
pub(crate) async fn send_abort_multipart_upload(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    upload_id: &str,
) -> Result<AbortedUpload, error::Error> {
    let abort_mpu_resp = client
        .abort_multipart_upload()
        .bucket(bucket)
        .key(key)
        .upload_id(upload_id)
        .send()
        .instrument(tracing::debug_span!(
            "send-abort-multipart-upload",
            bucket,
            key,
            upload_id
        ))
        .await?;

    tracing::debug!("aborted multipart upload {upload_id}");

    Ok(AbortedUpload {
        upload_id: Some(upload_id.to_owned()),
        request_charged: abort_mpu_resp.request_charged,
    })
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::abort_multipart_upload::{
        AbortMultipartUploadError, AbortMultipartUploadOutput,
    };
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    #[tokio::test]
    async fn test_abort_multipart_upload() {
        let abort_mpu = mock!(aws_sdk_s3::Client::abort_multipart_upload)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.key() == Some("test-key")
                    && r.upload_id() == Some("upload-1")
            })
            .then_output(|| AbortMultipartUploadOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&abort_mpu]);
        let client = crate::Client::new(crate::Config::builder().client(client).build());

        let aborted = client
            .abort_multipart_upload()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .send()
            .await
            .unwrap();

        assert_eq!(Some("upload-1"), aborted.upload_id());
    }

    #[tokio::test]
    async fn test_abort_unknown_upload() {
        let abort_mpu = mock!(aws_sdk_s3::Client::abort_multipart_upload).then_error(|| {
            AbortMultipartUploadError::generic(
                ErrorMetadata::builder()
                    .code("NoSuchUpload")
                    .message("The specified upload does not exist.")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&abort_mpu]);
        let client = crate::Client::new(crate::Config::builder().client(client).build());

        let err = client
            .abort_multipart_upload()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::NoSuchUpload, err.kind());
    }
}
