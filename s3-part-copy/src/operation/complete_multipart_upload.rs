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
use aws_sdk_s3::types::CompletedMultipartUpload;
use tracing::Instrument;

use crate::error;
use crate::types::PartETag;
/// Request type for completing a multipart upload
pub use input::{CompleteMultipartUploadInput, CompleteMultipartUploadInputBuilder};
/// Response type for completing a multipart upload
pub use output::{CompleteMultipartUploadOutput, CompleteMultipartUploadOutputBuilder};

/// Operation struct for assembling copied parts into the target object
#[derive(Clone, Default, Debug)]
pub(crate) struct CompleteMultipartUpload;

impl CompleteMultipartUpload {
    /// Execute a single `CompleteMultipartUpload` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CompleteMultipartUploadInput,
    ) -> Result<CompleteMultipartUploadOutput, error::Error> {
        let _permit = handle.scheduler.acquire_permit().await?;
        send_complete_multipart_upload(
            handle.config.client(),
            input.bucket().unwrap_or_default(),
            input.key().unwrap_or_default(),
            input.upload_id().unwrap_or_default(),
            input.parts(),
        )
        .await
    }
}

/// Send `CompleteMultipartUpload` for parts already sorted by part number
///
/// Callers are responsible for acquiring a scheduler permit.
pub(crate) async fn send_complete_multipart_upload(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    upload_id: &str,
    parts: &[PartETag],
) -> Result<CompleteMultipartUploadOutput, error::Error> {
    tracing::trace!("completing multipart upload {upload_id} with {} parts", parts.len());

    let completed_parts = parts.iter().map(PartETag::to_completed_part).collect();
    let resp = client
        .complete_multipart_upload()
        .bucket(bucket)
        .key(key)
        .upload_id(upload_id)
        .multipart_upload(
            CompletedMultipartUpload::builder()
                .set_parts(Some(completed_parts))
                .build(),
        )
        .send()
        .instrument(tracing::debug_span!(
            "send-complete-multipart-upload",
            bucket,
            key,
            upload_id
        ))
        .await?;

    Ok(CompleteMultipartUploadOutput::builder()
        .set_location(resp.location().map(str::to_owned))
        .bucket(resp.bucket().unwrap_or(bucket))
        .key(resp.key().unwrap_or(key))
        .set_e_tag(resp.e_tag().map(str::to_owned))
        .set_version_id(resp.version_id().map(str::to_owned))
        .set_request_id(resp.request_id().map(str::to_owned))
        .build())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::types::PartETag;
    use aws_sdk_s3::operation::complete_multipart_upload::{
        CompleteMultipartUploadError, CompleteMultipartUploadOutput,
    };
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    fn client_with(rule: &aws_smithy_mocks_experimental::Rule) -> crate::Client {
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[rule]);
        crate::Client::new(crate::Config::builder().client(client).build())
    }

    #[tokio::test]
    async fn test_parts_are_sent_sorted() {
        let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload)
            .match_requests(|r| {
                let numbers: Vec<_> = r
                    .multipart_upload()
                    .map(|mpu| mpu.parts().iter().map(|p| p.part_number()).collect())
                    .unwrap_or_default();
                numbers == vec![Some(1), Some(2), Some(3)]
            })
            .then_output(|| {
                CompleteMultipartUploadOutput::builder()
                    .location("http://test-bucket.localhost/test-key")
                    .e_tag("\"abc-3\"")
                    .build()
            });
        let client = client_with(&complete_mpu);

        let output = client
            .complete_multipart_upload()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .parts(vec![
                PartETag::new(3, "e3"),
                PartETag::new(1, "e1"),
                PartETag::new(2, "e2"),
            ])
            .send()
            .await
            .unwrap();

        assert_eq!(Some("\"abc-3\""), output.e_tag());
        assert_eq!("test-bucket", output.bucket());
        assert_eq!(
            Some("http://test-bucket.localhost/test-key"),
            output.location()
        );
    }

    #[tokio::test]
    async fn test_entity_too_small() {
        let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload).then_error(|| {
            CompleteMultipartUploadError::generic(
                ErrorMetadata::builder()
                    .code("EntityTooSmall")
                    .message("Your proposed upload is smaller than the minimum allowed object size.")
                    .build(),
            )
        });
        let client = client_with(&complete_mpu);

        let err = client
            .complete_multipart_upload()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .part(PartETag::new(1, "e1"))
            .part(PartETag::new(2, "e2"))
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::EntityTooSmall, err.kind());
    }
}
