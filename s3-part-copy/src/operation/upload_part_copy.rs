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
/// Request type for copying an object (or a range of it) into a part
pub use input::{UploadPartCopyInput, UploadPartCopyInputBuilder};
/// Response type for copying an object (or a range of it) into a part
pub use output::{UploadPartCopyOutput, UploadPartCopyOutputBuilder};

/// Operation struct for a single part copy
#[derive(Clone, Default, Debug)]
pub(crate) struct UploadPartCopy;

impl UploadPartCopy {
    /// Execute a single `UploadPartCopy` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadPartCopyInput,
    ) -> Result<UploadPartCopyOutput, error::Error> {
        let _permit = handle.scheduler.acquire_permit().await?;
        send_upload_part_copy(handle.config.client(), &input).await
    }
}

/// Send the `UploadPartCopy` request described by `input`
///
/// Callers are responsible for acquiring a scheduler permit.
pub(crate) async fn send_upload_part_copy(
    client: &aws_sdk_s3::Client,
    input: &UploadPartCopyInput,
) -> Result<UploadPartCopyOutput, error::Error> {
    let copy_source = input.copy_source();
    let copy_range = input.copy_range();
    let part_number = input.part_number;

    let resp = client
        .upload_part_copy()
        .copy_source(copy_source.header_value())
        .set_copy_source_range(copy_range.map(|range| range.to_string()))
        .set_bucket(input.bucket.clone())
        .set_key(input.key.clone())
        .set_upload_id(input.upload_id.clone())
        .part_number(part_number)
        .send()
        .instrument(tracing::debug_span!(
            "send-upload-part-copy",
            source = %copy_source.header_value(),
            range = ?copy_range,
            part_number
        ))
        .await?;

    let copy_result = resp
        .copy_part_result()
        .ok_or_else(|| error::missing_field("copy_part_result"))?;
    let e_tag = copy_result
        .e_tag()
        .ok_or_else(|| error::missing_field("e_tag"))?;

    tracing::trace!("completed copy of part number {part_number}");

    Ok(UploadPartCopyOutput::builder()
        .part_number(part_number)
        .e_tag(e_tag)
        .set_last_modified(copy_result.last_modified().cloned())
        .set_copy_source_version_id(resp.copy_source_version_id().map(str::to_owned))
        .set_request_id(resp.request_id().map(str::to_owned))
        .build()?)
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use aws_sdk_s3::operation::upload_part_copy::{UploadPartCopyError, UploadPartCopyOutput};
    use aws_sdk_s3::types::CopyPartResult;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::error::ErrorMetadata;

    fn client_with(rule: &aws_smithy_mocks_experimental::Rule) -> crate::Client {
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[rule]);
        crate::Client::new(crate::Config::builder().client(client).build())
    }

    fn part_builder(
        client: &crate::Client,
    ) -> crate::operation::upload_part_copy::builders::UploadPartCopyFluentBuilder {
        client
            .upload_part_copy()
            .source_bucket("source-bucket")
            .source_key("source-key")
            .bucket("target-bucket")
            .key("target-key")
            .upload_id("upload-1")
            .part_number(2)
    }

    #[tokio::test]
    async fn test_upload_part_copy_with_range() {
        let rule = mock!(aws_sdk_s3::Client::upload_part_copy)
            .match_requests(|r| {
                r.copy_source() == Some("source-bucket/source-key")
                    && r.copy_source_range() == Some("bytes=131072-262143")
                    && r.upload_id() == Some("upload-1")
                    && r.part_number() == Some(2)
            })
            .then_output(|| {
                UploadPartCopyOutput::builder()
                    .copy_part_result(CopyPartResult::builder().e_tag("\"etag-2\"").build())
                    .copy_source_version_id("v7")
                    .build()
            });
        let client = client_with(&rule);

        let output = part_builder(&client)
            .begin_index(128 * 1024)
            .part_size(128 * 1024)
            .send()
            .await
            .unwrap();

        assert_eq!(2, output.part_number());
        assert_eq!("\"etag-2\"", output.e_tag());
        assert_eq!(Some("v7"), output.copy_source_version_id());
        let part = output.part_etag();
        assert_eq!(2, part.part_number());
        assert_eq!("\"etag-2\"", part.e_tag());
    }

    #[tokio::test]
    async fn test_upload_part_copy_without_range() {
        let rule = mock!(aws_sdk_s3::Client::upload_part_copy)
            .match_requests(|r| r.copy_source_range().is_none())
            .then_output(|| {
                UploadPartCopyOutput::builder()
                    .copy_part_result(CopyPartResult::builder().e_tag("etag").build())
                    .build()
            });
        let client = client_with(&rule);

        let output = part_builder(&client).send().await.unwrap();
        assert_eq!("etag", output.e_tag());
    }

    #[tokio::test]
    async fn test_missing_copy_result_is_runtime_error() {
        let rule = mock!(aws_sdk_s3::Client::upload_part_copy)
            .then_output(|| UploadPartCopyOutput::builder().build());
        let client = client_with(&rule);

        let err = part_builder(&client).send().await.unwrap_err();
        assert_eq!(&ErrorKind::RuntimeError, err.kind());
    }

    #[tokio::test]
    async fn test_service_error_is_mapped() {
        let rule = mock!(aws_sdk_s3::Client::upload_part_copy).then_error(|| {
            UploadPartCopyError::generic(
                ErrorMetadata::builder()
                    .code("NoSuchUpload")
                    .message("The specified upload does not exist.")
                    .build(),
            )
        });
        let client = client_with(&rule);

        let err = part_builder(&client).send().await.unwrap_err();
        assert_eq!(&ErrorKind::NoSuchUpload, err.kind());
        assert_eq!(Some("The specified upload does not exist."), err.message());
    }
}
