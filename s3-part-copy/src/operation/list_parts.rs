/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;
mod paginator;

use std::sync::Arc;

use aws_sdk_s3::operation::RequestId;
use tracing::Instrument;

use crate::error;
use crate::types::PartETag;
/// Request type for listing the parts of a multipart upload
pub use input::{ListPartsInput, ListPartsInputBuilder};
/// Response type for listing the parts of a multipart upload
pub use output::{ListPartsOutput, ListPartsOutputBuilder};
pub use paginator::ListPartsPaginator;

/// Operation struct for listing parts
#[derive(Clone, Default, Debug)]
pub(crate) struct ListParts;

impl ListParts {
    /// Execute a single `ListParts` request
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListPartsInput,
    ) -> Result<ListPartsOutput, error::Error> {
        let _permit = handle.scheduler.acquire_permit().await?;

        let resp = handle
            .config
            .client()
            .list_parts()
            .set_bucket(input.bucket.clone())
            .set_key(input.key.clone())
            .set_upload_id(input.upload_id.clone())
            .set_max_parts(input.max_parts)
            .set_part_number_marker(input.part_number_marker.map(|marker| marker.to_string()))
            .send()
            .instrument(tracing::debug_span!(
                "send-list-parts",
                upload_id = input.upload_id().unwrap_or_default(),
                part_number_marker = input.part_number_marker
            ))
            .await?;

        let parts: Vec<PartETag> = resp.parts().iter().map(PartETag::from).collect();
        tracing::trace!("listed {} parts", parts.len());

        Ok(ListPartsOutput::builder()
            .bucket(resp.bucket().or(input.bucket()).unwrap_or_default())
            .key(resp.key().or(input.key()).unwrap_or_default())
            .upload_id(resp.upload_id().or(input.upload_id()).unwrap_or_default())
            .set_max_parts(resp.max_parts())
            .set_part_number_marker(resp.part_number_marker().map(str::to_owned))
            .set_next_part_number_marker(resp.next_part_number_marker().map(str::to_owned))
            .is_truncated(resp.is_truncated().unwrap_or_default())
            .set_parts(Some(parts))
            .set_request_id(resp.request_id().map(str::to_owned))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_parts::ListPartsOutput;
    use aws_sdk_s3::types::Part;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    #[tokio::test]
    async fn test_list_parts() {
        let list_parts = mock!(aws_sdk_s3::Client::list_parts)
            .match_requests(|r| {
                r.upload_id() == Some("upload-1") && r.part_number_marker().is_none()
            })
            .then_output(|| {
                ListPartsOutput::builder()
                    .bucket("test-bucket")
                    .key("test-key")
                    .upload_id("upload-1")
                    .max_parts(1000)
                    .is_truncated(false)
                    .next_part_number_marker("2")
                    .parts(Part::builder().part_number(1).e_tag("e1").size(5).build())
                    .parts(Part::builder().part_number(2).e_tag("e2").size(7).build())
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list_parts]);
        let client = crate::Client::new(crate::Config::builder().client(client).build());

        let listing = client
            .list_parts()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .send()
            .await
            .unwrap();

        assert_eq!("upload-1", listing.upload_id());
        assert_eq!(Some(1000), listing.max_parts());
        assert!(!listing.is_truncated());
        assert_eq!(Some("2"), listing.next_part_number_marker());
        let parts = listing.parts();
        assert_eq!(2, parts.len());
        assert_eq!(2, parts[1].part_number());
        assert_eq!(Some(7), parts[1].size());
    }
}
