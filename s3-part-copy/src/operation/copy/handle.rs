/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::abort_multipart_upload::send_abort_multipart_upload;
use crate::operation::complete_multipart_upload::send_complete_multipart_upload;
use crate::operation::copy::context::CopyContext;
use crate::operation::copy::{CopyOutput, CopyOutputBuilder};
use crate::types::{AbortedUpload, FailedMultipartUploadPolicy, PartETag};
use aws_sdk_s3::error::DisplayErrorContext;
use tokio::task::{self, JoinHandle};

#[derive(Debug)]
pub(crate) enum CopyType {
    MultipartCopy(MultipartCopyData),
    CopyObject(JoinHandle<Result<CopyOutput, crate::error::Error>>),
}

#[derive(Debug)]
pub(crate) struct MultipartCopyData {
    /// All child part copy tasks spawned for this copy
    pub(crate) copy_part_tasks: task::JoinSet<Result<PartETag, crate::error::Error>>,
    /// The response that will eventually be yielded to the caller.
    pub(crate) response: Option<CopyOutputBuilder>,
    /// the multipart upload ID
    pub(crate) upload_id: String,
}

/// Response type for a single object copy request.
///
/// # Cancellation
///
/// The operation can be cancelled either by dropping this handle or by calling
/// [`Self::abort`].
///
/// When the handle is dropped, in-progress part copies continue in the background and the
/// multipart upload is neither completed nor aborted.
///
/// In contrast, calling [`Self::abort`] waits for the copy to be set up, cancels every part
/// copy task it owns and then invokes `AbortMultipartUpload` (unless the failed multipart
/// upload policy says to retain the parts).
///
/// In either case, if the copy has already been completed, the target object is not deleted.
#[derive(Debug)]
#[non_exhaustive]
pub struct CopyHandle {
    /// Initial task which determines the copy type
    initiate_task: JoinHandle<Result<CopyType, crate::error::Error>>,
    /// The context used to drive a copy to completion
    pub(crate) ctx: CopyContext,
}

impl CopyHandle {
    pub(crate) fn new(
        ctx: CopyContext,
        initiate_task: JoinHandle<Result<CopyType, crate::error::Error>>,
    ) -> Self {
        Self { initiate_task, ctx }
    }

    /// Consume the handle and wait for the copy to complete
    #[tracing::instrument(skip_all, level = "debug", name = "join-copy")]
    pub async fn join(self) -> Result<CopyOutput, crate::error::Error> {
        complete_copy(self).await
    }

    /// Abort the copy and cancel any in-progress part copies.
    #[tracing::instrument(skip_all, level = "debug", name = "abort-copy")]
    pub async fn abort(self) -> Result<AbortedUpload, crate::error::Error> {
        match self.initiate_task.await? {
            Ok(CopyType::CopyObject(copy_object_task)) => {
                copy_object_task.abort();
                let _ = copy_object_task.await;
                Ok(AbortedUpload::default())
            }
            Ok(CopyType::MultipartCopy(mpu_data)) => {
                abort_multipart_copy(&self.ctx, mpu_data).await
            }
            // Nothing to abort since initiate task was not successful.
            Err(_) => Ok(AbortedUpload::default()),
        }
    }
}

/// Cancel in-progress part copies and apply the failed multipart upload policy.
async fn abort_multipart_copy(
    ctx: &CopyContext,
    mut mpu_data: MultipartCopyData,
) -> Result<AbortedUpload, crate::error::Error> {
    mpu_data.copy_part_tasks.abort_all();
    while (mpu_data.copy_part_tasks.join_next().await).is_some() {}

    match ctx.request().failed_multipart_upload_policy() {
        FailedMultipartUploadPolicy::AbortUpload => {
            let _permit = ctx.handle.scheduler.acquire_permit().await?;
            send_abort_multipart_upload(
                ctx.client(),
                ctx.request().bucket().unwrap_or_default(),
                ctx.request().key().unwrap_or_default(),
                &mpu_data.upload_id,
            )
            .await
        }
        FailedMultipartUploadPolicy::Retain => {
            tracing::debug!(
                "retaining copied parts of multipart upload {}",
                mpu_data.upload_id
            );
            Ok(AbortedUpload::default())
        }
    }
}

async fn complete_copy(handle: CopyHandle) -> Result<CopyOutput, crate::error::Error> {
    match handle.initiate_task.await?? {
        CopyType::CopyObject(copy_object_task) => copy_object_task.await?,
        CopyType::MultipartCopy(mut mpu_data) => {
            let mut all_parts = Vec::new();
            while let Some(join_result) = mpu_data.copy_part_tasks.join_next().await {
                // a panicked or cancelled part task fails the copy like a failed request
                let part_result = join_result
                    .map_err(crate::error::Error::from)
                    .and_then(|part| part);
                match part_result {
                    Ok(part) => all_parts.push(part),
                    Err(err) => {
                        tracing::error!("multipart copy failed, cancelling remaining parts");
                        if let Err(err) = abort_multipart_copy(&handle.ctx, mpu_data).await {
                            tracing::error!("failed to abort upload: {}", DisplayErrorContext(err))
                        };
                        return Err(err);
                    }
                }
            }

            tracing::trace!("completing multipart copy");

            // parts must be sorted
            all_parts.sort_by_key(|p| p.part_number());

            let req = handle.ctx.request();
            let complete_mpu_resp = {
                let _permit = handle.ctx.handle.scheduler.acquire_permit().await?;
                send_complete_multipart_upload(
                    handle.ctx.client(),
                    req.bucket().unwrap_or_default(),
                    req.key().unwrap_or_default(),
                    &mpu_data.upload_id,
                    &all_parts,
                )
                .await?
            };

            // set remaining fields from completing the multipart upload
            let resp = mpu_data
                .response
                .take()
                .unwrap_or_default()
                .set_e_tag(complete_mpu_resp.e_tag)
                .set_location(complete_mpu_resp.location)
                .set_version_id(complete_mpu_resp.version_id)
                .set_parts(Some(all_parts));

            tracing::trace!("copy completed successfully");

            Ok(resp.build())
        }
    }
}
