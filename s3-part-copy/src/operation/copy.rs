/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

mod context;
mod handle;
mod service;

use std::cmp;
use std::sync::Arc;

use tracing::Instrument;

use crate::error;
use crate::types::{CopyRange, CopySource, MAX_PART_NUMBER};
use context::CopyContext;
pub use handle::CopyHandle;
use handle::{CopyType, MultipartCopyData};
/// Request type for copying an entire object
pub use input::{CopyInput, CopyInputBuilder};
/// Response type for copying an entire object
pub use output::{CopyOutput, CopyOutputBuilder};
use service::distribute_work;

/// Operation struct for whole object copies
#[derive(Clone, Default, Debug)]
pub(crate) struct Copy;

impl Copy {
    /// Execute a single `Copy` transfer operation
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CopyInput,
    ) -> Result<CopyHandle, error::Error> {
        let ctx = CopyContext {
            handle,
            request: Arc::new(input),
        };
        Ok(CopyHandle::new(
            ctx.clone(),
            tokio::spawn(try_start_copy(ctx)),
        ))
    }
}

async fn try_start_copy(ctx: CopyContext) -> Result<CopyType, error::Error> {
    let content_length = source_content_length(&ctx).await?;
    let min_mpu_threshold = ctx.handle.mpu_threshold_bytes();

    let copy_type = if content_length < min_mpu_threshold {
        tracing::trace!("copy source size ({content_length}) less than multipart threshold ({min_mpu_threshold}); sending as single CopyObject request");
        CopyType::CopyObject(tokio::spawn(copy_object(ctx.clone(), content_length)))
    } else {
        try_start_mpu_copy(ctx, content_length).await?
    };
    Ok(copy_type)
}

/// Learn the size of the copy source by invoking `HeadObject`
async fn source_content_length(ctx: &CopyContext) -> Result<u64, error::Error> {
    let _permit = ctx.handle.scheduler.acquire_permit().await?;
    let req = ctx.request();
    let resp = ctx
        .client()
        .head_object()
        .set_bucket(req.source_bucket.clone())
        .set_key(req.source_key.clone())
        .set_version_id(req.source_version_id.clone())
        .send()
        .instrument(tracing::debug_span!("send-head-object"))
        .await?;

    let content_length = resp
        .content_length()
        .ok_or_else(|| error::missing_field("content_length"))?;
    u64::try_from(content_length).map_err(|_| {
        error::Error::new(
            error::ErrorKind::RuntimeError,
            format!("invalid source content length: {content_length}"),
        )
    })
}

async fn copy_object(ctx: CopyContext, content_length: u64) -> Result<CopyOutput, error::Error> {
    let _permit = ctx.handle.scheduler.acquire_permit().await?;
    let req = ctx.request();
    let resp = ctx
        .client()
        .copy_object()
        .copy_source(req.copy_source().header_value())
        .set_bucket(req.bucket.clone())
        .set_key(req.key.clone())
        .send()
        .instrument(tracing::debug_span!(
            "send-copy-object",
            bucket = req.bucket().unwrap_or_default(),
            key = req.key().unwrap_or_default()
        ))
        .await?;

    Ok(CopyOutput::builder()
        .bucket(req.bucket().unwrap_or_default())
        .key(req.key().unwrap_or_default())
        .content_length(content_length)
        .set_e_tag(
            resp.copy_object_result()
                .and_then(|result| result.e_tag())
                .map(str::to_owned),
        )
        .set_version_id(resp.version_id().map(str::to_owned))
        .build())
}

/// Start a multipart copy
///
/// # Arguments
///
/// * `ctx` - The copy context
/// * `content_length` - The size of the copy source
async fn try_start_mpu_copy(
    ctx: CopyContext,
    content_length: u64,
) -> Result<CopyType, error::Error> {
    let part_size = cmp::max(
        ctx.handle.copy_part_size_bytes(),
        content_length.div_ceil(MAX_PART_NUMBER as u64),
    );
    tracing::trace!("copy request using multipart upload with part size: {part_size} bytes");

    let upload_id = start_mpu(&ctx).await?;
    tracing::trace!("multipart upload started with upload id: {upload_id}");

    let mut mpu_data = MultipartCopyData {
        copy_part_tasks: Default::default(),
        response: Some(
            CopyOutput::builder()
                .bucket(ctx.request().bucket().unwrap_or_default())
                .key(ctx.request().key().unwrap_or_default())
                .content_length(content_length)
                .upload_id(upload_id.clone()),
        ),
        upload_id,
    };

    distribute_work(&mut mpu_data, ctx, part_ranges(content_length, part_size));
    Ok(CopyType::MultipartCopy(mpu_data))
}

/// start a new multipart upload by invoking `CreateMultipartUpload`
async fn start_mpu(ctx: &CopyContext) -> Result<String, error::Error> {
    let _permit = ctx.handle.scheduler.acquire_permit().await?;
    let req = ctx.request();
    let resp = ctx
        .client()
        .create_multipart_upload()
        .set_bucket(req.bucket.clone())
        .set_key(req.key.clone())
        .send()
        .instrument(tracing::debug_span!("send-create-multipart-upload"))
        .await?;

    resp.upload_id
        .ok_or_else(|| error::missing_field("upload_id"))
}

/// Split `content_length` bytes into consecutive ranges of `part_size` bytes.
///
/// The last range holds whatever remains.
fn part_ranges(content_length: u64, part_size: u64) -> Vec<CopyRange> {
    let mut ranges = Vec::new();
    let mut begin_index = 0;
    while begin_index < content_length {
        let size = cmp::min(part_size, content_length - begin_index);
        if let Some(range) = CopyRange::new(begin_index, size) {
            ranges.push(range);
        }
        begin_index += size;
    }
    ranges
}

impl CopyInput {
    /// The object being copied
    pub fn copy_source(&self) -> CopySource {
        let source = CopySource::new(
            self.source_bucket().unwrap_or_default(),
            self.source_key().unwrap_or_default(),
        );
        match self.source_version_id() {
            Some(version_id) => source.with_version_id(version_id),
            None => source,
        }
    }
}
