/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::copy::context::CopyContext;
use crate::operation::copy::handle::MultipartCopyData;
use crate::operation::upload_part_copy::{send_upload_part_copy, UploadPartCopyInput};
use crate::types::{CopyRange, PartETag};
use tower::{service_fn, Service, ServiceBuilder, ServiceExt};
use tracing::Instrument;

/// Request/input type for our "copy_part" service.
#[derive(Debug, Clone)]
pub(super) struct CopyPartRequest {
    pub(super) ctx: CopyContext,
    pub(super) upload_id: String,
    pub(super) part_number: i32,
    pub(super) range: CopyRange,
}

/// handler (service fn) for a single part
async fn copy_part_handler(request: CopyPartRequest) -> Result<PartETag, error::Error> {
    let ctx = request.ctx;
    let part_number = request.part_number;
    let req = ctx.request();

    let input = UploadPartCopyInput {
        source_bucket: req.source_bucket.clone(),
        source_key: req.source_key.clone(),
        source_version_id: req.source_version_id.clone(),
        bucket: req.bucket.clone(),
        key: req.key.clone(),
        upload_id: Some(request.upload_id),
        part_number,
        begin_index: Some(request.range.begin_index()),
        part_size: Some(request.range.part_size()),
    };

    let _permit = ctx.handle.scheduler.acquire_permit().await?;

    let output = send_upload_part_copy(ctx.client(), &input)
        .await
        .map_err(|err| err.into_part_failure(part_number))?;

    let mut part = output.part_etag();
    part.size = i64::try_from(request.range.part_size()).ok();
    Ok(part)
}

/// Create a new tower::Service for copying individual parts of an object
pub(super) fn copy_part_service(
    ctx: &CopyContext,
) -> impl Service<CopyPartRequest, Response = PartETag, Error = error::Error, Future: Send>
       + Clone
       + Send {
    let svc = service_fn(copy_part_handler);
    ServiceBuilder::new()
        .concurrency_limit(ctx.handle.num_workers())
        .service(svc)
}

/// Spawn tasks to copy every range of the source object
///
/// # Arguments
///
/// * mpu_data - the multipart copy state to spawn tasks into
/// * ctx - the context for this copy
/// * ranges - the source ranges, in part number order
pub(super) fn distribute_work(
    mpu_data: &mut MultipartCopyData,
    ctx: CopyContext,
    ranges: Vec<CopyRange>,
) {
    let svc = copy_part_service(&ctx);
    let n_parts = ranges.len();
    for (part_number, range) in (1..).zip(ranges) {
        let req = CopyPartRequest {
            ctx: ctx.clone(),
            upload_id: mpu_data.upload_id.clone(),
            part_number,
            range,
        };
        let svc = svc.clone();
        let task = async move { svc.oneshot(req).await }
            .instrument(tracing::debug_span!("copy-part", part_number));
        mpu_data.copy_part_tasks.spawn(task);
    }
    tracing::trace!("work distributed for copying {n_parts} parts");
}
