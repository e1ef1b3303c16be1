/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::runtime::scheduler::{max_in_flight, Scheduler};
use crate::types::PartSize;
use crate::Config;
use crate::MEBIBYTE;
use std::sync::Arc;

/// Part copy client for S3 compatible object storage.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. scheduler, budgets, config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
    pub(crate) scheduler: Scheduler,
}

impl Handle {
    /// Get the concrete number of workers to use based on the concurrency setting.
    pub(crate) fn num_workers(&self) -> usize {
        max_in_flight(self.config.concurrency())
    }

    /// Get the concrete minimum source size in bytes to use to determine whether a multipart
    /// copy is used for a given request.
    pub(crate) fn mpu_threshold_bytes(&self) -> u64 {
        match self.config.multipart_threshold() {
            PartSize::Auto => 128 * MEBIBYTE,
            PartSize::Target(explicit) => *explicit,
        }
    }

    /// Get the concrete target part size to use for ranged part copies
    pub(crate) fn copy_part_size_bytes(&self) -> u64 {
        match self.config.part_size() {
            PartSize::Auto => 64 * MEBIBYTE,
            PartSize::Target(explicit) => *explicit,
        }
    }
}

impl Client {
    /// Creates a new client from a part copy config.
    pub fn new(config: Config) -> Client {
        let scheduler = Scheduler::new(config.concurrency().clone());
        let handle = Arc::new(Handle { config, scheduler });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Start a new multipart upload and obtain its upload ID.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateMultipartUpload`](crate::operation::create_multipart_upload::builders::CreateMultipartUploadFluentBuilder) operation.
    pub fn create_multipart_upload(
        &self,
    ) -> crate::operation::create_multipart_upload::builders::CreateMultipartUploadFluentBuilder
    {
        crate::operation::create_multipart_upload::builders::CreateMultipartUploadFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Copy an existing object, or a byte range of it, into one part of a multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`UploadPartCopy`](crate::operation::upload_part_copy::builders::UploadPartCopyFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_part_copy::error::Error;
    ///
    /// async fn copy_first_mebibyte(
    ///     client: &s3_part_copy::Client,
    ///     upload_id: &str,
    /// ) -> Result<(), Error> {
    ///     let part = client
    ///         .upload_part_copy()
    ///         .source_bucket("source-bucket")
    ///         .source_key("source-key")
    ///         .bucket("target-bucket")
    ///         .key("target-key")
    ///         .upload_id(upload_id)
    ///         .part_number(1)
    ///         .begin_index(0)
    ///         .part_size(1024 * 1024)
    ///         .send()
    ///         .await?;
    ///
    ///     println!("copied part 1 with etag {}", part.e_tag());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload_part_copy(
        &self,
    ) -> crate::operation::upload_part_copy::builders::UploadPartCopyFluentBuilder {
        crate::operation::upload_part_copy::builders::UploadPartCopyFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the parts that have been copied into a multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`ListParts`](crate::operation::list_parts::builders::ListPartsFluentBuilder) operation.
    pub fn list_parts(&self) -> crate::operation::list_parts::builders::ListPartsFluentBuilder {
        crate::operation::list_parts::builders::ListPartsFluentBuilder::new(self.handle.clone())
    }

    /// Assemble the copied parts into the target object.
    ///
    /// Constructs a fluent builder for the
    /// [`CompleteMultipartUpload`](crate::operation::complete_multipart_upload::builders::CompleteMultipartUploadFluentBuilder) operation.
    pub fn complete_multipart_upload(
        &self,
    ) -> crate::operation::complete_multipart_upload::builders::CompleteMultipartUploadFluentBuilder
    {
        crate::operation::complete_multipart_upload::builders::CompleteMultipartUploadFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Discard a multipart upload and any parts copied into it.
    ///
    /// Constructs a fluent builder for the
    /// [`AbortMultipartUpload`](crate::operation::abort_multipart_upload::builders::AbortMultipartUploadFluentBuilder) operation.
    pub fn abort_multipart_upload(
        &self,
    ) -> crate::operation::abort_multipart_upload::builders::AbortMultipartUploadFluentBuilder
    {
        crate::operation::abort_multipart_upload::builders::AbortMultipartUploadFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Copy an entire object.
    ///
    /// Sources at or above the multipart threshold are split into ranges that are copied
    /// concurrently with `UploadPartCopy`; smaller sources use a single `CopyObject` request.
    ///
    /// Constructs a fluent builder for the
    /// [`Copy`](crate::operation::copy::builders::CopyFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_part_copy::error::Error;
    ///
    /// async fn copy_object(client: &s3_part_copy::Client) -> Result<(), Error> {
    ///     let handle = client
    ///         .copy()
    ///         .source_bucket("source-bucket")
    ///         .source_key("source-key")
    ///         .bucket("target-bucket")
    ///         .key("target-key")
    ///         .initiate()?;
    ///
    ///     // initiate() will return before the transfer is complete.
    ///     let output = handle.join().await?;
    ///     println!("copied {} parts", output.parts().len());
    ///     Ok(())
    /// }
    /// ```
    pub fn copy(&self) -> crate::operation::copy::builders::CopyFluentBuilder {
        crate::operation::copy::builders::CopyFluentBuilder::new(self.handle.clone())
    }
}
