/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A client for building objects out of server-side part copies on S3 compatible
//! object storage.
//!
//! A multipart upload is normally populated with `UploadPart` requests that carry the
//! data. [`UploadPartCopy`] instead fills a part by copying bytes (optionally a sub-range)
//! out of an object that already lives in the service, so no object data flows through
//! the client. This crate wraps the multipart upload lifecycle around that request:
//!
//! * [`create_multipart_upload`](crate::Client::create_multipart_upload) - claim an upload ID
//! * [`upload_part_copy`](crate::Client::upload_part_copy) - copy an object (or a range of it) into a part
//! * [`list_parts`](crate::Client::list_parts) - list the parts copied so far
//! * [`complete_multipart_upload`](crate::Client::complete_multipart_upload) - assemble the parts
//! * [`abort_multipart_upload`](crate::Client::abort_multipart_upload) - discard the upload
//! * [`copy`](crate::Client::copy) - copy an entire object using concurrent ranged part copies
//!
//! [`UploadPartCopy`]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_UploadPartCopy.html
//!
//! # Examples
//!
//! Copy a range of one object into the first part of a new upload:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_part_copy::error::Error> {
//! let config = s3_part_copy::from_env().load().await;
//! let client = s3_part_copy::Client::new(config);
//!
//! let mpu = client
//!     .create_multipart_upload()
//!     .bucket("target-bucket")
//!     .key("target-key")
//!     .send()
//!     .await?;
//!
//! let part = client
//!     .upload_part_copy()
//!     .source_bucket("source-bucket")
//!     .source_key("source-key")
//!     .bucket("target-bucket")
//!     .key("target-key")
//!     .upload_id(mpu.upload_id())
//!     .part_number(1)
//!     .begin_index(128 * 1024)
//!     .part_size(128 * 1024)
//!     .send()
//!     .await?;
//!
//! client
//!     .complete_multipart_upload()
//!     .bucket("target-bucket")
//!     .key("target-key")
//!     .upload_id(mpu.upload_id())
//!     .parts(vec![part.part_etag()])
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Default in-flight concurrency
pub(crate) const DEFAULT_CONCURRENCY: usize = 128;

pub(crate) const MEBIBYTE: u64 = 1024 * 1024;

/// Error types emitted by `s3-part-copy`
pub mod error;

/// Common types used by `s3-part-copy`
pub mod types;

/// Multipart ETag helpers
pub mod etag;

/// Part copy client
pub mod client;

/// Part copy operations
pub mod operation;

/// Client configuration
pub mod config;

/// Internal runtime components
pub(crate) mod runtime;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
