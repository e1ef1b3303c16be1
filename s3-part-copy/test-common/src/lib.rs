/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Fixtures for running part copy tests against a live S3 compatible service.

use std::sync::OnceLock;

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in the path of an object location
const LOCATION_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// A unique id shared by every test in this process.
///
/// Used to keep bucket names of concurrent test runs from colliding.
pub fn global_uuid_str() -> &'static str {
    static UUID: OnceLock<String> = OnceLock::new();
    UUID.get_or_init(|| uuid::Uuid::new_v4().simple().to_string())
}

/// Build a bucket name unique to this process, `prefix` is kept short enough for the
/// 63 character bucket name limit.
pub fn unique_bucket_name(prefix: &str) -> String {
    let prefix: String = prefix
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .take(30)
        .collect();
    format!("{prefix}-{}", global_uuid_str())
}

/// Fixed length object content: `size` bytes of a repeating pattern.
pub fn fixed_length_bytes(size: usize) -> Bytes {
    b"abcdefghijklmnopqrstuvwxyz0123456789"
        .iter()
        .cycle()
        .take(size)
        .copied()
        .collect::<Vec<u8>>()
        .into()
}

/// Create `bucket`
pub async fn create_bucket(client: &aws_sdk_s3::Client, bucket: &str) {
    client
        .create_bucket()
        .bucket(bucket)
        .send()
        .await
        .unwrap_or_else(|err| panic!("failed to create bucket {bucket}: {err:?}"));
}

/// Put an object of `size` bytes and return its ETag
pub async fn put_fixed_length_object(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    size: usize,
) -> String {
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_length(size as i64)
        .body(ByteStream::from(fixed_length_bytes(size)))
        .send()
        .await
        .unwrap_or_else(|err| panic!("failed to put {bucket}/{key}: {err:?}"));
    resp.e_tag().unwrap_or_default().to_owned()
}

/// Delete `bucket` after removing every object in it and aborting every in progress
/// multipart upload.
pub async fn delete_bucket(client: &aws_sdk_s3::Client, bucket: &str) {
    let mut uploads = client
        .list_multipart_uploads()
        .bucket(bucket)
        .send()
        .await
        .unwrap_or_else(|err| panic!("failed to list uploads in {bucket}: {err:?}"));
    loop {
        for upload in uploads.uploads() {
            client
                .abort_multipart_upload()
                .bucket(bucket)
                .key(upload.key().unwrap_or_default())
                .upload_id(upload.upload_id().unwrap_or_default())
                .send()
                .await
                .unwrap();
        }

        if !uploads.is_truncated().unwrap_or_default() {
            break;
        }
        uploads = client
            .list_multipart_uploads()
            .bucket(bucket)
            .set_key_marker(uploads.next_key_marker().map(str::to_owned))
            .set_upload_id_marker(uploads.next_upload_id_marker().map(str::to_owned))
            .send()
            .await
            .unwrap();
    }

    let mut objects = client
        .list_objects_v2()
        .bucket(bucket)
        .into_paginator()
        .send();
    while let Some(page) = objects.next().await {
        let page = page.unwrap_or_else(|err| panic!("failed to list {bucket}: {err:?}"));
        for object in page.contents() {
            client
                .delete_object()
                .bucket(bucket)
                .key(object.key().unwrap_or_default())
                .send()
                .await
                .unwrap();
        }
    }

    client
        .delete_bucket()
        .bucket(bucket)
        .send()
        .await
        .unwrap_or_else(|err| panic!("failed to delete bucket {bucket}: {err:?}"));
}

/// Compose the location the service reports for a completed upload when buckets are
/// addressed by path: `<endpoint>/<bucket>/<encoded key>`.
pub fn compose_location(endpoint: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/{}/{}",
        endpoint.trim_end_matches('/'),
        bucket,
        utf8_percent_encode(key, LOCATION_PATH)
    )
}

#[cfg(test)]
mod tests {
    use super::{compose_location, fixed_length_bytes, global_uuid_str, unique_bucket_name};

    #[test]
    fn test_compose_location() {
        assert_eq!(
            "http://localhost:9000/bucket/dir/a%20b.txt",
            compose_location("http://localhost:9000/", "bucket", "dir/a b.txt")
        );
    }

    #[test]
    fn test_unique_bucket_name() {
        let name = unique_bucket_name("Part_Copy");
        assert!(name.starts_with("partcopy-"));
        assert!(name.ends_with(global_uuid_str()));
        assert!(name.len() <= 63);
    }

    #[test]
    fn test_fixed_length_bytes() {
        let data = fixed_length_bytes(40);
        assert_eq!(40, data.len());
        assert_eq!(&data[..4], &data[36..]);
    }
}
