/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::PartETag;

/// Compute the ETag the service reports for an object assembled from `parts`.
///
/// The composite ETag is the hex MD5 digest of the concatenated binary MD5 digests of each
/// part, followed by `-<number of parts>`. Surrounding quotes on the part ETags are ignored
/// and the result is returned unquoted.
///
/// Returns `None` when `parts` is empty or any part ETag is not a hex encoded MD5 digest
/// (e.g. parts of an object encrypted with a customer key).
///
/// ```
/// use s3_part_copy::etag::multipart_etag;
/// use s3_part_copy::types::PartETag;
///
/// let parts = vec![
///     PartETag::new(1, "\"5d41402abc4b2a76b9719d911017c592\""),
///     PartETag::new(2, "\"7d793037a0760186574b0282f2f435e7\""),
/// ];
/// let e_tag = multipart_etag(&parts).unwrap();
/// assert!(e_tag.ends_with("-2"));
/// ```
pub fn multipart_etag(parts: &[PartETag]) -> Option<String> {
    if parts.is_empty() {
        return None;
    }

    let mut digests = Vec::with_capacity(parts.len() * 16);
    for part in parts {
        let raw = hex::decode(normalize(part.e_tag())).ok()?;
        if raw.len() != 16 {
            return None;
        }
        digests.extend_from_slice(&raw);
    }

    Some(format!("{:x}-{}", md5::compute(&digests), parts.len()))
}

/// Compare two ETags ignoring surrounding quotes and hex case.
pub fn etag_eq(a: &str, b: &str) -> bool {
    normalize(a).eq_ignore_ascii_case(normalize(b))
}

fn normalize(e_tag: &str) -> &str {
    e_tag.trim().trim_matches('"')
}
