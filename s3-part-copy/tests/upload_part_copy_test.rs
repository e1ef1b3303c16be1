/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadOutput;
use aws_sdk_s3::operation::complete_multipart_upload::{
    CompleteMultipartUploadError, CompleteMultipartUploadOutput,
};
use aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadOutput;
use aws_sdk_s3::operation::list_parts::ListPartsOutput;
use aws_sdk_s3::operation::upload_part_copy::{UploadPartCopyError, UploadPartCopyOutput};
use aws_sdk_s3::types::{CopyPartResult, Part};
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use aws_smithy_types::error::ErrorMetadata;
use s3_part_copy::error::{codes, ErrorKind};
use s3_part_copy::etag::{etag_eq, multipart_etag};
use s3_part_copy::operation::upload_part_copy::UploadPartCopyInput;

const SOURCE_BUCKET: &str = "source-bucket";
const TARGET_BUCKET: &str = "target-bucket";
const UPLOAD_ID: &str = "0004B9895DBBB6EC98E36";
const PART_ETAG_1: &str = "\"0c78aef83f66abc1fa1e8477f296d394\"";
const PART_ETAG_2: &str = "\"acbd18db4cc2f85cedef654fccc4a4d8\"";

fn part_copy_client(rule_mode: RuleMode, rules: &[&Rule]) -> s3_part_copy::Client {
    let client = mock_client!(aws_sdk_s3, rule_mode, rules);
    let config = s3_part_copy::Config::builder().client(client).build();
    s3_part_copy::Client::new(config)
}

fn create_mpu_rule(key: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::create_multipart_upload)
        .match_requests(move |r| r.bucket() == Some(TARGET_BUCKET) && r.key() == Some(key))
        .then_output(move || {
            CreateMultipartUploadOutput::builder()
                .bucket(TARGET_BUCKET)
                .key(key)
                .upload_id(UPLOAD_ID)
                .build()
        })
}

fn part_copy_rule(part_number: i32, e_tag: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::upload_part_copy)
        .match_requests(move |r| {
            r.upload_id() == Some(UPLOAD_ID) && r.part_number() == Some(part_number)
        })
        .then_output(move || {
            UploadPartCopyOutput::builder()
                .copy_part_result(CopyPartResult::builder().e_tag(e_tag).build())
                .build()
        })
}

fn part_copy_error_rule(code: &'static str, message: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::upload_part_copy).then_error(move || {
        UploadPartCopyError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message(message)
                .custom("aws_request_id", "5C3D9175B6FC201293AD4890")
                .build(),
        )
    })
}

fn abort_rule() -> Rule {
    mock!(aws_sdk_s3::Client::abort_multipart_upload)
        .match_requests(|r| r.upload_id() == Some(UPLOAD_ID))
        .then_output(|| AbortMultipartUploadOutput::builder().build())
}

#[tokio::test]
async fn test_normal_part_copy() {
    let (_guard, rx) = capture_test_logs();
    let key = "normal-object.txt";
    let create = create_mpu_rule(key);
    let copy_part = mock!(aws_sdk_s3::Client::upload_part_copy)
        .match_requests(|r| {
            r.copy_source() == Some("source-bucket/dir/normal-object.txt")
                && r.copy_source_range().is_none()
                && r.part_number() == Some(1)
        })
        .then_output(|| {
            UploadPartCopyOutput::builder()
                .copy_part_result(CopyPartResult::builder().e_tag(PART_ETAG_1).build())
                .build()
        });
    let list = mock!(aws_sdk_s3::Client::list_parts).then_output(|| {
        ListPartsOutput::builder()
            .bucket(TARGET_BUCKET)
            .key("normal-object.txt")
            .upload_id(UPLOAD_ID)
            .max_parts(1000)
            .is_truncated(false)
            .next_part_number_marker("1")
            .parts(
                Part::builder()
                    .part_number(1)
                    .e_tag(PART_ETAG_1)
                    .size(1024 * 1024)
                    .build(),
            )
            .build()
    });
    let expected_etag = multipart_etag(&[s3_part_copy::types::PartETag::new(1, PART_ETAG_1)])
        .expect("md5 part etag");
    let expected_etag_clone = expected_etag.clone();
    let complete = mock!(aws_sdk_s3::Client::complete_multipart_upload)
        .match_requests(|r| {
            let parts = r
                .multipart_upload()
                .map(|mpu| mpu.parts())
                .unwrap_or_default();
            parts.len() == 1 && parts[0].e_tag() == Some(PART_ETAG_1)
        })
        .then_output(move || {
            CompleteMultipartUploadOutput::builder()
                .bucket(TARGET_BUCKET)
                .key("normal-object.txt")
                .location("http://localhost:9000/target-bucket/normal-object.txt")
                .e_tag(format!("\"{expected_etag_clone}\""))
                .build()
        });
    let client = part_copy_client(
        RuleMode::Sequential,
        &[&create, &copy_part, &list, &complete],
    );

    let upload = client
        .create_multipart_upload()
        .bucket(TARGET_BUCKET)
        .key(key)
        .send()
        .await
        .unwrap();
    assert_eq!(UPLOAD_ID, upload.upload_id());

    let part = client
        .upload_part_copy()
        .source_bucket(SOURCE_BUCKET)
        .source_key("dir/normal-object.txt")
        .bucket(TARGET_BUCKET)
        .key(key)
        .upload_id(upload.upload_id())
        .part_number(1)
        .send()
        .await
        .unwrap();
    assert_eq!(1, part.part_number());
    assert_eq!(PART_ETAG_1, part.e_tag());

    let listing = client
        .list_parts()
        .bucket(TARGET_BUCKET)
        .key(key)
        .upload_id(UPLOAD_ID)
        .send()
        .await
        .unwrap();
    assert_eq!(Some(1000), listing.max_parts());
    assert!(!listing.is_truncated());
    assert!(listing.next_part_number_marker().is_some());
    assert_eq!(1, listing.parts().len());
    assert!(etag_eq(part.e_tag(), listing.parts()[0].e_tag()));

    let completed = client
        .complete_multipart_upload()
        .bucket(TARGET_BUCKET)
        .key(key)
        .upload_id(UPLOAD_ID)
        .part(part.part_etag())
        .send()
        .await
        .unwrap();
    assert_eq!(
        Some("http://localhost:9000/target-bucket/normal-object.txt"),
        completed.location()
    );
    assert!(etag_eq(&expected_etag, completed.e_tag().unwrap()));

    let logs = rx.contents();
    assert!(logs.contains("completed copy of part number 1"));
}

#[tokio::test]
async fn test_part_copy_error_codes() {
    let no_source_bucket = part_copy_error_rule(
        codes::NO_SUCH_BUCKET,
        "The specified bucket does not exist.",
    );
    let no_source_key =
        part_copy_error_rule(codes::NO_SUCH_KEY, "The specified key does not exist.");
    let no_target_bucket = part_copy_error_rule(
        codes::NO_SUCH_BUCKET,
        "The specified bucket does not exist.",
    );
    let part_1 = part_copy_rule(1, PART_ETAG_1);
    let part_2 = part_copy_rule(2, PART_ETAG_2);
    let complete = mock!(aws_sdk_s3::Client::complete_multipart_upload).then_error(|| {
        CompleteMultipartUploadError::generic(
            ErrorMetadata::builder()
                .code(codes::ENTITY_TOO_SMALL)
                .message("Your proposed upload is smaller than the minimum allowed object size.")
                .build(),
        )
    });
    let abort = abort_rule();
    let client = part_copy_client(
        RuleMode::Sequential,
        &[
            &no_source_bucket,
            &no_source_key,
            &no_target_bucket,
            &part_1,
            &part_2,
            &complete,
            &abort,
        ],
    );

    let copy_part = |source_bucket: &str, source_key: &str, bucket: &str, part_number: i32| {
        client
            .upload_part_copy()
            .source_bucket(source_bucket)
            .source_key(source_key)
            .bucket(bucket)
            .key("unnormal-object.txt")
            .upload_id(UPLOAD_ID)
            .part_number(part_number)
            .begin_index(0)
            .part_size(100)
            .send()
    };

    let err = copy_part("no-such-source-bucket", "source.txt", TARGET_BUCKET, 1)
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::NoSuchBucket, err.kind());
    assert!(err
        .message()
        .unwrap()
        .starts_with("The specified bucket does not exist"));
    assert_eq!(Some("5C3D9175B6FC201293AD4890"), err.request_id());

    let err = copy_part(SOURCE_BUCKET, "no-such-key.txt", TARGET_BUCKET, 1)
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::NoSuchKey, err.kind());
    assert!(err
        .message()
        .unwrap()
        .starts_with("The specified key does not exist"));

    let err = copy_part(SOURCE_BUCKET, "source.txt", "no-such-target-bucket", 1)
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::NoSuchBucket, err.kind());

    let part_1 = copy_part(SOURCE_BUCKET, "source.txt", TARGET_BUCKET, 1)
        .await
        .unwrap();
    let part_2 = copy_part(SOURCE_BUCKET, "source.txt", TARGET_BUCKET, 2)
        .await
        .unwrap();

    let err = client
        .complete_multipart_upload()
        .bucket(TARGET_BUCKET)
        .key("unnormal-object.txt")
        .upload_id(UPLOAD_ID)
        .parts([part_2.part_etag(), part_1.part_etag()])
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::EntityTooSmall, err.kind());
    assert_eq!(Some(codes::ENTITY_TOO_SMALL), err.code());

    let aborted = client
        .abort_multipart_upload()
        .bucket(TARGET_BUCKET)
        .key("unnormal-object.txt")
        .upload_id(UPLOAD_ID)
        .send()
        .await
        .unwrap();
    assert_eq!(Some(UPLOAD_ID), aborted.upload_id());
}

#[tokio::test]
async fn test_part_copy_by_range() {
    const RANGE_SIZE: u64 = 128 * 1024;
    let ranges = [
        (1, "bytes=0-131071"),
        (2, "bytes=131072-262143"),
        (3, "bytes=262144-393215"),
    ];
    let rules: Vec<Rule> = ranges
        .into_iter()
        .map(|(part_number, range)| {
            mock!(aws_sdk_s3::Client::upload_part_copy)
                .match_requests(move |r| {
                    r.part_number() == Some(part_number) && r.copy_source_range() == Some(range)
                })
                .then_output(move || {
                    UploadPartCopyOutput::builder()
                        .copy_part_result(
                            CopyPartResult::builder()
                                .e_tag(format!("etag-{part_number}"))
                                .build(),
                        )
                        .build()
                })
        })
        .collect();
    let rule_refs: Vec<&Rule> = rules.iter().collect();
    let client = part_copy_client(RuleMode::Sequential, &rule_refs);

    for (idx, part_number) in (1..=3).enumerate() {
        let part = UploadPartCopyInput::builder()
            .source_bucket(SOURCE_BUCKET)
            .source_key("range-source.bin")
            .bucket(TARGET_BUCKET)
            .key("range-object.bin")
            .upload_id(UPLOAD_ID)
            .part_number(part_number)
            .begin_index(idx as u64 * RANGE_SIZE)
            .part_size(RANGE_SIZE)
            .send_with(&client)
            .await
            .unwrap();
        assert_eq!(part_number, part.part_number());
        assert_eq!(format!("etag-{part_number}"), part.e_tag());
    }
}

#[tokio::test]
async fn test_part_copy_invalid_input_is_not_sent() {
    let unused = part_copy_rule(1, PART_ETAG_1);
    let client = part_copy_client(RuleMode::MatchAny, &[&unused]);

    let base = || {
        client
            .upload_part_copy()
            .source_bucket(SOURCE_BUCKET)
            .source_key("source.txt")
            .bucket(TARGET_BUCKET)
            .key("target.txt")
            .upload_id(UPLOAD_ID)
    };

    let only_begin = base().part_number(1).begin_index(10).send().await;
    assert_eq!(&ErrorKind::InputInvalid, only_begin.unwrap_err().kind());

    let zero_size = base().part_number(1).begin_index(0).part_size(0).send().await;
    assert_eq!(&ErrorKind::InputInvalid, zero_size.unwrap_err().kind());

    let bad_part_number = base().part_number(10_001).send().await;
    assert_eq!(&ErrorKind::InputInvalid, bad_part_number.unwrap_err().kind());

    let no_upload = client
        .upload_part_copy()
        .source_bucket(SOURCE_BUCKET)
        .source_key("source.txt")
        .bucket(TARGET_BUCKET)
        .key("target.txt")
        .part_number(1)
        .send()
        .await;
    assert_eq!(&ErrorKind::InputInvalid, no_upload.unwrap_err().kind());
}

#[tokio::test]
async fn test_part_copy_special_chars() {
    let key = "测\\r试-中.~,+\"'*&￥#@%！（文）+字符|？/.zip";
    let copy_part = mock!(aws_sdk_s3::Client::upload_part_copy)
        .match_requests(|r| {
            r.copy_source()
                == Some(
                    "source-bucket/%E6%B5%8B%5Cr%E8%AF%95-%E4%B8%AD.~%2C%2B%22%27%2A%26%EF%BF%A5%23%40%25%EF%BC%81%EF%BC%88%E6%96%87%EF%BC%89%2B%E5%AD%97%E7%AC%A6%7C%EF%BC%9F/.zip",
                )
        })
        .then_output(|| {
            UploadPartCopyOutput::builder()
                .copy_part_result(CopyPartResult::builder().e_tag(PART_ETAG_1).build())
                .copy_source_version_id("v2")
                .build()
        });
    let client = part_copy_client(RuleMode::Sequential, &[&copy_part]);

    let part = client
        .upload_part_copy()
        .source_bucket(SOURCE_BUCKET)
        .source_key(key)
        .bucket(TARGET_BUCKET)
        .key(key)
        .upload_id(UPLOAD_ID)
        .part_number(1)
        .send()
        .await
        .unwrap();
    assert_eq!(PART_ETAG_1, part.e_tag());
    assert_eq!(Some("v2"), part.copy_source_version_id());
}

#[tokio::test]
async fn test_part_copy_oversized_range_rejected() {
    let invalid_range = mock!(aws_sdk_s3::Client::upload_part_copy)
        .match_requests(|r| r.copy_source_range() == Some("bytes=0-1048575"))
        .then_error(|| {
            UploadPartCopyError::generic(
                ErrorMetadata::builder()
                    .code(codes::INVALID_RANGE)
                    .message("The requested range is not satisfiable")
                    .build(),
            )
        });
    let client = part_copy_client(RuleMode::Sequential, &[&invalid_range]);

    let err = client
        .upload_part_copy()
        .source_bucket(SOURCE_BUCKET)
        .source_key("small.txt")
        .bucket(TARGET_BUCKET)
        .key("oversized.txt")
        .upload_id(UPLOAD_ID)
        .part_number(1)
        .begin_index(0)
        .part_size(1024 * 1024)
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InvalidRange, err.kind());
}
