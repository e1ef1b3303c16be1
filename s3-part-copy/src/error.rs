/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error codes reported by the object storage service that are mapped to a dedicated [`ErrorKind`].
pub mod codes {
    /// The bucket does not exist (either the copy source bucket or the destination bucket)
    pub const NO_SUCH_BUCKET: &str = "NoSuchBucket";
    /// The copy source object does not exist
    pub const NO_SUCH_KEY: &str = "NoSuchKey";
    /// The multipart upload does not exist (it may have been aborted or completed)
    pub const NO_SUCH_UPLOAD: &str = "NoSuchUpload";
    /// A non-final part is smaller than the minimum allowed part size
    pub const ENTITY_TOO_SMALL: &str = "EntityTooSmall";
    /// The requested copy range is not satisfiable
    pub const INVALID_RANGE: &str = "InvalidRange";
    /// One or more of the specified parts could not be found or its ETag did not match
    pub const INVALID_PART: &str = "InvalidPart";
    /// The list of parts was not in ascending order
    pub const INVALID_PART_ORDER: &str = "InvalidPartOrder";
    /// Generic not found returned for requests without a body (e.g. `HeadObject`)
    pub const NOT_FOUND: &str = "NotFound";
}

/// Errors returned by this library
///
/// Errors that originate from the object storage service retain the service error code,
/// message and request ID. The message is reported verbatim so callers can match on it.
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    service: Option<ServiceErrorMetadata>,
    source: BoxError,
}

/// General categories of part copy errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Some kind of internal runtime issue (e.g. task failure, missing response field, etc)
    RuntimeError,

    /// Resource not found without further detail (e.g. `HeadObject` on a missing object)
    NotFound,

    /// The source or destination bucket does not exist
    NoSuchBucket,

    /// The copy source object does not exist
    NoSuchKey,

    /// The multipart upload ID does not exist
    NoSuchUpload,

    /// A part other than the last one is smaller than the service's minimum part size
    EntityTooSmall,

    /// The copy range is not satisfiable for the source object
    InvalidRange,

    /// A part given to complete the upload is missing, mismatched or out of order
    InvalidPart,

    /// The service returned an error not covered by a more specific kind
    ServiceError,

    /// The request did not produce a service response (e.g. timeout, dispatch or construction failure)
    RequestFailed,

    /// Failed to copy a single part of a larger transfer
    PartCopyFailed(PartCopyFailed),

    /// The operation is being cancelled because the user explicitly called `.abort` on the handle,
    /// or another part of the same transfer failed.
    OperationCancelled,
}

/// Stores information about a failed part copy
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartCopyFailed {
    part_number: i32,
}

impl PartCopyFailed {
    /// The part number that failed to copy
    pub fn part_number(&self) -> i32 {
        self.part_number
    }
}

/// Error details reported by the object storage service
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            service: None,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The error code returned by the service, if any (e.g. `NoSuchBucket`)
    pub fn code(&self) -> Option<&str> {
        self.service.as_ref().and_then(|s| s.code.as_deref())
    }

    /// The error message returned by the service, if any
    pub fn message(&self) -> Option<&str> {
        self.service.as_ref().and_then(|s| s.message.as_deref())
    }

    /// The ID of the request that failed, if the service returned one
    pub fn request_id(&self) -> Option<&str> {
        self.service.as_ref().and_then(|s| s.request_id.as_deref())
    }

    /// Re-tag this error as the failure of a single part of a larger transfer.
    ///
    /// Service metadata is kept.
    pub(crate) fn into_part_failure(self, part_number: i32) -> Error {
        Error {
            kind: ErrorKind::PartCopyFailed(PartCopyFailed { part_number }),
            service: self.service.clone(),
            source: Box::new(self),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::NoSuchBucket => write!(f, "bucket does not exist"),
            ErrorKind::NoSuchKey => write!(f, "key does not exist"),
            ErrorKind::NoSuchUpload => write!(f, "multipart upload does not exist"),
            ErrorKind::EntityTooSmall => write!(f, "part smaller than the minimum allowed size"),
            ErrorKind::InvalidRange => write!(f, "invalid copy range"),
            ErrorKind::InvalidPart => write!(f, "invalid part"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::RequestFailed => write!(f, "request failed"),
            ErrorKind::PartCopyFailed(failed) => {
                write!(f, "failed to copy part {}", failed.part_number)
            }
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }?;

        if let Some(message) = self.message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn missing_field(field: &'static str) -> Error {
    Error::new(
        ErrorKind::RuntimeError,
        format!("service response is missing required field `{field}`"),
    )
}

/// Map a service error code to the error kind exposed by this library
fn kind_for_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some(codes::NO_SUCH_BUCKET) => ErrorKind::NoSuchBucket,
        Some(codes::NO_SUCH_KEY) => ErrorKind::NoSuchKey,
        Some(codes::NO_SUCH_UPLOAD) => ErrorKind::NoSuchUpload,
        Some(codes::ENTITY_TOO_SMALL) => ErrorKind::EntityTooSmall,
        Some(codes::INVALID_RANGE) => ErrorKind::InvalidRange,
        Some(codes::INVALID_PART | codes::INVALID_PART_ORDER) => ErrorKind::InvalidPart,
        Some(codes::NOT_FOUND) => ErrorKind::NotFound,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let service = value.as_service_error().map(|err| ServiceErrorMetadata {
            code: err.code().map(str::to_owned),
            message: err.message().map(str::to_owned),
            request_id: err.meta().extra("aws_request_id").map(str::to_owned),
        });

        let kind = match &service {
            Some(meta) => kind_for_code(meta.code.as_deref()),
            None => ErrorKind::RequestFailed,
        };

        Error {
            kind,
            service,
            source: value.into(),
        }
    }
}

static CANCELLATION_ERROR: &str =
    "at least one part copy has failed or been aborted, cancelling all ongoing requests";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}

#[cfg(test)]
mod tests {
    use super::{codes, Error, ErrorKind};
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::upload_part_copy::UploadPartCopyError;
    use aws_smithy_runtime_api::http::{Response, StatusCode};
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    fn service_error(code: &str, message: &str) -> Error {
        let err = UploadPartCopyError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message(message)
                .custom("aws_request_id", "5C3D9175B6FC201293AD4890")
                .build(),
        );
        let raw = Response::new(StatusCode::try_from(404).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw).into()
    }

    #[test]
    fn test_service_codes_map_to_kinds() {
        let cases = [
            (codes::NO_SUCH_BUCKET, ErrorKind::NoSuchBucket),
            (codes::NO_SUCH_KEY, ErrorKind::NoSuchKey),
            (codes::NO_SUCH_UPLOAD, ErrorKind::NoSuchUpload),
            (codes::ENTITY_TOO_SMALL, ErrorKind::EntityTooSmall),
            (codes::INVALID_RANGE, ErrorKind::InvalidRange),
            (codes::INVALID_PART_ORDER, ErrorKind::InvalidPart),
            (codes::NOT_FOUND, ErrorKind::NotFound),
            ("AccessDenied", ErrorKind::ServiceError),
        ];

        for (code, expected) in cases {
            let err = service_error(code, "boom");
            assert_eq!(&expected, err.kind(), "code: {code}");
            assert_eq!(Some(code), err.code());
        }
    }

    #[test]
    fn test_service_metadata_is_kept() {
        let err = service_error(codes::NO_SUCH_BUCKET, "The specified bucket does not exist.");
        assert_eq!(
            Some("The specified bucket does not exist."),
            err.message()
        );
        assert_eq!(Some("5C3D9175B6FC201293AD4890"), err.request_id());
        assert_eq!(
            "bucket does not exist: The specified bucket does not exist.",
            err.to_string()
        );
    }

    #[test]
    fn test_part_failure_keeps_service_metadata() {
        let err = service_error(codes::NO_SUCH_KEY, "The specified key does not exist.")
            .into_part_failure(3);
        match err.kind() {
            ErrorKind::PartCopyFailed(failed) => assert_eq!(3, failed.part_number()),
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(Some(codes::NO_SUCH_KEY), err.code());
    }

    #[test]
    fn test_construction_failure_has_no_service_metadata() {
        let err: Error =
            SdkError::<UploadPartCopyError, Response>::construction_failure("bad request").into();
        assert_eq!(&ErrorKind::RequestFailed, err.kind());
        assert_eq!(None, err.code());
        assert_eq!("request failed", err.to_string());
    }
}
