/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for starting a multipart upload
pub mod create_multipart_upload;

/// Types for copying an object (or a range of it) into a single part
pub mod upload_part_copy;

/// Types for listing the parts of a multipart upload
pub mod list_parts;

/// Types for completing a multipart upload
pub mod complete_multipart_upload;

/// Types for aborting a multipart upload
pub mod abort_multipart_upload;

/// Types for copying an entire object
pub mod copy;
