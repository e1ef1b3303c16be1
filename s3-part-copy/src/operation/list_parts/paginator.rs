/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error;
use crate::types::PartETag;

use super::{ListParts, ListPartsInput, ListPartsOutput};

/// Paginator for the `ListParts` operation
///
/// Follows `NextPartNumberMarker` while the listing is truncated.
#[derive(Debug)]
pub struct ListPartsPaginator {
    handle: Arc<crate::client::Handle>,
    input: ListPartsInput,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { part_number_marker: Option<i32> },
    Done,
}

impl State {
    fn next_state(self, output: &ListPartsOutput) -> State {
        let next_marker = output
            .next_part_number_marker()
            .and_then(|marker| marker.parse::<i32>().ok());

        match (self, next_marker) {
            (State::Done, _) => State::Done,
            // guard against a service echoing the same marker back
            (State::Paginating { part_number_marker }, Some(next))
                if output.is_truncated() && part_number_marker != Some(next) =>
            {
                State::Paginating {
                    part_number_marker: Some(next),
                }
            }
            _ => State::Done,
        }
    }
}

impl ListPartsPaginator {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, input: ListPartsInput) -> Self {
        let part_number_marker = input.part_number_marker;
        Self {
            handle,
            input,
            state: Some(State::Paginating { part_number_marker }),
        }
    }

    /// Fetch the next page of parts. Returns `None` once every page has been returned.
    pub async fn next_page(&mut self) -> Option<Result<ListPartsOutput, error::Error>> {
        let part_number_marker = match self.state.as_ref()? {
            State::Done => return None,
            State::Paginating { part_number_marker } => *part_number_marker,
        };

        let mut input = self.input.clone();
        input.part_number_marker = part_number_marker;

        match ListParts::orchestrate(self.handle.clone(), input).await {
            Ok(output) => {
                let prev_state = self.state.take()?;
                self.state.replace(prev_state.next_state(&output));
                Some(Ok(output))
            }
            Err(err) => {
                self.state.replace(State::Done);
                Some(Err(err))
            }
        }
    }

    /// Drain the paginator and collect every part of the upload in part number order
    pub async fn collect_parts(mut self) -> Result<Vec<PartETag>, error::Error> {
        let mut parts = Vec::new();
        while let Some(page) = self.next_page().await {
            parts.extend(page?.parts.unwrap_or_default());
        }
        parts.sort_by_key(|part| part.part_number());
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::operation::list_parts::ListPartsOutput;
    use aws_sdk_s3::operation::list_parts::ListPartsOutput as SdkListPartsOutput;
    use aws_sdk_s3::types::Part;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    fn page(truncated: bool, next_marker: Option<&str>) -> ListPartsOutput {
        ListPartsOutput::builder()
            .is_truncated(truncated)
            .set_next_part_number_marker(next_marker.map(str::to_owned))
            .build()
    }

    #[test]
    fn test_next_state() {
        let start = State::Paginating {
            part_number_marker: None,
        };

        let state2 = start.next_state(&page(true, Some("3")));
        assert_eq!(
            State::Paginating {
                part_number_marker: Some(3)
            },
            state2
        );

        // same marker returned again
        let stuck = State::Paginating {
            part_number_marker: Some(3),
        }
        .next_state(&page(true, Some("3")));
        assert_eq!(State::Done, stuck);

        let state3 = state2.next_state(&page(false, Some("6")));
        assert_eq!(State::Done, state3);

        assert_eq!(State::Done, State::Done.next_state(&page(true, Some("9"))));
    }

    #[tokio::test]
    async fn test_collect_parts_follows_marker() {
        let first_page = mock!(aws_sdk_s3::Client::list_parts)
            .match_requests(|r| {
                r.upload_id() == Some("upload-1") && r.part_number_marker().is_none()
            })
            .then_output(|| {
                SdkListPartsOutput::builder()
                    .upload_id("upload-1")
                    .is_truncated(true)
                    .next_part_number_marker("2")
                    .parts(Part::builder().part_number(1).e_tag("e1").size(5).build())
                    .parts(Part::builder().part_number(2).e_tag("e2").size(5).build())
                    .build()
            });
        let second_page = mock!(aws_sdk_s3::Client::list_parts)
            .match_requests(|r| {
                r.upload_id() == Some("upload-1") && r.part_number_marker() == Some("2")
            })
            .then_output(|| {
                SdkListPartsOutput::builder()
                    .upload_id("upload-1")
                    .is_truncated(false)
                    .parts(Part::builder().part_number(3).e_tag("e3").size(1).build())
                    .build()
            });
        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&first_page, &second_page]
        );
        let client = crate::Client::new(crate::Config::builder().client(client).build());

        let parts = client
            .list_parts()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .into_paginator()
            .unwrap()
            .collect_parts()
            .await
            .unwrap();

        assert_eq!(1, first_page.num_calls());
        assert_eq!(1, second_page.num_calls());
        let numbers: Vec<_> = parts.iter().map(|p| p.part_number()).collect();
        assert_eq!(vec![1, 2, 3], numbers);
        let etags: Vec<_> = parts.iter().map(|p| p.e_tag()).collect();
        assert_eq!(vec!["e1", "e2", "e3"], etags);
    }

    #[tokio::test]
    async fn test_next_page_stops_after_last_page() {
        let only_page = mock!(aws_sdk_s3::Client::list_parts).then_output(|| {
            SdkListPartsOutput::builder()
                .upload_id("upload-1")
                .is_truncated(false)
                .parts(Part::builder().part_number(1).e_tag("e1").size(5).build())
                .build()
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&only_page]);
        let client = crate::Client::new(crate::Config::builder().client(client).build());

        let mut paginator = client
            .list_parts()
            .bucket("test-bucket")
            .key("test-key")
            .upload_id("upload-1")
            .into_paginator()
            .unwrap();

        let page = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(1, page.parts().len());
        assert!(paginator.next_page().await.is_none());
        assert_eq!(1, only_page.num_calls());
    }
}
