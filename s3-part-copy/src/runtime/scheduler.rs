/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error;
use crate::types::ConcurrencyMode;
use crate::DEFAULT_CONCURRENCY;

/// Bounds the number of requests a client has in flight.
///
/// Shared by every operation of a client, including each part of a `copy` transfer, so
/// a single large copy and a stream of single part copies compete fairly for the same
/// budget.
#[derive(Debug, Clone)]
pub(crate) struct Scheduler {
    permits: Arc<Semaphore>,
}

impl Scheduler {
    pub(crate) fn new(mode: ConcurrencyMode) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight(&mode))),
        }
    }

    /// Wait until one more request may be sent. The request must be sent while the
    /// returned permit is held.
    pub(crate) async fn acquire_permit(&self) -> Result<OwnedWorkPermit, error::Error> {
        if self.permits.available_permits() == 0 {
            tracing::trace!("no permits available, waiting for an in-flight request");
        }
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|err| error::Error::new(error::ErrorKind::RuntimeError, err))?;
        Ok(OwnedWorkPermit { _inner: permit })
    }
}

/// Number of requests allowed in flight for the given concurrency mode
pub(crate) fn max_in_flight(mode: &ConcurrencyMode) -> usize {
    match mode {
        ConcurrencyMode::Auto => DEFAULT_CONCURRENCY,
        ConcurrencyMode::Explicit(concurrency) => (*concurrency).max(1),
    }
}

/// Permission to have one request in flight, released when dropped.
#[must_use]
#[clippy::has_significant_drop]
#[derive(Debug)]
pub(crate) struct OwnedWorkPermit {
    _inner: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::{max_in_flight, Scheduler};
    use crate::types::ConcurrencyMode;
    use crate::DEFAULT_CONCURRENCY;

    #[test]
    fn test_max_in_flight() {
        assert_eq!(DEFAULT_CONCURRENCY, max_in_flight(&ConcurrencyMode::Auto));
        assert_eq!(8, max_in_flight(&ConcurrencyMode::Explicit(8)));
        assert_eq!(1, max_in_flight(&ConcurrencyMode::Explicit(0)));
    }

    #[tokio::test]
    async fn test_acquire_waits_for_release() {
        let scheduler = Scheduler::new(ConcurrencyMode::Explicit(1));
        let held = scheduler.acquire_permit().await.unwrap();
        let mut pending = tokio_test::task::spawn(scheduler.acquire_permit());
        tokio_test::assert_pending!(pending.poll());

        drop(held);
        assert!(pending.is_woken());
        tokio_test::assert_ready_ok!(pending.poll());
    }

    #[tokio::test]
    async fn test_permits_shared_between_clones() {
        let scheduler = Scheduler::new(ConcurrencyMode::Explicit(2));
        let other = scheduler.clone();
        let _p1 = scheduler.acquire_permit().await.unwrap();
        let _p2 = other.acquire_permit().await.unwrap();

        let mut pending = tokio_test::task::spawn(scheduler.acquire_permit());
        tokio_test::assert_pending!(pending.poll());
    }
}
