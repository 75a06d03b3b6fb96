//! Three-state result wrapper
//!
//! `DataState` is what callers render: a read is `Loading` until it
//! resolves, then exactly one terminal `Success` or `Error`. Continuous
//! reads are modeled as restartable lazy streams of `DataState`; every
//! stream built here emits `Loading` first.

use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;
use futures::stream::{self, BoxStream, StreamExt};
use std::future::Future;
use std::time::Duration;

/// Stream of state updates for one observation. Dropping it unsubscribes.
pub type DataStateStream<T> = BoxStream<'static, DataState<T>>;

#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    Loading,
    Success(T),
    Error(WalletError),
}

impl<T> DataState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            DataState::Success(value) => Some(value),
            DataState::Loading | DataState::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&WalletError> {
        match self {
            DataState::Error(err) => Some(err),
            DataState::Loading | DataState::Success(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataState<U> {
        match self {
            DataState::Loading => DataState::Loading,
            DataState::Success(value) => DataState::Success(f(value)),
            DataState::Error(err) => DataState::Error(err),
        }
    }

    /// Terminal states become a `Result`; `Loading` has none yet.
    pub fn into_result(self) -> Option<WalletResult<T>> {
        match self {
            DataState::Loading => None,
            DataState::Success(value) => Some(Ok(value)),
            DataState::Error(err) => Some(Err(err)),
        }
    }
}

impl<T> From<WalletResult<T>> for DataState<T> {
    fn from(result: WalletResult<T>) -> Self {
        match result {
            Ok(value) => DataState::Success(value),
            Err(err) => DataState::Error(err),
        }
    }
}

/// `Loading`, then the outcome of a single fetch.
pub fn observe_once<T, F, Fut>(fetch: F) -> DataStateStream<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = WalletResult<T>> + Send + 'static,
{
    stream::once(async { DataState::Loading })
        .chain(stream::once(async move { DataState::from(fetch().await) }))
        .boxed()
}

/// `Loading`, then a terminal state per fetch. With a refresh period the
/// fetch repeats on that period until the stream is dropped; without one
/// this is `observe_once`.
pub fn observe<T, F, Fut>(refresh: Option<Duration>, fetch: F) -> DataStateStream<T>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = WalletResult<T>> + Send + 'static,
{
    let Some(period) = refresh else {
        return observe_once(move || fetch());
    };

    let updates = stream::unfold((fetch, true), move |(fetch, first)| async move {
        if !first {
            tokio::time::sleep(period).await;
        }
        let state = DataState::from(fetch().await);
        Some((state, (fetch, false)))
    });

    stream::once(async { DataState::Loading })
        .chain(updates)
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_state_helpers() {
        let loading: DataState<u8> = DataState::Loading;
        let success = DataState::Success(3u8);
        let error: DataState<u8> = DataState::Error(WalletError::network("down"));

        assert!(loading.is_loading());
        assert!(success.is_terminal());
        assert_eq!(success.success(), Some(&3));
        assert!(error.error().is_some());
        assert_eq!(loading.into_result(), None);
        assert_eq!(success.map(|v| v * 2), DataState::Success(6));
    }

    #[test]
    fn test_first_emission_is_loading_without_polling_fetch() {
        let mut stream = observe_once(|| async { Ok::<_, WalletError>(1u8) });
        let first = tokio_test::block_on(stream.next());
        assert_eq!(first, Some(DataState::Loading));
    }

    #[test]
    fn test_from_result() {
        let ok: DataState<&str> = Ok("token").into();
        let err: DataState<&str> = Err(WalletError::NoClientsFound).into();

        assert_eq!(ok, DataState::Success("token"));
        assert_eq!(err, DataState::Error(WalletError::NoClientsFound));
    }

    #[tokio::test]
    async fn test_observe_once_emits_loading_then_terminal() {
        let states: Vec<DataState<u32>> = observe_once(|| async { Ok(7) }).collect().await;
        assert_eq!(states, vec![DataState::Loading, DataState::Success(7)]);

        let states: Vec<DataState<u32>> =
            observe_once(|| async { Err(WalletError::api(500, "boom")) }).collect().await;
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        assert!(states[1].error().is_some());
    }

    #[tokio::test]
    async fn test_observe_without_refresh_terminates() {
        let states: Vec<DataState<u32>> = observe(None, || async { Ok(1) }).collect().await;
        assert_eq!(states, vec![DataState::Loading, DataState::Success(1)]);
    }

    #[tokio::test]
    async fn test_observe_with_refresh_refetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let stream = observe(Some(Duration::from_millis(5)), move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst)) }
        });

        let states: Vec<DataState<usize>> = stream.take(4).collect().await;
        assert_eq!(
            states,
            vec![
                DataState::Loading,
                DataState::Success(0),
                DataState::Success(1),
                DataState::Success(2),
            ]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stream_is_restartable() {
        let make = || observe_once(|| async { Ok("fresh") });
        let first: Vec<_> = make().collect().await;
        let second: Vec<_> = make().collect().await;
        assert_eq!(first, second);
    }
}
