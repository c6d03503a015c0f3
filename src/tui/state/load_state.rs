//! Independent load state for each fetched resource.

use crate::catalog::FetchError;

/// Outcome of one data operation.
///
/// Products, reviews, and the sales report each carry their own state, so a
/// failure in one never blocks the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch resolved.
    Ready(T),
    /// Fetch failed; no automatic retry.
    Failed(FetchError),
}

impl<T> LoadState<T> {
    /// Converts a fetch result into a load state.
    #[must_use]
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        result.map_or_else(Self::Failed, Self::Ready)
    }

    /// Returns the loaded value, if ready.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Returns true while the fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn ok_result_is_ready() {
        let state = LoadState::from_result(Ok(3));
        assert_eq!(state.ready(), Some(&3));
        assert!(!matches!(state, LoadState::Failed(_)));
        assert!(!state.is_loading());
    }

    #[rstest]
    fn err_result_is_failed() {
        let state: LoadState<u8> = LoadState::from_result(Err(FetchError::MissingProductNumber));
        assert_eq!(state, LoadState::Failed(FetchError::MissingProductNumber));
        assert!(state.ready().is_none());
    }

    #[rstest]
    fn default_is_loading() {
        assert!(LoadState::<u8>::default().is_loading());
    }
}
