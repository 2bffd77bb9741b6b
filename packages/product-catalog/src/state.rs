use crate::api::FetchError;

/// What a view knows about the data it asked for.
#[derive(Debug)]
pub enum LoadState<'a, T> {
    /// The request is still in flight.
    Pending,
    Failed(&'a FetchError),
    Ready(&'a T),
}

impl<'a, T> From<&'a Result<T, FetchError>> for LoadState<'a, T> {
    fn from(value: &'a Result<T, FetchError>) -> Self {
        match value {
            Err(err) => LoadState::Failed(err),
            Ok(data) => LoadState::Ready(data),
        }
    }
}

impl<'a, T> From<&'a Option<Result<T, FetchError>>> for LoadState<'a, T> {
    fn from(value: &'a Option<Result<T, FetchError>>) -> Self {
        match value {
            None => LoadState::Pending,
            Some(result) => LoadState::from(result),
        }
    }
}
