//! Small error-inspection helpers.

use std::error::Error;

/// Walk an error's `source()` chain, starting with the error itself.
pub fn error_chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |e: &&'a (dyn Error + 'static)| (*e).source())
}

/// Check whether `err` is, or is caused by, an error of type `E`.
///
/// Useful when a failure arrives wrapped several layers deep (e.g. a
/// connect timeout inside a `reqwest` error inside an
/// [`ApiError`](crate::ApiError)).
pub fn is_caused_by<E: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    error_chain(err).any(|e| e.is::<E>())
}
