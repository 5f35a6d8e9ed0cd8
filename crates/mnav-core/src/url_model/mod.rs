//! URL modeling: turn free-form address-bar text into an absolute URL.
//!
//! Validation here is purely syntactic. Nothing is resolved or contacted;
//! whether the host exists is the fetcher's problem.

mod normalize;

pub use normalize::{normalize, NormalizeError, DEFAULT_SCHEME_PREFIX, SCHEME_SEPARATOR};
