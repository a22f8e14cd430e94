//! Storage seam for translation records.
//!
//! Concrete backends live in the `lingualog` crate and implement
//! [`TranslationRepository`].

mod error;
mod traits;

pub use error::{Result, StorageError};
pub use traits::TranslationRepository;
