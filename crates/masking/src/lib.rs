#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(doc)))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Personal Identifiable Information protection. Wrapper types and traits for secret management
//! which help ensure they aren't accidentally copied, logged, or otherwise exposed.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub use zeroize::{self, DefaultIsZeroes, Zeroize as ZeroizableSecret};

mod strategy;

pub use strategy::{Strategy, WithType};
mod abs;
pub use abs::{ExposeInterface, PeekInterface};

mod secret;
mod sensitive;
mod strong_secret;
pub use secret::Secret;
pub use sensitive::SensitiveValue;
pub use strong_secret::StrongSecret;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::SerializableSecret;
