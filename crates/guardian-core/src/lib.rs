//! # Guardian Core
//!
//! The domain layer of the Cyber Guardian site core.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the community feed store and moderator, the content policy, and the
//! news-desk refresh model. Storage, time, and randomness come in through
//! the ports in [`ports`].

pub mod domain;
pub mod error;
pub mod feed;
pub mod moderation;
pub mod news;
pub mod ports;
pub mod timefmt;

pub use error::{DeleteError, ValidationError};
pub use feed::CommunityFeed;
