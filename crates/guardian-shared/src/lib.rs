//! # Guardian Shared
//!
//! Types shared with the rendering layer. Everything here is a pure mapping
//! from domain data to the values a renderer binds - no storage access, no
//! markup generation. The rendering layer owns the translation of these view
//! models (and the core's error variants) into user-visible output.

pub mod mailto;
pub mod phone;
pub mod search;
pub mod view;

pub use view::{ArticleCardView, FeaturedStoryView, FeedPostView};
