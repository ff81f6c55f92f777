//! # Block Kinds
//!
//! Each directive owns its own syntax. The classifier asks these types
//! whether a line belongs to them; it never matches `##` or `@youtube(`
//! itself.

pub mod heading;
pub mod image;
pub mod list_item;
pub mod snippet;
pub mod video;

pub use heading::{Heading, HeadingLine};
pub use image::Image;
pub use list_item::ListItem;
pub use snippet::Snippet;
pub use video::Video;
