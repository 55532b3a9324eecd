//! Rendering of notification records into email bodies.
//!
//! [`render`] is a pure function of its input: the only timestamp it shows
//! is `NotificationRecord::completed_at`, so rendering the same record twice
//! gives byte-identical output.

pub mod html;
pub mod markup;
pub mod metadata;
pub mod render;
pub mod text;
pub mod theme;

pub use markup::{escape_html, text_to_html};
pub use metadata::{MetadataRow, metadata_rows};
pub use render::{RenderedEmail, render, subject_for};
pub use theme::{RoleStyle, Theme};
