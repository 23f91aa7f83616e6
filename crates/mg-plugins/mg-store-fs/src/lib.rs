//! # mg-store-fs
//!
//! Local filesystem implementation of the gallery ports. Browsing walks the
//! store root directly on every request; favoriting copies files into the
//! flat `favorites` collection, and deleting moves them into a quarantine
//! directory outside the store.

mod curation;
mod gallery;
mod resolve;

pub use curation::LocalCurationStore;
pub use gallery::LocalGalleryStore;
pub use resolve::{resolve, Expect};
