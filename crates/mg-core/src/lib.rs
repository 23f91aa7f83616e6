//! menagerie/crates/mg-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Menagerie.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(is_image_name("photo.jpg"));
        assert!(is_image_name("photo.JPG"));
        assert!(is_image_name("scan.WebP"));
        assert!(!is_image_name("notes.txt"));
        assert!(!is_image_name("archive.tar"));
        assert!(!is_image_name("no_extension"));
    }

    #[test]
    fn extension_is_taken_after_the_last_dot() {
        assert!(is_image_name("holiday.2024.png"));
        assert!(!is_image_name("jpg"));
    }
}
