#[cfg(feature = "google")]
pub mod google;
