//! Item classification and field extraction.
//!
//! The engine is synchronous and side-effect free. It receives one item at a
//! time through the [`Fragment`] trait and never mutates the parsed document.
//!
//! - [`fragment`]: navigation capabilities the rules rely on
//! - [`variant`]: which of the six layouts an item uses
//! - [`dates`]: the two date encodings found in links and image paths
//! - [`extract`]: one extraction rule per layout

pub mod dates;
pub mod extract;
pub mod fragment;
pub mod variant;

pub use extract::extract;
pub use fragment::Fragment;
pub use variant::classify;
