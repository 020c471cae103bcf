pub mod config;
pub mod error;
pub mod mpd;

pub use error::{ManifestError, Result};
pub use mpd::builder::{build, MpdBuilder};
pub use mpd::writer::{emit, render, XML_HEADER};
pub use mpd::Mpd;
