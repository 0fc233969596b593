pub mod encoding;
pub mod logger;

pub use encoding::{Encoding, STANDARD, URL_SAFE};
