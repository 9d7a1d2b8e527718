pub mod base64;
pub mod http;
pub mod logging;
pub mod string;
pub mod url;

// Re-export common utilities
pub use self::base64::{base64_decode, base64_encode};
pub use self::string::preview;
pub use self::url::{is_link, url_decode, url_encode};
