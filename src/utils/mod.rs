pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{directory_url, file_href, file_url_path, parse_base_url, strip_scheme};
