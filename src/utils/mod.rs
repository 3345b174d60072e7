pub mod file;
pub mod url;

pub use file::read_urls_file;
pub use url::normalize_url_scheme;
