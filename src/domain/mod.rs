mod api_url;
mod dimensions;
mod escape;
mod photo_url;
mod types;

pub use api_url::*;
pub use dimensions::*;
pub use escape::*;
pub use photo_url::*;
pub use types::*;
