mod api_url;
mod page;
mod routes;
mod template;

pub use api_url::*;
pub use page::*;
pub use routes::*;
pub use template::*;
