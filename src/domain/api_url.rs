use std::fmt::{self, Display, Formatter};

use super::{Dimensions, PHOTO_URL_PREFIX, PhotoUrl};

/// Prefix of the image resizing endpoint.
pub const API_URL_PREFIX: &str = "https://source.unsplash.com/";

/// Builds the resizing endpoint URL from raw form values.
///
/// The input is expected to be validated already; nothing is re-checked here.
/// Width and height are appended as typed when at least one of them is set.
pub fn generate_api_url(url: &str, width: &str, height: &str) -> String {
    let picture_id = url.replacen(PHOTO_URL_PREFIX, "", 1);
    if width.is_empty() && height.is_empty() {
        return format!("{API_URL_PREFIX}{picture_id}");
    }
    format!("{API_URL_PREFIX}{picture_id}/{width}x{height}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    pub fn generate(photo_url: &PhotoUrl, dimensions: &Dimensions) -> Self {
        Self(generate_api_url(
            photo_url.as_ref(),
            dimensions.width(),
            dimensions.height(),
        ))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ApiUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ApiUrl> for String {
    fn from(url: ApiUrl) -> Self {
        url.0
    }
}
