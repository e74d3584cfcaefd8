use std::fmt::{self, Display, Formatter};

/// Page URL prefix every photo URL has to start with.
pub const PHOTO_URL_PREFIX: &str = "https://unsplash.com/photos/";

pub const EMPTY_URL_MESSAGE: &str = "URL が空です。";
pub const INVALID_URL_MESSAGE: &str =
    "URL が不正です。正しい URL (`https://unsplash.com/photos/XXXXXXXXXXX`) を入力してください。";
pub const INVALID_PICTURE_ID_MESSAGE: &str =
    "画像IDが不正です。また、末尾はスラッシュで終わらないようにしてください。";

/// A photo page URL, e.g. `https://unsplash.com/photos/abc123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUrl(String);

impl PhotoUrl {
    /// Returns an instance of `PhotoUrl` if all conditions are met.
    ///
    /// The error is the message shown to the user as-is.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.is_empty() {
            return Err(EMPTY_URL_MESSAGE.to_string());
        }

        let Some(picture_id) = s.strip_prefix(PHOTO_URL_PREFIX) else {
            return Err(INVALID_URL_MESSAGE.to_string());
        };

        if picture_id.is_empty() || picture_id.ends_with('/') || !is_picture_id(picture_id) {
            return Err(INVALID_PICTURE_ID_MESSAGE.to_string());
        }

        Ok(Self(s))
    }

    /// The path segment after the page prefix.
    pub fn picture_id(&self) -> &str {
        &self.0[PHOTO_URL_PREFIX.len()..]
    }
}

// Word characters are ASCII only, same as a non-unicode `\w`.
fn is_picture_id(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl AsRef<str> for PhotoUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PhotoUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
