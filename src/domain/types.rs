use serde::{Deserialize, Serialize};

use crate::domain::{ApiUrl, Dimensions, HtmlEscape, PhotoUrl};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub photo_url: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub api_url: String,
}

// Same order as the generate button: URL first, then dimensions.
impl TryFrom<GenerateRequest> for ApiUrl {
    type Error = String;

    fn try_from(payload: GenerateRequest) -> Result<Self, Self::Error> {
        let photo_url = PhotoUrl::parse(payload.photo_url)?;
        let dimensions = Dimensions::parse(payload.width, payload.height)?;

        Ok(ApiUrl::generate(&photo_url, &dimensions))
    }
}

impl From<ApiUrl> for GenerateResponse {
    fn from(api_url: ApiUrl) -> Self {
        Self {
            api_url: String::from(api_url).html_escape(),
        }
    }
}
