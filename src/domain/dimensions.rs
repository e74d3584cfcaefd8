pub const MISSING_DIMENSION_MESSAGE: &str = "幅・高さは両方とも入力してください。";
pub const NON_NUMERIC_DIMENSION_MESSAGE: &str =
    "幅・高さ のどちらか、または両方が不正です。数字で入力してください。";

/// Requested size of the generated image.
///
/// Width and height are kept as typed, never parsed into integers, so `007`
/// stays `007` in the generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimensions {
    Original,
    Resized { width: String, height: String },
}

impl Dimensions {
    pub fn parse(width: String, height: String) -> Result<Self, String> {
        match (width.is_empty(), height.is_empty()) {
            (true, true) => return Ok(Self::Original),
            (true, false) | (false, true) => return Err(MISSING_DIMENSION_MESSAGE.to_string()),
            (false, false) => {}
        }

        if !is_numeric(&width) || !is_numeric(&height) {
            return Err(NON_NUMERIC_DIMENSION_MESSAGE.to_string());
        }

        Ok(Self::Resized { width, height })
    }

    pub fn width(&self) -> &str {
        match self {
            Self::Original => "",
            Self::Resized { width, .. } => width,
        }
    }

    pub fn height(&self) -> &str {
        match self {
            Self::Original => "",
            Self::Resized { height, .. } => height,
        }
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
