use std::borrow::Cow;

/// Escapes ``& ' ` " < >`` for display inside an HTML document.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML escaping for anything that may end up in a form field.
///
/// Text is escaped, every other value comes back unchanged.
pub trait HtmlEscape {
    type Output;

    fn html_escape(self) -> Self::Output;
}

impl HtmlEscape for &str {
    type Output = String;

    fn html_escape(self) -> String {
        escape_html(self)
    }
}

impl HtmlEscape for String {
    type Output = String;

    fn html_escape(self) -> String {
        escape_html(&self)
    }
}

impl HtmlEscape for Cow<'_, str> {
    type Output = String;

    fn html_escape(self) -> String {
        escape_html(&self)
    }
}

macro_rules! passthrough {
    ($($t:ty),* $(,)?) => {
        $(
            impl HtmlEscape for $t {
                type Output = $t;

                fn html_escape(self) -> $t {
                    self
                }
            }
        )*
    };
}

passthrough!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);
