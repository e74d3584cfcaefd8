use crate::domain::escape_html;
use crate::page::{ElementId, FormPage, Page};

/// Renders the generator page with the current field values and alerts.
///
/// Alerts become open dialogs placed ahead of the form.
///
/// Values are escaped for the attribute they land in, on top of whatever
/// escaping the handlers already applied to them.
pub fn render_page(page: &FormPage) -> String {
    let field = |id: ElementId| escape_html(&page.value(id));
    let alerts: String = page
        .alerts()
        .iter()
        .map(|message| {
            format!(
                "<dialog open role=\"alertdialog\" class=\"alert\">\
                <form method=\"dialog\"><p>{}</p><button>OK</button></form>\
                </dialog>\n",
                escape_html(message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>Unsplash Source URL Generator</title>
</head>
<body>
{alerts}<form method="post" action="/">
<label for="{photo_url_id}">Photo URL</label>
<input type="text" id="{photo_url_id}" name="{photo_url_id}" value="{photo_url}" placeholder="https://unsplash.com/photos/XXXXXXXXXXX">
<label for="{width_id}">Width</label>
<input type="text" id="{width_id}" name="{width_id}" value="{width}">
<label for="{height_id}">Height</label>
<input type="text" id="{height_id}" name="{height_id}" value="{height}">
<button type="submit" id="{generate_id}">Generate &amp; Copy</button>
<label for="{api_url_id}">API URL</label>
<input type="text" id="{api_url_id}" name="{api_url_id}" value="{api_url}" readonly>
</form>
</body>
</html>
"#,
        photo_url_id = ElementId::PhotoUrl.as_str(),
        width_id = ElementId::Width.as_str(),
        height_id = ElementId::Height.as_str(),
        api_url_id = ElementId::ApiUrl.as_str(),
        generate_id = ElementId::Generate.as_str(),
        photo_url = field(ElementId::PhotoUrl),
        width = field(ElementId::Width),
        height = field(ElementId::Height),
        api_url = field(ElementId::ApiUrl),
    )
}
