use actix_web::{HttpResponse, http::header::ContentType, web};
use serde::Deserialize;

use crate::generate_button::GenerateButton;
use crate::page::{ElementId, FormPage};
use crate::routes::render_page;

/// Field values submitted with a click, keyed by element id.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageForm {
    #[serde(rename = "photo-url")]
    photo_url: String,
    width: String,
    height: String,
    #[serde(rename = "api-url")]
    api_url: String,
}

impl From<PageForm> for FormPage {
    fn from(form: PageForm) -> Self {
        FormPage::new()
            .with_value(ElementId::PhotoUrl, form.photo_url)
            .with_value(ElementId::Width, form.width)
            .with_value(ElementId::Height, form.height)
            .with_value(ElementId::ApiUrl, form.api_url)
    }
}

pub async fn show_page() -> HttpResponse {
    html(&FormPage::new())
}

#[tracing::instrument(name = "Click generate", skip_all)]
pub async fn click_generate(
    form: web::Form<PageForm>,
    button: web::Data<GenerateButton>,
) -> HttpResponse {
    let mut page = FormPage::from(form.into_inner());
    button.click(&mut page);
    html(&page)
}

fn html(page: &FormPage) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(page))
}
