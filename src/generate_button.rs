use std::sync::Arc;

use crate::clipboard::Clipboard;
use crate::domain::{ApiUrl, Dimensions, HtmlEscape, PhotoUrl};
use crate::page::{ElementId, Page};

pub type ClickListener = Box<dyn Fn(&mut dyn Page) + Send + Sync>;

/// The `generate` button with its click listeners.
///
/// Listeners run in registration order and each one runs on every click,
/// whatever the previous one did.
#[derive(Default)]
pub struct GenerateButton {
    listeners: Vec<ClickListener>,
}

impl GenerateButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(&mut dyn Page) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn click(&self, page: &mut dyn Page) {
        for listener in &self.listeners {
            listener(page);
        }
    }
}

/// Wires the page up: populate `api-url`, then copy it.
///
/// The copy listener is independent of the first one. After a rejected
/// input it still copies whatever `api-url` already held.
pub fn on_load(clipboard: Arc<dyn Clipboard>) -> GenerateButton {
    let mut button = GenerateButton::new();
    button.add_event_listener(populate_api_url);
    button.add_event_listener(move |page| {
        copy_api_url(page, clipboard.as_ref());
    });
    button
}

/// Validates the inputs and writes the escaped API URL into `api-url`.
///
/// A rejected input raises one alert and leaves `api-url` as it was.
#[tracing::instrument(name = "Populate API URL", skip_all, fields(picture_id = tracing::field::Empty))]
pub fn populate_api_url(page: &mut dyn Page) {
    let photo_url = match PhotoUrl::parse(page.value(ElementId::PhotoUrl)) {
        Ok(photo_url) => photo_url,
        Err(message) => return page.alert(&message),
    };
    tracing::Span::current().record("picture_id", photo_url.picture_id());

    let dimensions = match Dimensions::parse(
        page.value(ElementId::Width),
        page.value(ElementId::Height),
    ) {
        Ok(dimensions) => dimensions,
        Err(message) => return page.alert(&message),
    };

    let api_url = String::from(ApiUrl::generate(&photo_url, &dimensions)).html_escape();
    page.set_value(ElementId::ApiUrl, api_url);
}

pub fn copy_api_url(page: &mut dyn Page, clipboard: &dyn Clipboard) -> bool {
    clipboard.write_text(&page.value(ElementId::ApiUrl))
}
