use std::collections::HashMap;

/// Element ids the generator page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Generate,
    PhotoUrl,
    Width,
    Height,
    ApiUrl,
}

impl ElementId {
    pub const FIELDS: [ElementId; 4] = [
        ElementId::PhotoUrl,
        ElementId::Width,
        ElementId::Height,
        ElementId::ApiUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Generate => "generate",
            ElementId::PhotoUrl => "photo-url",
            ElementId::Width => "width",
            ElementId::Height => "height",
            ElementId::ApiUrl => "api-url",
        }
    }
}

/// The host page, as seen from a click handler.
pub trait Page {
    /// Current value of a field; an untouched field reads as `""`.
    fn value(&self, id: ElementId) -> String;

    fn set_value(&mut self, id: ElementId, value: String);

    /// Shows `message` to the user. The calling listener is expected to
    /// return right after.
    fn alert(&mut self, message: &str);
}

/// A page held in memory, usually loaded from a submitted form.
#[derive(Debug, Default, Clone)]
pub struct FormPage {
    values: HashMap<ElementId, String>,
    alerts: Vec<String>,
}

impl FormPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: ElementId, value: impl Into<String>) -> Self {
        self.values.insert(id, value.into());
        self
    }

    /// Alerts raised so far, in the order they were shown.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Page for FormPage {
    fn value(&self, id: ElementId) -> String {
        self.values.get(&id).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, id: ElementId, value: String) {
        self.values.insert(id, value);
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(alert = message, "Alert raised");
        self.alerts.push(message.to_owned());
    }
}
