//! Recognized asset extensions and their MIME types.

/// Extensions this service recognizes, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Js,
    Json,
    Css,
}

impl Extension {
    /// All recognized extensions. Detection checks them in this order,
    /// first suffix match wins.
    pub const ALL: [Extension; 3] = [Extension::Js, Extension::Json, Extension::Css];

    /// Detect the extension of a request path by suffix match.
    /// Returns `None` for anything outside the recognized set.
    pub fn detect(path: &str) -> Option<Extension> {
        Self::ALL.into_iter().find(|ext| path.ends_with(ext.suffix()))
    }

    /// The literal suffix including the leading dot.
    pub fn suffix(&self) -> &'static str {
        match self {
            Extension::Js => ".js",
            Extension::Json => ".json",
            Extension::Css => ".css",
        }
    }

    /// MIME type served for this extension.
    pub fn mime(&self) -> &'static str {
        match self {
            Extension::Js => "text/javascript",
            Extension::Json => "application/json",
            Extension::Css => "text/css",
        }
    }

    /// Short label used in logs and metric labels.
    pub fn label(&self) -> &'static str {
        match self {
            Extension::Js => "js",
            Extension::Json => "json",
            Extension::Css => "css",
        }
    }
}
