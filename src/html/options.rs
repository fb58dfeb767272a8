//! Options for HTML rendering

/// HTML doctype variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Doctype {
    /// `<!DOCTYPE html>`
    #[default]
    Html5,
    Html4Strict,
    Html4Transitional,
    Html4Frameset,
    Xhtml1Strict,
    Xhtml1Transitional,
}

impl Doctype {
    /// Parse a doctype token such as `5`, `strict` or `xhtml`
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "5" | "html5" | "html" => Some(Doctype::Html5),
            "4" | "strict" | "html4" => Some(Doctype::Html4Strict),
            "transitional" => Some(Doctype::Html4Transitional),
            "frameset" => Some(Doctype::Html4Frameset),
            "xhtml" | "xhtml-strict" => Some(Doctype::Xhtml1Strict),
            "xhtml-transitional" => Some(Doctype::Xhtml1Transitional),
            _ => None,
        }
    }

    /// The `<!DOCTYPE ...>` declaration
    pub fn declaration(self) -> &'static str {
        match self {
            Doctype::Html5 => "<!DOCTYPE html>",
            Doctype::Html4Strict => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#
            }
            Doctype::Html4Transitional => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#
            }
            Doctype::Html4Frameset => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#
            }
            Doctype::Xhtml1Strict => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
            }
            Doctype::Xhtml1Transitional => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#
            }
        }
    }

    /// XHTML doctypes need the XHTML namespace on `<html>`
    pub fn is_xhtml(self) -> bool {
        matches!(self, Doctype::Xhtml1Strict | Doctype::Xhtml1Transitional)
    }
}

/// Settings for [`Document::to_html`](crate::Document::to_html)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Doctype declaration (default HTML5)
    pub doctype: Doctype,
    /// Content of `<title>` (default empty)
    pub title: String,
}

impl HtmlOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the doctype
    pub fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build options from loose key/value pairs
    ///
    /// Recognizes `doctype` and `title`. Anything else, including an unknown
    /// doctype token, is ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "doctype" => match Doctype::from_token(value) {
                    Some(doctype) => options.doctype = doctype,
                    None => log::warn!("ignoring unknown doctype {:?}", value),
                },
                "title" => options.title = value.to_string(),
                other => log::debug!("ignoring unrecognized html option {:?}", other),
            }
        }

        options
    }
}
