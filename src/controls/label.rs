//! Read-only status rows and section headers

use crate::params::SharedParams;

/// Where a label gets its text
enum LabelSource {
    /// Stored parameter, optionally truncated
    Param {
        params: SharedParams,
        key: &'static str,
        max_chars: Option<usize>,
        prefix: String,
    },
    /// Value computed when the panel was built
    Fixed(String),
}

/// Read-only title/value row
pub struct ParamLabel {
    title: String,
    source: LabelSource,
    value: String,
}

impl ParamLabel {
    /// Row showing the stored value of `key`
    pub fn param(title: impl Into<String>, key: &'static str, params: SharedParams) -> Self {
        let mut label = Self {
            title: title.into(),
            source: LabelSource::Param {
                params,
                key,
                max_chars: None,
                prefix: String::new(),
            },
            value: String::new(),
        };
        label.render();
        label
    }

    /// Row with a fixed value
    pub fn fixed(title: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into().trim().to_string();
        Self {
            title: title.into(),
            source: LabelSource::Fixed(value.clone()),
            value,
        }
    }

    /// Show at most `max_chars` characters of the stored value
    #[must_use]
    pub fn truncated(mut self, max_chars: usize) -> Self {
        if let LabelSource::Param { max_chars: m, .. } = &mut self.source {
            *m = Some(max_chars);
        }
        self.render();
        self
    }

    /// Put `prefix` in front of the stored value
    #[must_use]
    pub fn prefixed(mut self, prefix: impl Into<String>) -> Self {
        if let LabelSource::Param { prefix: p, .. } = &mut self.source {
            *p = prefix.into();
        }
        self.render();
        self
    }

    /// Row title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Displayed value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Re-read the value from the store
    pub fn render(&mut self) {
        if let LabelSource::Param {
            params,
            key,
            max_chars,
            prefix,
        } = &self.source
        {
            let stored = params.get(key);
            let shown: String = match max_chars {
                Some(n) => stored.chars().take(*n).collect(),
                None => stored,
            };
            self.value = format!("{prefix}{shown}").trim().to_string();
        }
    }
}

impl std::fmt::Debug for ParamLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamLabel")
            .field("title", &self.title)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Section caption inside a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Caption text
    pub title: String,
    /// Optional note shown next to the caption
    pub note: String,
}

impl Header {
    /// Caption without a note
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: String::new(),
        }
    }

    /// Caption with a note
    pub fn with_note(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
        }
    }
}
