use std::fmt;

/// Selects the concrete renderer variant for one detail row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Label,
    Dbh,
    StaticClick,
    Benefits,
}

impl RendererKind {
    /// Decode a definition token. Unknown or missing tokens fall back to
    /// `Label`, the default read variant.
    pub fn decode(token: Option<&str>) -> Self {
        match token {
            Some("label") | None => RendererKind::Label,
            Some("dbh") => RendererKind::Dbh,
            Some("click") => RendererKind::StaticClick,
            Some("benefits") => RendererKind::Benefits,
            Some(other) => {
                tracing::warn!(token = other, "unknown renderer type, falling back to label");
                RendererKind::Label
            }
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::Label => write!(f, "label"),
            RendererKind::Dbh => write!(f, "dbh"),
            RendererKind::StaticClick => write!(f, "click"),
            RendererKind::Benefits => write!(f, "benefits"),
        }
    }
}

/// Input-method hint for inline-edit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardCategory {
    #[default]
    Default,
    Numeric,
    Decimal,
    Email,
    Url,
    Phone,
}

impl KeyboardCategory {
    /// Decode a keyboard token. Unrecognized tokens map to the default
    /// category.
    pub fn decode(token: &str) -> Self {
        match token {
            "default" => KeyboardCategory::Default,
            "numeric" | "number_pad" => KeyboardCategory::Numeric,
            "decimal" | "decimal_pad" => KeyboardCategory::Decimal,
            "email" => KeyboardCategory::Email,
            "url" => KeyboardCategory::Url,
            "phone" | "phone_pad" => KeyboardCategory::Phone,
            other => {
                tracing::warn!(token = other, "unknown keyboard token, using default");
                KeyboardCategory::Default
            }
        }
    }

    /// Whether an inline edit field accepts `ch` under this category.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            KeyboardCategory::Numeric => ch.is_ascii_digit(),
            KeyboardCategory::Decimal => ch.is_ascii_digit() || ch == '.',
            KeyboardCategory::Phone => {
                ch.is_ascii_digit() || matches!(ch, '+' | '-' | ' ' | '(' | ')')
            }
            _ => true,
        }
    }
}

/// Declarative description of one detail row. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Key path to the primary value, e.g. `tree.dbh`.
    pub key: String,
    /// Key path to a secondary value shown beneath the primary one, e.g. the
    /// scientific name under a species common name.
    pub detail_key: Option<String>,
    /// Key path this field is subordinate to, e.g. a species-name field
    /// linked to the species id.
    pub owner_key: Option<String>,
    pub label: Option<String>,
    /// Display template; `{}` substitutes the value, `{:.N}` rounds numbers.
    pub format_str: Option<String>,
    pub keyboard: KeyboardCategory,
    pub editable: bool,
    pub kind: RendererKind,
}

impl RendererConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            detail_key: None,
            owner_key: None,
            label: None,
            format_str: None,
            keyboard: KeyboardCategory::Default,
            editable: false,
            kind: RendererKind::Label,
        }
    }

    pub fn with_kind(mut self, kind: RendererKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_detail_key(mut self, key: impl Into<String>) -> Self {
        self.detail_key = Some(key.into());
        self
    }

    pub fn with_owner_key(mut self, key: impl Into<String>) -> Self {
        self.owner_key = Some(key.into());
        self
    }

    pub fn with_format(mut self, template: impl Into<String>) -> Self {
        self.format_str = Some(template.into());
        self
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardCategory) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Label shown next to the value; falls back to the last key-path
    /// segment.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self
                .key
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .replace('_', " "),
        }
    }
}
