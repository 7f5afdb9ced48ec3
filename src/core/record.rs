use indexmap::IndexMap;

/// One locale's translations, keyed by translation key in import order.
pub type TranslationMap = IndexMap<String, TranslationRecord>;

/// Translated text for one key in one locale, plus optional display hints.
///
/// `style` is positional: `[0]` material, `[1]` gradient preset, `[2]` size.
/// The values are passed through untouched; interpreting them is up to the
/// renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRecord {
    pub text: String,
    pub font: Option<String>,
    pub style: Vec<String>,
}

impl TranslationRecord {
    pub const MATERIAL_INDEX: usize = 0;
    pub const GRADIENT_INDEX: usize = 1;
    pub const SIZE_INDEX: usize = 2;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            style: Vec::new(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_style<I, S>(mut self, style: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style = style.into_iter().map(Into::into).collect();
        self
    }

    /// Style parameter at `index`, or `None` when absent or blank.
    pub fn style_parameter(&self, index: usize) -> Option<&str> {
        self.style
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn material(&self) -> Option<&str> {
        self.style_parameter(Self::MATERIAL_INDEX)
    }

    pub fn gradient(&self) -> Option<&str> {
        self.style_parameter(Self::GRADIENT_INDEX)
    }

    pub fn size(&self) -> Option<&str> {
        self.style_parameter(Self::SIZE_INDEX)
    }
}
