use thiserror::Error;

/// One wheel entry: display text plus an opaque value identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    pub value: String,
}

impl PickerOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Validation failures for an option list. The picker itself absorbs these
/// (see [`OptionList::new`]); `try_new` surfaces them for callers that want
/// hard validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("option list is empty")]
    Empty,
    #[error("duplicate option value `{0}`")]
    DuplicateValue(String),
}

/// Immutable, order-preserving index over the options of one picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<PickerOption>,
}

impl OptionList {
    /// Lenient constructor: duplicates are dropped (first occurrence wins)
    /// and an empty list is accepted, each with a development-time warning.
    /// A UI control must not take down its host over bad configuration.
    pub fn new(options: Vec<PickerOption>) -> Self {
        if options.is_empty() {
            log::warn!("wheel picker configured with an empty option list");
            return Self::default();
        }

        let mut deduped: Vec<PickerOption> = Vec::with_capacity(options.len());
        for option in options {
            if deduped.iter().any(|o| o.value == option.value) {
                log::warn!(
                    "wheel picker dropping duplicate option value `{}`",
                    option.value
                );
                continue;
            }
            deduped.push(option);
        }

        Self { options: deduped }
    }

    /// Strict constructor: rejects empty lists and duplicate values.
    pub fn try_new(options: Vec<PickerOption>) -> Result<Self, OptionsError> {
        if options.is_empty() {
            return Err(OptionsError::Empty);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.value == option.value) {
                return Err(OptionsError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(Self { options })
    }

    pub fn count(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn option_at(&self, index: usize) -> Option<&PickerOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickerOption> {
        self.options.iter()
    }

    /// Resolve a caller-supplied default to a starting index. Unknown or
    /// absent values fall back to index 0 so loosely validated defaults
    /// never hard-fail.
    pub fn resolve_default(&self, default_value: Option<&str>) -> usize {
        match default_value {
            Some(value) => match self.index_of(value) {
                Some(index) => index,
                None => {
                    log::warn!(
                        "wheel picker default value `{value}` matches no option, using index 0"
                    );
                    0
                }
            },
            None => 0,
        }
    }
}
