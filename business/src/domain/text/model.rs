/// Text produced by the upstream completion model for a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
}

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
