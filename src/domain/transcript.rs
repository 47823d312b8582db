/// One piece of decoded text: a finalized chunk result or the trailing final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFragment(String);

impl TranscriptFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Ordered fragments collected while decoding one audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    fragments: Vec<TranscriptFragment>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: TranscriptFragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[TranscriptFragment] {
        &self.fragments
    }

    /// Non-blank fragments in order, joined by single spaces and trimmed.
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| !f.is_blank())
            .map(TranscriptFragment::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}
