//! Supporting documents shown in the side panel.
//!
//! DESIGN
//! ======
//! The list is derived entirely from the latest answer and replaced
//! wholesale on every successful exchange; failed exchanges leave it as is.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

/// Presentation category for a retrieved document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentKind {
    Research,
    Guide,
    #[default]
    Article,
    Manual,
}

impl DocumentKind {
    /// Badge label shown on the document card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Research => "Pesquisa",
            Self::Guide => "Guia",
            Self::Article => "Artigo",
            Self::Manual => "Manual",
        }
    }

    /// CSS modifier used for the badge color.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Guide => "guide",
            Self::Article => "article",
            Self::Manual => "manual",
        }
    }
}

/// A supporting document extracted from an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub source: String,
    /// Relevance percentage in `0..=100`.
    pub relevance: u8,
    /// Year label; the service never reports a real date.
    pub date: Option<String>,
    pub kind: DocumentKind,
}

/// State for the document side panel.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub documents: Vec<Document>,
}

impl DocumentsState {
    /// Replace the whole list with the documents of the latest answer.
    pub fn replace(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
