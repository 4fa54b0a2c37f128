//! Format-agnostic document model.
//!
//! A [`Book`] is a title plus an ordered list of HTML [`Section`]s, the
//! narrow contract the EPUB writer needs. The OCR pipeline produces books
//! with a single section; the model allows more.

/// A document ready for packaging.
#[derive(Debug, Clone, Default)]
pub struct Book {
    pub metadata: Metadata,
    pub sections: Vec<Section>,
}

/// Book metadata (Dublin Core subset)
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub language: String,
    /// Unique identifier. Left empty, the writer generates a `urn:uuid:`.
    pub identifier: String,
}

/// One titled chunk of HTML content, placed into the EPUB's table of
/// contents and reading order.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    /// HTML fragment for the section body (no surrounding document tags).
    pub body: String,
}

impl Book {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            sections: Vec::new(),
        }
    }

    /// Add a section to the end of the reading order.
    pub fn add_section(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.sections.push(Section {
            title: title.into(),
            body: body.into(),
        });
    }
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let meta = Metadata::new("Title")
            .with_author("Author")
            .with_language("en")
            .with_identifier("id-1");
        assert_eq!(meta.title, "Title");
        assert_eq!(meta.author, "Author");
        assert_eq!(meta.language, "en");
        assert_eq!(meta.identifier, "id-1");
    }

    #[test]
    fn sections_keep_order() {
        let mut book = Book::new(Metadata::new("T"));
        book.add_section("One", "<p>1</p>");
        book.add_section("Two", "<p>2</p>");
        assert_eq!(book.sections.len(), 2);
        assert_eq!(book.sections[0].title, "One");
        assert_eq!(book.sections[1].body, "<p>2</p>");
    }
}
