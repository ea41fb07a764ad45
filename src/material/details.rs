use serde::{Deserialize, Serialize};

use super::kind::{BookSubtype, JournalSubtype, MaterialType, NewspaperSubtype};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub pages: i32,
    pub author: String,
    pub subtype: BookSubtype,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalDetails {
    pub issue: i32,
    pub publisher: String,
    pub subtype: JournalSubtype,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewspaperDetails {
    pub editor: String,
    pub subtype: NewspaperSubtype,
}

/// Kind-specific payload of a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialDetails {
    Book(BookDetails),
    Journal(JournalDetails),
    Newspaper(NewspaperDetails),
}

impl MaterialDetails {
    /// The material kind this payload belongs to.
    pub fn kind(&self) -> MaterialType {
        match self {
            MaterialDetails::Book(_) => MaterialType::Book,
            MaterialDetails::Journal(_) => MaterialType::Journal,
            MaterialDetails::Newspaper(_) => MaterialType::Newspaper,
        }
    }

    /// The author, publisher or editor, depending on the variant.
    pub fn creator(&self) -> &str {
        match self {
            MaterialDetails::Book(book) => &book.author,
            MaterialDetails::Journal(journal) => &journal.publisher,
            MaterialDetails::Newspaper(newspaper) => &newspaper.editor,
        }
    }

    /// Field name of [`creator`](Self::creator), used in error messages.
    pub fn creator_field(&self) -> &'static str {
        match self {
            MaterialDetails::Book(_) => "author",
            MaterialDetails::Journal(_) => "publisher",
            MaterialDetails::Newspaper(_) => "editor",
        }
    }
}

impl From<BookDetails> for MaterialDetails {
    fn from(details: BookDetails) -> Self {
        MaterialDetails::Book(details)
    }
}

impl From<JournalDetails> for MaterialDetails {
    fn from(details: JournalDetails) -> Self {
        MaterialDetails::Journal(details)
    }
}

impl From<NewspaperDetails> for MaterialDetails {
    fn from(details: NewspaperDetails) -> Self {
        MaterialDetails::Newspaper(details)
    }
}
