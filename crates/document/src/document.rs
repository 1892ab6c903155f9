use crate::page::Page;
use folio_types::{Info, Version, ViewerPreferences};

/// A complete document. Built once, then handed over for lowering and writing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
    pub info: Option<Info>,
    pub version: Version,
    pub viewer: ViewerPreferences,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            info: None,
            version: Version::default(),
            viewer: ViewerPreferences::default(),
        }
    }

    pub fn single(page: Page) -> Self {
        Self::new(vec![page])
    }

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_viewer(mut self, viewer: ViewerPreferences) -> Self {
        self.viewer = viewer;
        self
    }
}

/// Collects metadata before the pages are known.
///
/// `info` stays `None` unless at least one field was set.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    info: Info,
    version: Version,
    viewer: ViewerPreferences,
}

impl DocumentBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.info.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.info.author = Some(author.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.info.subject = Some(subject.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.info.keywords = Some(keywords.into());
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.info.creator = Some(creator.into());
        self
    }

    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.info.producer = Some(producer.into());
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn viewer(mut self, viewer: ViewerPreferences) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn build(self, pages: Vec<Page>) -> Document {
        Document {
            pages,
            info: self.info.non_empty(),
            version: self.version,
            viewer: self.viewer,
        }
    }
}
