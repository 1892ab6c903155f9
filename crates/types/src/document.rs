use serde::{Deserialize, Serialize};

/// Document information dictionary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
}

impl Info {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
    }

    /// `None` when no field is set.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

/// How a viewer should present the document window when the file is opened.
///
/// Only flags that are set are written to the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerPreferences {
    pub hide_toolbar: bool,
    pub hide_menubar: bool,
    #[serde(rename = "hideWindowUI")]
    pub hide_window_ui: bool,
    pub fit_window: bool,
    pub center_window: bool,
    /// Show the `/Title` entry in the window title bar instead of the file name.
    pub display_doc_title: bool,
}

impl ViewerPreferences {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// `(PDF key, value)` for every flag.
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("HideToolbar", self.hide_toolbar),
            ("HideMenubar", self.hide_menubar),
            ("HideWindowUI", self.hide_window_ui),
            ("FitWindow", self.fit_window),
            ("CenterWindow", self.center_window),
            ("DisplayDocTitle", self.display_doc_title),
        ]
    }
}

/// PDF file format version written in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Version {
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    V1_5,
    #[serde(rename = "1.6")]
    V1_6,
    #[default]
    #[serde(rename = "1.7")]
    V1_7,
    #[serde(rename = "2.0")]
    V2_0,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::V1_4 => "1.4",
            Version::V1_5 => "1.5",
            Version::V1_6 => "1.6",
            Version::V1_7 => "1.7",
            Version::V2_0 => "2.0",
        }
    }
}
