//! Document categories and their directory mapping

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of JSON documents the back office manages.
///
/// Each category maps to one directory in the content repository; a document
/// lives at `<directory>/<id>.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Page,
    Layout,
    Theme,
    Navigation,
    ComponentSchema,
}

impl Category {
    /// All categories, in listing order.
    pub const ALL: [Category; 5] = [
        Category::Page,
        Category::Layout,
        Category::Theme,
        Category::Navigation,
        Category::ComponentSchema,
    ];

    /// Directory holding this category's documents.
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Layout => "layouts",
            Self::Theme => "themes",
            Self::Navigation => "navigation",
            Self::ComponentSchema => "components",
        }
    }

    /// Repository path for a document in this category.
    pub fn document_path(&self, id: &str) -> String {
        format!("{}/{}.json", self.directory(), id)
    }

    /// Stable identifier used in draft keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Layout => "layout",
            Self::Theme => "theme",
            Self::Navigation => "navigation",
            Self::ComponentSchema => "component-schema",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "layout" => Ok(Self::Layout),
            "theme" => Ok(Self::Theme),
            "navigation" => Ok(Self::Navigation),
            "component-schema" => Ok(Self::ComponentSchema),
            other => Err(Error::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }
}
