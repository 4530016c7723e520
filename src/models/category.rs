use serde::Serialize;
use std::fmt;

/// Bucket an entry falls into after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Calendar,
    Ops,
    Sprint,
    Extra,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Calendar,
        Category::Ops,
        Category::Sprint,
        Category::Extra,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Calendar => "calendar",
            Category::Ops => "ops",
            Category::Sprint => "sprint",
            Category::Extra => "extra",
            Category::Unknown => "unknown",
        }
    }

    /// Parse a category name as typed on the command line (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    /// Fixed legend/stroke colour of the category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Calendar => "#1f78b4",
            Category::Ops => "#e31a1c",
            Category::Sprint => "#33a02c",
            Category::Extra => "#ff7f00",
            Category::Unknown => "#7f7f7f",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
