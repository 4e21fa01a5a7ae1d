use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Team buckets of the club directory. Declaration order is the site's
/// display order, and the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Faculty")]
    Faculty,
    #[serde(rename = "Core Team")]
    CoreTeam,
    #[serde(rename = "Technical Team")]
    TechnicalTeam,
    #[serde(rename = "Website Team")]
    WebsiteTeam,
    #[serde(rename = "Executive Team")]
    ExecutiveTeam,
    #[serde(rename = "Events Team")]
    EventsTeam,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Faculty,
        Category::CoreTeam,
        Category::TechnicalTeam,
        Category::WebsiteTeam,
        Category::ExecutiveTeam,
        Category::EventsTeam,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Faculty => "Faculty",
            Category::CoreTeam => "Core Team",
            Category::TechnicalTeam => "Technical Team",
            Category::WebsiteTeam => "Website Team",
            Category::ExecutiveTeam => "Executive Team",
            Category::EventsTeam => "Events Team",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: {})",
                    s,
                    Category::ALL.map(Category::label).join(", ")
                )
            })
    }
}

/// One roster entry, rebuilt fresh on every load. Optional fields are
/// `None` whenever the export value failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub category: Category,
}

/// Members partitioned by team, every category key always present.
pub type CategorizedMembers = BTreeMap<Category, Vec<Member>>;
