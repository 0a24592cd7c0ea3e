//! The fixed catalog of variant categories.

use crate::error::VariantError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a textual variant, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Critical,
    Significant,
    Jesus,
    God,
    Spirit,
    Family,
    Miracles,
    Ethics,
    Names,
    Church,
    Resurrection,
    Prophecy,
    Sin,
    Ministry,
    Eschatology,
    Minor,
    John,
    Acts,
}

impl Category {
    /// Every category in catalog order.
    pub const ALL: [Category; 18] = [
        Category::Critical,
        Category::Significant,
        Category::Jesus,
        Category::God,
        Category::Spirit,
        Category::Family,
        Category::Miracles,
        Category::Ethics,
        Category::Names,
        Category::Church,
        Category::Resurrection,
        Category::Prophecy,
        Category::Sin,
        Category::Ministry,
        Category::Eschatology,
        Category::Minor,
        Category::John,
        Category::Acts,
    ];

    /// Key used in the dataset and in element ids.
    pub fn key(self) -> &'static str {
        match self {
            Category::Critical => "critical",
            Category::Significant => "significant",
            Category::Jesus => "jesus",
            Category::God => "god",
            Category::Spirit => "spirit",
            Category::Family => "family",
            Category::Miracles => "miracles",
            Category::Ethics => "ethics",
            Category::Names => "names",
            Category::Church => "church",
            Category::Resurrection => "resurrection",
            Category::Prophecy => "prophecy",
            Category::Sin => "sin",
            Category::Ministry => "ministry",
            Category::Eschatology => "eschatology",
            Category::Minor => "minor",
            Category::John => "john",
            Category::Acts => "acts",
        }
    }

    /// Full Swedish heading, e.g. `Kategori 5: Den Helige Ande`.
    pub fn title(self) -> &'static str {
        match self {
            Category::Critical => "Kategori 1: Kritiska doktrinära varianter",
            Category::Significant => "Kategori 2: Betydande teologiska varianter",
            Category::Jesus => "Kategori 3: Referenser till Jesus namn och titlar",
            Category::God => "Kategori 4: Guds namn och attribut",
            Category::Spirit => "Kategori 5: Den Helige Ande",
            Category::Family => "Kategori 6: Jungfrufödelsen och familj",
            Category::Miracles => "Kategori 7: Undergörelser",
            Category::Ethics => "Kategori 8: Etik och kristet liv",
            Category::Names => "Kategori 9: Geografiska och personnamn",
            Category::Church => "Kategori 10: Församlingsordning och sakrament",
            Category::Resurrection => "Kategori 11: Uppståndelsen och efteråt",
            Category::Prophecy => "Kategori 12: Profetior och uppfyllelser",
            Category::Sin => "Kategori 13: Doktrin om synd och helgelse",
            Category::Ministry => "Kategori 14: Kristen kallelse och tjänst",
            Category::Eschatology => "Kategori 15: Himmelska scener och eskatologi",
            Category::Minor => "Kategori 16: Mindre varianter med viss teologisk betydelse",
            Category::John => "Kategori 17: Johannesevangeliet specifika varianter",
            Category::Acts => "Kategori 18: Apostlagärningar",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Critical => "🔴",
            Category::Significant => "🟠",
            Category::Jesus => "✝️",
            Category::God => "👑",
            Category::Spirit => "🕊️",
            Category::Family => "👶",
            Category::Miracles => "⚡",
            Category::Ethics => "📖",
            Category::Names => "🗺️",
            Category::Church => "⛪",
            Category::Resurrection => "💫",
            Category::Prophecy => "🔮",
            Category::Sin => "🚫",
            Category::Ministry => "👥",
            Category::Eschatology => "🌅",
            Category::Minor => "📋",
            Category::John => "📜",
            Category::Acts => "🏛️",
        }
    }

    /// Heading without the `Kategori N: ` prefix.
    pub fn short_title(self) -> &'static str {
        let title = self.title();
        title.split_once(": ").map_or(title, |(_, rest)| rest)
    }

    /// 1-based position in the catalog.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Look up a category by key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| VariantError::UnknownCategory(s.to_string()))
    }
}
