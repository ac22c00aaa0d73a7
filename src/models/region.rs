//! Administrative regions reported in the sentinel exports
//!
//! The exports cover the 47 prefectures plus a national total row. The total
//! row is labelled differently between tables, so it is matched by a list of
//! aggregate labels rather than by name.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::utils::strip_whitespace;

/// Label used for the national aggregate in every output record
pub const NATIONAL_LABEL: &str = "全国";

/// The fixed set of named regions, in the order the exports list them
pub const PREFECTURES: [&str; 47] = [
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// A region an observation or series belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    /// The synthetic national total
    National,
    /// A region identified by its label
    Named(String),
}

impl Region {
    /// Resolve a table label against the closed region set.
    ///
    /// Returns `None` for labels that are neither an aggregate label nor one
    /// of the 47 prefectures. The label is trimmed before the prefecture check;
    /// the aggregate check ignores all whitespace.
    #[must_use]
    pub fn resolve(label: &str, aggregate_labels: &[String]) -> Option<Self> {
        let trimmed = label.trim();
        if PREFECTURES.contains(&trimmed) {
            return Some(Self::Named(trimmed.to_string()));
        }
        if is_aggregate(trimmed, aggregate_labels) {
            return Some(Self::National);
        }
        None
    }

    /// Map a label to a region without checking it against the closed set.
    ///
    /// Used for history sections, which keep whatever labels the table carries.
    #[must_use]
    pub fn from_label(label: &str, aggregate_labels: &[String]) -> Self {
        let trimmed = label.trim();
        if is_aggregate(trimmed, aggregate_labels) {
            Self::National
        } else {
            Self::Named(trimmed.to_string())
        }
    }

    /// Display label of this region
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::National => NATIONAL_LABEL,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub const fn is_national(&self) -> bool {
        matches!(self, Self::National)
    }
}

fn is_aggregate(label: &str, aggregate_labels: &[String]) -> bool {
    let compact = strip_whitespace(label);
    aggregate_labels.iter().any(|a| *a == compact)
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
