//! The closed set of component categories.
//!
//! Every category maps to one table in the backing store and one field list
//! in the schema registry. Keeping this a compile-time enum (rather than a
//! string tag) makes a category/schema mismatch unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A component category — one of the 8 fixed kinds of PC hardware tracked
/// by the inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cpus,
    GraphicsCards,
    Motherboards,
    Ram,
    Storage,
    PowerSupplies,
    Cooling,
    Cases,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 8] = [
        Category::Cpus,
        Category::GraphicsCards,
        Category::Motherboards,
        Category::Ram,
        Category::Storage,
        Category::PowerSupplies,
        Category::Cooling,
        Category::Cases,
    ];

    /// The snake_case table tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpus => "cpus",
            Category::GraphicsCards => "graphics_cards",
            Category::Motherboards => "motherboards",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::PowerSupplies => "power_supplies",
            Category::Cooling => "cooling",
            Category::Cases => "cases",
        }
    }

    /// The human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpus => "CPUs",
            Category::GraphicsCards => "Graphics Cards",
            Category::Motherboards => "Motherboards",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::PowerSupplies => "Power Supplies",
            Category::Cooling => "Cooling",
            Category::Cases => "Cases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
