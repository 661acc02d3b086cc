use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult};

/// Product category, identified in the menu by a numeric code 1-4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LaminateFlooring,
    Windows,
    Doors,
    Lumber,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::LaminateFlooring,
        Category::Windows,
        Category::Doors,
        Category::Lumber,
    ];

    /// Resolve a menu code. Anything outside 1-4 is a validation failure.
    pub fn from_code(code: i32) -> DomainResult<Self> {
        match code {
            1 => Ok(Category::LaminateFlooring),
            2 => Ok(Category::Windows),
            3 => Ok(Category::Doors),
            4 => Ok(Category::Lumber),
            _ => Err(DomainError::validation(
                "category",
                "this category doesn't exist, choose a number between 1 and 4",
            )),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Category::LaminateFlooring => 1,
            Category::Windows => 2,
            Category::Doors => 3,
            Category::Lumber => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::LaminateFlooring => "Laminate flooring",
            Category::Windows => "Windows",
            Category::Doors => "Doors",
            Category::Lumber => "Lumber",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Category {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
