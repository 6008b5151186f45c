//! The fixed set of joke categories offered by the API.

use std::fmt;

/// A joke category.
///
/// The names double as URL path segments, case-preserved, so the variant
/// spelling here must match the API exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Bald,
    Fat,
    Hairy,
    Nasty,
    Old,
    Poor,
    Stupid,
    Short,
    Skinny,
    Tall,
    Ugly,
}

impl Category {
    /// All categories, in picker order.
    pub const ALL: [Category; 11] = [
        Category::Bald,
        Category::Fat,
        Category::Hairy,
        Category::Nasty,
        Category::Old,
        Category::Poor,
        Category::Stupid,
        Category::Short,
        Category::Skinny,
        Category::Tall,
        Category::Ugly,
    ];

    /// The category name as it appears in the URL path.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bald => "Bald",
            Category::Fat => "Fat",
            Category::Hairy => "Hairy",
            Category::Nasty => "Nasty",
            Category::Old => "Old",
            Category::Poor => "Poor",
            Category::Stupid => "Stupid",
            Category::Short => "Short",
            Category::Skinny => "Skinny",
            Category::Tall => "Tall",
            Category::Ugly => "Ugly",
        }
    }

    /// Look up a category by its position in [`Category::ALL`].
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
