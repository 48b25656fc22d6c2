use std::fmt;

/// The closed set of link categories.
///
/// Variants are declared in lexicographic order of their identifier, which
/// is also the order combined listings iterate in. No category is ever
/// added or removed at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Apps,
    Games,
    Movies,
    Uncategorized,
    Videos,
    Websites,
}

impl Category {
    /// Every category, in lexicographic identifier order.
    pub const ALL: [Category; 6] = [
        Category::Apps,
        Category::Games,
        Category::Movies,
        Category::Uncategorized,
        Category::Videos,
        Category::Websites,
    ];

    /// Case-insensitive lookup of a category token.
    pub fn parse(token: &str) -> Option<Category> {
        match token.to_ascii_lowercase().as_str() {
            "apps" => Some(Category::Apps),
            "games" => Some(Category::Games),
            "movies" => Some(Category::Movies),
            "uncategorized" => Some(Category::Uncategorized),
            "videos" => Some(Category::Videos),
            "websites" => Some(Category::Websites),
            _ => None,
        }
    }

    /// Canonical lower-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Apps => "apps",
            Category::Games => "games",
            Category::Movies => "movies",
            Category::Uncategorized => "uncategorized",
            Category::Videos => "videos",
            Category::Websites => "websites",
        }
    }

    /// Whether a bare `/<category>` command lists this category.
    ///
    /// `uncategorized` accepts submissions but has no listing command.
    pub fn has_listing_command(self) -> bool {
        !matches!(self, Category::Uncategorized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
