//! Keyword-driven auto-categorization of transaction descriptions.

use once_cell::sync::Lazy;

/// Fallback category when no keyword matches.
pub const OTHER_CATEGORY: &str = "Other";

/// Ordered category/keyword table. Declaration order is the tie-break: the
/// first category with a matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Food",
        &[
            "restaurant",
            "uber eats",
            "mcdonald",
            "grocery",
            "walmart",
            "pizza",
            "coffee",
            "starbucks",
            "food",
            "dining",
        ],
    ),
    (
        "Transport",
        &[
            "uber", "lyft", "gas", "parking", "transit", "metro", "train", "bus", "taxi", "fuel",
        ],
    ),
    (
        "Entertainment",
        &[
            "netflix", "hulu", "spotify", "game", "movie", "theater", "concert", "cinema",
            "youtube",
        ],
    ),
    (
        "Utilities",
        &["electric", "water", "gas bill", "internet", "phone", "utility", "bill"],
    ),
    (
        "Health",
        &[
            "doctor", "pharmacy", "gym", "health", "medical", "hospital", "clinic", "fitness",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon", "store", "mall", "shopping", "target", "costco", "retail", "purchase",
        ],
    ),
    ("Rent", &["rent", "mortgage", "landlord", "lease", "accommodation"]),
    (
        "Salary",
        &["salary", "paycheck", "bonus", "freelance", "income", "payment"],
    ),
];

/// Every category a description can be auto-tagged with, excluding the
/// `Other` fallback.
pub static CATEGORIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| CATEGORY_KEYWORDS.iter().map(|(name, _)| *name).collect());

/// Maps a free-text description to a category by case-insensitive substring
/// match against the keyword table. Pure and deterministic.
pub fn categorize(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS.iter().copied() {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return category;
        }
    }
    OTHER_CATEGORY
}

/// Display color for a category; unknown categories share the fallback gray.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "Food" => "#ef4444",
        "Transport" => "#f97316",
        "Entertainment" => "#8b5cf6",
        "Utilities" => "#3b82f6",
        "Health" => "#ec4899",
        "Shopping" => "#06b6d4",
        "Rent" => "#14b8a6",
        "Salary" => "#10b981",
        _ => "#6b7280",
    }
}
