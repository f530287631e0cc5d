//! Topic slugs for category pages
//!
//! A topic slug is the lowercased category label with its first space
//! replaced by `-` (`"Data Science"` becomes `"data-science"`). Only the
//! first occurrence is swapped in either direction, so labels with more
//! than one space keep their remaining spaces.

/// Slug for a category label
pub fn topic_slug(category: &str) -> String {
    category.to_lowercase().replacen(' ', "-", 1)
}

/// Topic name recovered from a slug
pub fn topic_name(slug: &str) -> String {
    slug.replacen('-', " ", 1)
}

/// Whether `category` belongs to the topic named by `slug`
///
/// Comparison is case-insensitive.
pub fn matches_topic(category: &str, slug: &str) -> bool {
    category.to_lowercase() == topic_name(slug).to_lowercase()
}
