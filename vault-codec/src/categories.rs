/// Categories offered when creating a campaign, as `(value, label)`.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("mobile", "Mobile"),
    ("ai", "AI"),
    ("consumer", "Consumer"),
    ("defi", "DeFi"),
    ("depin", "DePin"),
    ("gaming", "Gaming"),
    ("infrastructure", "Infrastructure"),
    ("stablecoins", "Stablecoins"),
    ("rwas", "RWAs"),
    ("non-profit", "Non-Profit"),
    ("public-good", "Public Good"),
    ("open-source", "Open-Source"),
    ("other", "Other"),
];

/// Display label for a category, or the value itself if it is not listed.
pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |(_, label)| *label)
}

pub fn is_known_category(value: &str) -> bool {
    CATEGORIES.iter().any(|(v, _)| *v == value)
}
