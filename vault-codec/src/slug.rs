//! Slug generation and the banned-slug list.

use rand::Rng;

use crate::constants::MAX_SLUG_LEN;
use crate::error::ValidationError;

pub const RANDOM_SEGMENT_LEN: usize = 6;
const SEGMENT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Lowercases `value`, turns whitespace runs into `-` and drops everything
/// outside `[a-z0-9-]`.
pub fn sanitize_slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            out.push(c);
        }
    }
    out
}

pub fn random_segment<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_SEGMENT_LEN)
        .map(|_| SEGMENT_CHARSET[rng.gen_range(0..SEGMENT_CHARSET.len())] as char)
        .collect()
}

/// Builds `<sanitized-name>-<random>` for a new campaign, truncating the name
/// part so the whole slug fits the seed limit.
pub fn generate_slug<R: Rng + ?Sized>(
    name: &str,
    banned: &BannedSlugs,
    rng: &mut R,
) -> Result<String, ValidationError> {
    let base = sanitize_slug(name.trim());
    if base.is_empty() {
        return Err(ValidationError::EmptySlugBase);
    }
    if banned.matches_base(&base) {
        return Err(ValidationError::ReservedSlugBase);
    }

    let segment = random_segment(rng);
    let max_base_len = (MAX_SLUG_LEN - 1 - segment.len()).max(1);
    let base = &base[..base.len().min(max_base_len)];
    let candidate = format!("{base}-{segment}");

    if banned.matches(&candidate) {
        return Err(ValidationError::BannedSlug);
    }
    Ok(candidate)
}

/// Normalized list of slugs that may not be used or displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedSlugs {
    entries: Vec<String>,
}

impl BannedSlugs {
    /// Entries are trimmed and lowercased; blank ones are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| entry.as_ref().trim().to_lowercase())
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn contains(&self, slug: &str) -> bool {
        self.entries.iter().any(|entry| entry == slug)
    }

    /// Matches the slug itself or the slug with a trailing `-<digits>` removed.
    pub fn matches(&self, slug: &str) -> bool {
        if slug.is_empty() {
            return false;
        }
        let normalized = slug.to_lowercase();
        self.contains(&normalized) || self.contains(strip_numeric_suffix(&normalized))
    }

    pub fn matches_base(&self, base: &str) -> bool {
        !base.is_empty() && self.contains(&base.to_lowercase())
    }
}

fn strip_numeric_suffix(slug: &str) -> &str {
    match slug.rsplit_once('-') {
        Some((head, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => slug,
    }
}
