//! Pre-flight checks run before any instruction bytes are produced.

use std::collections::HashSet;

use solana_sdk::pubkey::Pubkey;

use crate::constants::*;
use crate::error::ValidationError;

pub fn validate_owners(owners: &[Pubkey]) -> Result<(), ValidationError> {
    if owners.is_empty() {
        return Err(ValidationError::NoOwners);
    }
    if owners.len() > MAX_OWNERS {
        return Err(ValidationError::TooManyOwners { max: MAX_OWNERS });
    }
    let unique: HashSet<&Pubkey> = owners.iter().collect();
    if unique.len() != owners.len() {
        return Err(ValidationError::DuplicateOwner);
    }
    Ok(())
}

pub fn validate_threshold(threshold: u8) -> Result<(), ValidationError> {
    if threshold != FIXED_THRESHOLD {
        return Err(ValidationError::UnsupportedThreshold(threshold));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(())
}

pub fn is_slug_charset(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.trim().is_empty() {
        return Err(ValidationError::SlugRequired);
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(ValidationError::SlugTooLong { max: MAX_SLUG_LEN });
    }
    if !is_slug_charset(slug) {
        return Err(ValidationError::InvalidSlugCharset);
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.len() > MAX_URL_LEN {
        return Err(ValidationError::UrlTooLong { max: MAX_URL_LEN });
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

pub fn validate_categories<S: AsRef<str>>(categories: &[S]) -> Result<(), ValidationError> {
    if categories.is_empty() {
        return Err(ValidationError::NoCategories);
    }
    if categories.len() > MAX_CATEGORIES {
        return Err(ValidationError::TooManyCategories {
            max: MAX_CATEGORIES,
        });
    }

    let mut unique = HashSet::with_capacity(categories.len());
    for category in categories {
        let category = category.as_ref();
        if category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if category.len() > MAX_CATEGORY_LEN {
            return Err(ValidationError::CategoryTooLong {
                max: MAX_CATEGORY_LEN,
            });
        }
        unique.insert(category);
    }
    if unique.len() != categories.len() {
        return Err(ValidationError::DuplicateCategory);
    }
    Ok(())
}
