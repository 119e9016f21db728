//! SOL amount parsing and donation split arithmetic.
//!
//! All arithmetic is on integer lamports; no floating point is involved.

use crate::constants::{LAMPORTS_PER_SOL, SOL_DECIMALS};
use crate::error::ValidationError;

/// Converts a decimal SOL amount with up to nine fractional digits into
/// lamports. Surrounding whitespace is ignored and an empty input is zero.
pub fn parse_sol_to_lamports(value: &str) -> Result<u64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty()
        || !all_digits(whole)
        || !all_digits(fraction)
        || fraction.len() > SOL_DECIMALS
    {
        return Err(ValidationError::InvalidAmount);
    }

    let whole: u64 = whole.parse().map_err(|_| ValidationError::AmountTooLarge)?;
    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<width$}", width = SOL_DECIMALS)
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|lamports| lamports.checked_add(fraction))
        .ok_or(ValidationError::AmountTooLarge)
}

/// Parses a donation amount, which must be strictly positive.
pub fn parse_donation_lamports(value: &str) -> Result<u64, ValidationError> {
    match parse_sol_to_lamports(value)? {
        0 => Err(ValidationError::ZeroAmount),
        lamports => Ok(lamports),
    }
}

/// Formats lamports as SOL with trailing fractional zeros removed.
pub fn format_lamports_to_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let fraction = lamports % LAMPORTS_PER_SOL;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:0>width$}", width = SOL_DECIMALS);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

/// How a donation is divided between vault owners: an equal share each, with
/// the remainder going to the first owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationSplit {
    pub total: u64,
    pub per_owner: u64,
    pub remainder: u64,
    pub owner_count: usize,
}

impl DonationSplit {
    pub fn new(total: u64, owner_count: usize) -> Result<Self, ValidationError> {
        if owner_count == 0 {
            return Err(ValidationError::NoRecipients);
        }
        let count = owner_count as u64;
        Ok(Self {
            total,
            per_owner: total / count,
            remainder: total % count,
            owner_count,
        })
    }

    /// Amount received by each owner, in owner order.
    pub fn shares(&self) -> Vec<u64> {
        let mut shares = vec![self.per_owner; self.owner_count];
        if let Some(first) = shares.first_mut() {
            *first += self.remainder;
        }
        shares
    }
}
