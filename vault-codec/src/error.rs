//! Error types for the vault codec

use thiserror::Error;

/// A builder precondition that failed before any bytes were produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one owner is required")]
    NoOwners,

    #[error("Maximum {max} owners allowed")]
    TooManyOwners { max: usize },

    #[error("Duplicate owners are not allowed")]
    DuplicateOwner,

    #[error("Threshold is fixed at 1 until multisig support launches")]
    UnsupportedThreshold(u8),

    #[error("Name is required")]
    NameRequired,

    #[error("Name must be {max} bytes or less")]
    NameTooLong { max: usize },

    #[error("Slug is required")]
    SlugRequired,

    #[error("Slug must be {max} bytes or less")]
    SlugTooLong { max: usize },

    #[error("Slug must contain only lowercase letters, numbers, and hyphens")]
    InvalidSlugCharset,

    #[error("URL must be {max} bytes or less")]
    UrlTooLong { max: usize },

    #[error("Description must be {max} bytes or less")]
    DescriptionTooLong { max: usize },

    #[error("Select at least one category")]
    NoCategories,

    #[error("Select at most {max} categories")]
    TooManyCategories { max: usize },

    #[error("Category values cannot be empty")]
    EmptyCategory,

    #[error("Category values must be {max} bytes or less")]
    CategoryTooLong { max: usize },

    #[error("Duplicate categories are not allowed")]
    DuplicateCategory,

    #[error("At least one field must be updated")]
    NothingToUpdate,

    #[error("Amount must be a valid SOL value (up to 9 decimal places)")]
    InvalidAmount,

    #[error("Please enter an amount greater than zero")]
    ZeroAmount,

    #[error("Amount exceeds the maximum allowed")]
    AmountTooLarge,

    #[error("This campaign does not have any owners configured yet")]
    NoRecipients,

    #[error("Campaign name produces an empty slug")]
    EmptySlugBase,

    #[error("This campaign name is reserved")]
    ReservedSlugBase,

    #[error("Slug conflicts with a blocked campaign")]
    BannedSlug,

    #[error("This campaign is no longer available.")]
    CampaignUnavailable,
}

/// A value that cannot be represented in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("length {0} does not fit in a u32 prefix")]
    LengthOverflow(usize),
}

/// An account buffer that could not be turned into a vault record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("account data is {0} bytes, shorter than the discriminator")]
    TooShort(usize),

    #[error("account discriminator does not identify a vault")]
    DiscriminatorMismatch,

    #[error("unexpected end of account data at offset {offset} (needed {needed} bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("creation timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

impl DecodeError {
    /// Whether the buffer simply belongs to another record kind.
    pub fn is_foreign(&self) -> bool {
        matches!(self, DecodeError::TooShort(_) | DecodeError::DiscriminatorMismatch)
    }
}

/// Failure to build a vault instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("no program address exists for slug {0:?}")]
    AddressDerivation(String),
}
