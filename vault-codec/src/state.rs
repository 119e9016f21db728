use chrono::{DateTime, Datelike, Utc};
use solana_sdk::pubkey::Pubkey;

use crate::constants::{DEFAULT_CATEGORY, DISCRIMINATOR_LEN, VAULT_ACCOUNT_DISCRIMINATOR};
use crate::decode::Reader;
use crate::error::DecodeError;

/// Decoded vault account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRecord {
    /// Donation recipients, in payout order
    pub owners: Vec<Pubkey>,
    pub threshold: u8,
    pub name: String,
    /// PDA seed, unique per campaign
    pub slug: String,
    pub url: String,
    pub description: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// PDA bump seed
    pub bump: u8,
}

impl VaultRecord {
    /// Checks the discriminator, then decodes the fields.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, DecodeError> {
        check_vault_discriminator(data)?;
        Self::decode_fields(data)
    }

    /// Decodes the fields that follow the 8-byte discriminator. The
    /// discriminator region itself is skipped, not inspected.
    ///
    /// Layout:
    /// - 8 bytes: discriminator
    /// - 4 + 32*n bytes: owners
    /// - 1 byte: threshold
    /// - 4 + len bytes each: name, slug, url, description
    /// - 4 + ... bytes: categories (or a single legacy string)
    /// - 8 bytes: created_at (i64 seconds)
    /// - 1 byte: bump
    pub fn decode_fields(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data, DISCRIMINATOR_LEN);

        let owners = reader.read_pubkey_vec()?;
        let threshold = reader.read_u8()?;
        let name = reader.read_string()?;
        let slug = reader.read_string()?;
        let url = reader.read_string()?;
        let description = reader.read_string()?;

        let mut categories = reader.read_string_vec()?;
        if categories.is_empty() {
            categories.push(DEFAULT_CATEGORY.to_string());
        }

        if reader.remaining() < 9 {
            return Err(DecodeError::UnexpectedEof {
                offset: reader.offset(),
                needed: 9,
            });
        }
        let created_at_secs = reader.read_i64_le()?;
        let created_at = DateTime::from_timestamp(created_at_secs, 0)
            .ok_or(DecodeError::TimestampOutOfRange(created_at_secs))?;
        let bump = reader.read_u8()?;

        Ok(Self {
            owners,
            threshold,
            name,
            slug,
            url,
            description,
            categories,
            created_at,
            bump,
        })
    }

    /// ISO-8601 creation time with millisecond precision, e.g.
    /// `2024-01-01T00:00:00.000Z`. Years outside 0..=9999 use the expanded
    /// six-digit signed form (`+010000-01-01T00:00:00.000Z`).
    pub fn created_at_iso(&self) -> String {
        let year = self.created_at.year();
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else {
            format!("{year:+07}")
        };
        format!("{year}-{}", self.created_at.format("%m-%dT%H:%M:%S%.3fZ"))
    }

    pub fn is_owner(&self, wallet: &Pubkey) -> bool {
        self.owners.iter().any(|owner| owner == wallet)
    }
}

/// Rejects buffers that are not vault accounts.
pub fn check_vault_discriminator(data: &[u8]) -> Result<(), DecodeError> {
    let discriminator = data
        .get(..DISCRIMINATOR_LEN)
        .ok_or(DecodeError::TooShort(data.len()))?;
    if discriminator != VAULT_ACCOUNT_DISCRIMINATOR {
        return Err(DecodeError::DiscriminatorMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CREATE_VAULT_DISCRIMINATOR;
    use crate::constants::{
        MAX_CATEGORIES, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_OWNERS,
        MAX_SLUG_LEN, MAX_URL_LEN,
    };
    use crate::instructions::{encode_create_args, CreateVaultParams};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const CREATED_AT: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

    fn params(owners: Vec<Pubkey>, categories: Vec<&str>) -> CreateVaultParams {
        CreateVaultParams {
            payer: owners[0],
            owners,
            threshold: 1,
            name: "Community Garden".to_string(),
            slug: "community-garden-a1b2c3".to_string(),
            url: "https://garden.example".to_string(),
            description: "Seeds and soil".to_string(),
            categories: categories.into_iter().map(String::from).collect(),
        }
    }

    fn account_data(args: &[u8], created_at: i64, bump: u8) -> Vec<u8> {
        let mut data = VAULT_ACCOUNT_DISCRIMINATOR.to_vec();
        data.extend_from_slice(args);
        data.extend_from_slice(&created_at.to_le_bytes());
        data.push(bump);
        data
    }

    #[test]
    fn test_round_trip_from_create_args() {
        let owners = vec![Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let params = params(owners.clone(), vec!["defi", "public-good"]);
        let args = encode_create_args(&params).unwrap();
        let data = account_data(&args, CREATED_AT, 254);

        let record = VaultRecord::try_from_account_data(&data).unwrap();

        assert_eq!(record.owners, owners);
        assert_eq!(record.threshold, 1);
        assert_eq!(record.name, params.name);
        assert_eq!(record.slug, params.slug);
        assert_eq!(record.url, params.url);
        assert_eq!(record.description, params.description);
        assert_eq!(record.categories, vec!["defi", "public-good"]);
        assert_eq!(record.created_at_iso(), "2024-01-01T00:00:00.000Z");
        assert_eq!(record.bump, 254);
    }

    /// Mixed-width UTF-8 text of at most `max_bytes` bytes, never blank.
    fn random_text(rng: &mut StdRng, max_bytes: usize) -> String {
        const PIECES: &[&str] = &["a", "Z", "7", " ", "-", "é", "ß", "中", "🌱"];
        let target = rng.gen_range(1..=max_bytes);
        let mut out = String::from("x");
        loop {
            let piece = PIECES[rng.gen_range(0..PIECES.len())];
            if out.len() + piece.len() > target {
                return out;
            }
            out.push_str(piece);
        }
    }

    fn random_slug(rng: &mut StdRng) -> String {
        const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
        let len = rng.gen_range(1..=MAX_SLUG_LEN);
        (0..len)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }

    fn random_params(rng: &mut StdRng) -> CreateVaultParams {
        let owner_count = rng.gen_range(1..=MAX_OWNERS);
        let owners: Vec<Pubkey> = (0..owner_count)
            .map(|_| Pubkey::new_from_array(rng.gen()))
            .collect();

        let category_count = rng.gen_range(1..=MAX_CATEGORIES);
        let mut categories = Vec::with_capacity(category_count);
        while categories.len() < category_count {
            let category = random_text(rng, MAX_CATEGORY_LEN);
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let url = if rng.gen_bool(0.2) {
            String::new()
        } else {
            random_text(rng, MAX_URL_LEN)
        };
        let description = if rng.gen_bool(0.2) {
            String::new()
        } else {
            random_text(rng, MAX_DESCRIPTION_LEN)
        };

        CreateVaultParams {
            payer: owners[0],
            owners,
            threshold: 1,
            name: random_text(rng, MAX_NAME_LEN),
            slug: random_slug(rng),
            url,
            description,
            categories,
        }
    }

    #[test]
    fn test_random_valid_create_args_decode_back() {
        let mut rng = StdRng::seed_from_u64(0x7a_017);

        for _ in 0..500 {
            let params = random_params(&mut rng);
            params.validate().unwrap();
            let created_at = rng.gen_range(0..4_102_444_800i64);
            let bump: u8 = rng.gen();

            let args = encode_create_args(&params).unwrap();
            let record =
                VaultRecord::try_from_account_data(&account_data(&args, created_at, bump)).unwrap();

            assert_eq!(record.owners, params.owners);
            assert_eq!(record.threshold, params.threshold);
            assert_eq!(record.name, params.name);
            assert_eq!(record.slug, params.slug);
            assert_eq!(record.url, params.url);
            assert_eq!(record.description, params.description);
            assert_eq!(record.categories, params.categories);
            assert_eq!(record.created_at.timestamp(), created_at);
            assert_eq!(record.bump, bump);
        }
    }

    #[test]
    fn test_empty_categories_default_to_non_profit() {
        let params = params(vec![Pubkey::new_unique()], vec![]);
        let args = encode_create_args(&params).unwrap();
        let record = VaultRecord::decode_fields(&account_data(&args, CREATED_AT, 1)).unwrap();

        assert_eq!(record.categories, vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn test_legacy_single_category_layout() {
        let owner = Pubkey::new_unique();
        let mut args = 1u32.to_le_bytes().to_vec();
        args.extend_from_slice(owner.as_ref());
        args.push(1);
        for s in ["Old", "old", "", "", "gaming"] {
            args.extend_from_slice(&(s.len() as u32).to_le_bytes());
            args.extend_from_slice(s.as_bytes());
        }
        let data = account_data(&args, CREATED_AT, 3);

        let record = VaultRecord::try_from_account_data(&data).unwrap();
        assert_eq!(record.categories, vec!["gaming"]);
        assert_eq!(record.bump, 3);
    }

    #[test]
    fn test_truncation_never_yields_partial_record() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi", "gaming"]);
        let args = encode_create_args(&params).unwrap();
        let data = account_data(&args, CREATED_AT, 1);

        for len in 0..data.len() {
            match VaultRecord::decode_fields(&data[..len]) {
                Err(_) => {}
                // Only the legacy single-string reading of the categories
                // offset can still succeed on a shortened buffer.
                Ok(record) => {
                    assert_eq!(record.name, params.name);
                    assert_eq!(record.description, params.description);
                    assert_eq!(record.categories.len(), 1, "len {len}");
                    assert_ne!(record.categories, vec!["defi", "gaming"]);
                }
            }
        }
        assert!(VaultRecord::decode_fields(&data).is_ok());
    }

    #[test]
    fn test_missing_timestamp_and_bump() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();
        let mut data = account_data(&args, CREATED_AT, 1);
        data.pop();

        assert!(matches!(
            VaultRecord::decode_fields(&data),
            Err(DecodeError::UnexpectedEof { needed: 9, .. })
        ));
    }

    #[test]
    fn test_owner_count_larger_than_buffer() {
        let mut data = VAULT_ACCOUNT_DISCRIMINATOR.to_vec();
        data.extend_from_slice(&1_000_000u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 64]);

        assert!(VaultRecord::decode_fields(&data).is_err());
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();
        let data = account_data(&args, i64::MAX, 1);

        assert_eq!(
            VaultRecord::decode_fields(&data),
            Err(DecodeError::TimestampOutOfRange(i64::MAX))
        );

        // Past year 262143, beyond what the record can hold.
        let data = account_data(&args, 8_500_000_000_000, 1);
        assert_eq!(
            VaultRecord::decode_fields(&data),
            Err(DecodeError::TimestampOutOfRange(8_500_000_000_000))
        );
    }

    #[test]
    fn test_created_at_iso_expanded_years() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();
        let iso = |secs: i64| {
            VaultRecord::decode_fields(&account_data(&args, secs, 1))
                .unwrap()
                .created_at_iso()
        };

        assert_eq!(iso(CREATED_AT), "2024-01-01T00:00:00.000Z");
        assert_eq!(iso(253_402_300_799), "9999-12-31T23:59:59.000Z");
        assert_eq!(iso(253_402_300_800), "+010000-01-01T00:00:00.000Z");
        assert_eq!(iso(-62_167_219_200), "0000-01-01T00:00:00.000Z");
        assert_eq!(iso(-62_198_755_200), "-000001-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_negative_timestamp_is_before_epoch() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();
        let record = VaultRecord::decode_fields(&account_data(&args, -1, 1)).unwrap();

        assert_eq!(record.created_at_iso(), "1969-12-31T23:59:59.000Z");
    }

    #[test]
    fn test_discriminator_checks() {
        let params = params(vec![Pubkey::new_unique()], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();

        let mut foreign = CREATE_VAULT_DISCRIMINATOR.to_vec();
        foreign.extend_from_slice(&args);
        foreign.extend_from_slice(&CREATED_AT.to_le_bytes());
        foreign.push(1);

        let err = VaultRecord::try_from_account_data(&foreign).unwrap_err();
        assert_eq!(err, DecodeError::DiscriminatorMismatch);
        assert!(err.is_foreign());

        let err = VaultRecord::try_from_account_data(&[0xd3, 0x08]).unwrap_err();
        assert_eq!(err, DecodeError::TooShort(2));
        assert!(err.is_foreign());
    }

    #[test]
    fn test_is_owner() {
        let owner = Pubkey::new_unique();
        let params = params(vec![owner], vec!["defi"]);
        let args = encode_create_args(&params).unwrap();
        let record = VaultRecord::decode_fields(&account_data(&args, CREATED_AT, 1)).unwrap();

        assert!(record.is_owner(&owner));
        assert!(!record.is_owner(&Pubkey::new_unique()));
    }
}
