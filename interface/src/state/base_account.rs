//! The program-owned account that stores every wish.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::{
        WishListError,
        WishListResult,
    },
    state::ACCOUNT_DISCRIMINATOR_SIZE,
};

/// `sha256("account:BaseAccount")[..8]`
pub const BASE_ACCOUNT_DISCRIMINATOR: [u8; ACCOUNT_DISCRIMINATOR_SIZE] =
    [16, 90, 130, 242, 159, 10, 232, 133];

/// The address of the single shared base account, `49ps2QXNkK727YwYqXJvqKohcjXWLLHWjP5CnPVwh17Z`.
///
/// Its key pair ships with the client so that any user can sign the one-time initialization.
pub const BASE_ACCOUNT_ADDRESS: Pubkey = Pubkey::new_from_array([
    46, 213, 211, 86, 117, 128, 4, 92, 188, 94, 181, 76, 125, 19, 239, 11, 75, 59, 219, 214, 226,
    50, 2, 117, 2, 170, 80, 214, 83, 196, 67, 156,
]);

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WishItem {
    pub wish: String,
    user_address: [u8; 32],
}

impl WishItem {
    pub fn new(wish: impl Into<String>, user: &Pubkey) -> Self {
        Self {
            wish: wish.into(),
            user_address: user.to_bytes(),
        }
    }

    /// The user that added the wish.
    pub fn user_address(&self) -> Pubkey {
        Pubkey::new_from_array(self.user_address)
    }
}

/// Account data layout:
///   - [0..8]: the account discriminator
///   - [8..16]: `total_wishes` as a little-endian u64
///   - [16..]: the borsh encoded `wish_list`, followed by unused zeroed space
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseAccount {
    pub total_wishes: u64,
    pub wish_list: Vec<WishItem>,
}

impl BaseAccount {
    /// Decodes the account from raw account data.
    ///
    /// Data that ends before a field is treated as that field being absent, so an account holding
    /// only its discriminator decodes as an empty wish list.
    pub fn try_from_account_data(data: &[u8]) -> WishListResult<Self> {
        let (discriminator, mut rest) = data
            .split_at_checked(ACCOUNT_DISCRIMINATOR_SIZE)
            .ok_or(WishListError::InsufficientByteLength)?;

        if discriminator != BASE_ACCOUNT_DISCRIMINATOR {
            return Err(WishListError::InvalidAccountDiscriminant);
        }

        if rest.is_empty() {
            return Ok(Self::default());
        }

        let total_wishes = u64::deserialize(&mut rest)
            .map_err(|_| WishListError::InsufficientByteLength)?;

        if rest.is_empty() {
            return Ok(Self {
                total_wishes,
                wish_list: vec![],
            });
        }

        // Anchor allocates a fixed amount of space up front, so trailing bytes are expected and
        // `try_from_slice` can't be used here.
        let wish_list = Vec::<WishItem>::deserialize(&mut rest)
            .map_err(|_| WishListError::UndecodableAccountData)?;

        Ok(Self {
            total_wishes,
            wish_list,
        })
    }

    /// Encodes the account the way the program stores it, discriminator included.
    pub fn pack(&self) -> std::io::Result<Vec<u8>> {
        let mut data = BASE_ACCOUNT_DISCRIMINATOR.to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }

    /// The wishes in insertion order.
    pub fn wishes(&self) -> Vec<String> {
        self.wish_list.iter().map(|item| item.wish.clone()).collect()
    }
}
