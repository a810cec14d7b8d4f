#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum WishListError {
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    InvalidAccountOwner,
    UndecodableAccountData,
}

impl From<WishListError> for &'static str {
    fn from(value: WishListError) -> Self {
        match value {
            WishListError::InsufficientByteLength => "Not enough bytes passed",
            WishListError::InvalidAccountDiscriminant => "Invalid account discriminant",
            WishListError::InvalidAccountOwner => "Account isn't owned by the wish list program",
            WishListError::UndecodableAccountData => "Account data couldn't be decoded",
        }
    }
}

impl core::fmt::Display for WishListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = self.clone().into();
        write!(f, "{:?}: {msg}", self)
    }
}

impl std::error::Error for WishListError {}

pub type WishListResult<T> = Result<T, WishListError>;

/// Custom error codes a failed wish list transaction can surface.
///
/// The program is built with Anchor, so its own failures are Anchor framework codes. Code `0` is the
/// system program's `AccountAlreadyInUse`, raised from the account creation CPI when the base account
/// has already been initialized.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ProgramErrorCode {
    AccountAlreadyInUse = 0,
    InstructionMissing = 100,
    InstructionFallbackNotFound = 101,
    InstructionDidNotDeserialize = 102,
    ConstraintMut = 2000,
    ConstraintSigner = 2002,
    AccountDiscriminatorAlreadySet = 3000,
    AccountDiscriminatorNotFound = 3001,
    AccountDiscriminatorMismatch = 3002,
    AccountDidNotDeserialize = 3003,
    AccountDidNotSerialize = 3004,
    AccountNotEnoughKeys = 3005,
    AccountNotMutable = 3006,
    AccountOwnedByWrongProgram = 3007,
    InvalidProgramId = 3008,
    AccountNotSigner = 3010,
    AccountNotSystemOwned = 3011,
    AccountNotInitialized = 3012,
    DeclaredProgramIdMismatch = 4100,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn program_error_codes_round_trip() {
        for code in ProgramErrorCode::iter() {
            assert_eq!(ProgramErrorCode::from_repr(code as u32), Some(code));
        }
        assert_eq!(ProgramErrorCode::from_repr(6000), None);
    }

    #[test]
    fn display_includes_the_description() {
        assert_eq!(
            WishListError::InvalidAccountDiscriminant.to_string(),
            "InvalidAccountDiscriminant: Invalid account discriminant"
        );
        assert_eq!(
            ProgramErrorCode::AccountNotInitialized.to_string(),
            "AccountNotInitialized"
        );
    }
}
