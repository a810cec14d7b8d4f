pub mod add_wish;
pub mod start_stuff_off;

pub use add_wish::AddWish;
pub use start_stuff_off::StartStuffOff;

/// The size of the Anchor instruction discriminator prefixed to all instruction data.
pub const INSTRUCTION_DISCRIMINATOR_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "snake_case")]
pub enum WishListInstruction {
    StartStuffOff,
    AddWish,
}

impl WishListInstruction {
    /// `sha256("global:<instruction name>")[..8]`, the Anchor instruction discriminator.
    pub const fn discriminator(&self) -> [u8; INSTRUCTION_DISCRIMINATOR_SIZE] {
        match self {
            Self::StartStuffOff => [126, 54, 85, 33, 226, 32, 195, 32],
            Self::AddWish => [182, 191, 203, 84, 171, 25, 46, 8],
        }
    }

    /// Identifies the instruction from the leading bytes of its instruction data.
    pub fn try_from_instruction_data(data: &[u8]) -> Option<Self> {
        let discriminator = data.get(..INSTRUCTION_DISCRIMINATOR_SIZE)?;
        [Self::StartStuffOff, Self::AddWish]
            .into_iter()
            .find(|instruction| instruction.discriminator() == discriminator)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::WishListInstruction;

    #[test]
    fn test_instruction_from_data_exhaustive() {
        for variant in WishListInstruction::iter() {
            let data = [variant.discriminator().as_slice(), &[1, 2, 3]].concat();
            assert_eq!(
                WishListInstruction::try_from_instruction_data(&data),
                Some(variant)
            );
        }
    }

    #[test]
    fn unknown_or_short_data() {
        assert_eq!(WishListInstruction::try_from_instruction_data(&[0; 8]), None);
        assert_eq!(
            WishListInstruction::try_from_instruction_data(&[126, 54, 85]),
            None
        );
    }

    #[test]
    fn instruction_names() {
        assert_eq!(WishListInstruction::StartStuffOff.to_string(), "start_stuff_off");
        assert_eq!(WishListInstruction::AddWish.to_string(), "add_wish");
    }
}
