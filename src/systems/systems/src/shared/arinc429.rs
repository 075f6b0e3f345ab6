use std::fmt::{Display, Formatter};

/// The two sign status matrix bits of an ARINC 429 word, decoded into the four states a receiver
/// distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignStatus {
    FailureWarning,
    FunctionalTest,
    NoComputedData,
    NormalOperation,
}

impl SignStatus {
    /// Decodes the two SSM bits. Only the lowest two bits of the argument are considered.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => SignStatus::FailureWarning,
            0b01 => SignStatus::FunctionalTest,
            0b10 => SignStatus::NoComputedData,
            _ => SignStatus::NormalOperation,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            SignStatus::FailureWarning => 0b00,
            SignStatus::FunctionalTest => 0b01,
            SignStatus::NoComputedData => 0b10,
            SignStatus::NormalOperation => 0b11,
        }
    }
}

impl Default for SignStatus {
    fn default() -> Self {
        SignStatus::FailureWarning
    }
}

impl Display for SignStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SignStatus::FailureWarning => "FW",
            SignStatus::FunctionalTest => "FT",
            SignStatus::NoComputedData => "NCD",
            SignStatus::NormalOperation => "NO",
        };
        write!(f, "{}", text)
    }
}

/// The data field of a discrete word. Bits are addressed by their ARINC 429 position, i.e. 11 to
/// 29 inclusive.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Arinc429Discretes {
    values: [bool; 19],
}

impl Arinc429Discretes {
    const FIRST_BIT: usize = 11;
    const LAST_BIT: usize = 29;

    pub fn new(values: [bool; 19]) -> Self {
        Self { values }
    }

    /// Returns the state of the given bit. Bits outside of the data field read as false.
    pub fn bit(&self, bit: usize) -> bool {
        if (Self::FIRST_BIT..=Self::LAST_BIT).contains(&bit) {
            self.values[bit - Self::FIRST_BIT]
        } else {
            false
        }
    }

    pub fn with_bit(mut self, bit: usize, value: bool) -> Self {
        if (Self::FIRST_BIT..=Self::LAST_BIT).contains(&bit) {
            self.values[bit - Self::FIRST_BIT] = value;
        }
        self
    }
}

pub struct Arinc429DiscretesWordBuilder {
    value: Arinc429Discretes,
}

impl Arinc429DiscretesWordBuilder {
    pub fn new() -> Self {
        Self {
            value: Arinc429Discretes::default(),
        }
    }

    pub fn set(mut self, bit: usize, value: bool) -> Self {
        self.value = self.value.with_bit(bit, value);
        self
    }

    pub fn build(&self) -> Arinc429Discretes {
        self.value
    }
}

impl Default for Arinc429DiscretesWordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
