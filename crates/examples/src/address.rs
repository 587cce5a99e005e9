use core::fmt;

use option::O;

pub const ADDRESS_LEN: usize = 20;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses 40 hex digits, with or without a `0x` prefix.
    ///
    /// Returns `None` for the wrong length or any non-hex character.
    pub fn parse(text: &str) -> O<Self> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        if digits.len() != ADDRESS_LEN * 2 {
            return O::None;
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        match hex::decode_to_slice(digits, &mut bytes) {
            Ok(()) => O::Some(Self(bytes)),
            Err(_) => O::None,
        }
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
