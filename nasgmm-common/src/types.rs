//! Common identity types

use std::fmt;

use crate::error::Error;
use crate::mcc_mnc::MncLengthTable;

/// Public Land Mobile Network identity
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plmn {
    /// Mobile Country Code (3 digits, range 0-999)
    pub mcc: u16,
    /// Mobile Network Code (2-3 digits, range 0-999)
    pub mnc: u16,
    /// True if MNC is 3 digits, false if 2 digits
    pub long_mnc: bool,
}

impl Plmn {
    /// Creates a new PLMN with the given MCC and MNC.
    pub const fn new(mcc: u16, mnc: u16, long_mnc: bool) -> Self {
        Self { mcc, mnc, long_mnc }
    }

    /// Builds a PLMN from six ASCII digits, using `table` to decide whether
    /// the MNC has two or three digits.
    ///
    /// Networks missing from the table are treated as three-digit when the
    /// third MNC digit is a digit, two-digit otherwise.
    ///
    /// # Example
    /// ```
    /// use nasgmm_common::{MncLengthTable, Plmn};
    ///
    /// let table = MncLengthTable::default();
    /// let plmn = Plmn::from_digits(*b"262", *b"017", &table).unwrap();
    /// assert_eq!(plmn, Plmn::new(262, 1, false));
    /// ```
    pub fn from_digits(mcc: [u8; 3], mnc: [u8; 3], table: &MncLengthTable) -> Result<Self, Error> {
        let long_mnc = match table.find(mcc, mnc)? {
            2 => false,
            3 => true,
            _ => mnc[2].is_ascii_digit(),
        };
        let digit = |d: u8| u16::from(d - b'0');
        let mcc = digit(mcc[0]) * 100 + digit(mcc[1]) * 10 + digit(mcc[2]);
        let mnc = if long_mnc {
            digit(mnc[0]) * 100 + digit(mnc[1]) * 10 + digit(mnc[2])
        } else {
            digit(mnc[0]) * 10 + digit(mnc[1])
        };
        Ok(Self { mcc, mnc, long_mnc })
    }

    /// Encodes the PLMN as three BCD octets (3GPP TS 24.008 §10.5.1.13).
    ///
    /// - Octet 1: MCC digit 2 (high nibble) | MCC digit 1 (low nibble)
    /// - Octet 2: MNC digit 3 or 0xF (high nibble) | MCC digit 3 (low nibble)
    /// - Octet 3: MNC digit 2 (high nibble) | MNC digit 1 (low nibble)
    pub fn encode(&self) -> [u8; 3] {
        let mcc1 = ((self.mcc / 100) % 10) as u8;
        let mcc2 = ((self.mcc / 10) % 10) as u8;
        let mcc3 = (self.mcc % 10) as u8;

        let (mnc1, mnc2, mnc3) = if self.long_mnc {
            (
                ((self.mnc / 100) % 10) as u8,
                ((self.mnc / 10) % 10) as u8,
                (self.mnc % 10) as u8,
            )
        } else {
            (((self.mnc / 10) % 10) as u8, (self.mnc % 10) as u8, 0x0F)
        };

        [(mcc2 << 4) | mcc1, (mnc3 << 4) | mcc3, (mnc2 << 4) | mnc1]
    }

    /// Decodes three BCD octets.
    pub fn decode(octets: [u8; 3]) -> Self {
        let mcc = u16::from(octets[0] & 0x0F) * 100
            + u16::from(octets[0] >> 4) * 10
            + u16::from(octets[1] & 0x0F);
        let mnc3 = octets[1] >> 4;
        let mnc12 = u16::from(octets[2] & 0x0F) * 10 + u16::from(octets[2] >> 4);

        if mnc3 == 0x0F {
            Self::new(mcc, mnc12, false)
        } else {
            Self::new(mcc, mnc12 * 10 + u16::from(mnc3), true)
        }
    }
}

impl fmt::Debug for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_mnc {
            write!(f, "Plmn({:03}-{:03})", self.mcc, self.mnc)
        } else {
            write!(f, "Plmn({:03}-{:02})", self.mcc, self.mnc)
        }
    }
}

impl fmt::Display for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_mnc {
            write!(f, "{:03}{:03}", self.mcc, self.mnc)
        } else {
            write!(f, "{:03}{:02}", self.mcc, self.mnc)
        }
    }
}
