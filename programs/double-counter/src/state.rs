// state.rs
use borsh::{BorshDeserialize, BorshSerialize};

/// Counter value held in the data account.
///
/// Borsh lays a `u32` out as exactly four little-endian bytes with no header
/// or version byte, and that is the whole account: any 4-byte pattern decodes
/// to a valid count.
#[derive(BorshSerialize, BorshDeserialize, Debug)]
pub struct Counter {
    pub count: u32,
}

impl Counter {
    pub const SIZE: usize = 4;
}
