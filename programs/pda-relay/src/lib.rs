#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint; // where the Solana program process starts
pub mod instruction; // instruction decoding and client-side builders
pub mod processor; // where the signed forwarding logic lives

/// Seed prefix for per-user counter PDAs.
pub const COUNTER_SEED: &[u8] = b"counter";
