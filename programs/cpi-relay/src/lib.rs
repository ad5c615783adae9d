#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint; // where the Solana program process starts
pub mod instruction; // instruction decoding and client-side builders
pub mod processor; // where the forwarding logic lives
