// instruction.rs
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};

pub enum RelayInstruction {
    /// Forward a single counter invocation to the target program.
    ///
    /// Accounts:
    /// 0. `[writable]` counter account, flags passed through to the callee
    /// 1. `[]` counter program (the callee's address as an account entry)
    Relay,
}

impl RelayInstruction {
    /// Single implicit instruction; non-empty payloads are rejected rather
    /// than ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if !input.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self::Relay)
    }
}

/// Build a `Relay` instruction.
///
/// The callee's address is a typed parameter here; on the wire it rides as a
/// trailing read-only account entry, since program ids are ordinary
/// account-list entries in this execution model.
pub fn relay(
    program_id: &Pubkey,
    counter_account: &Pubkey,
    target_program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*counter_account, false),
            AccountMeta::new_readonly(*target_program_id, false),
        ],
        data: vec![],
    }
}
