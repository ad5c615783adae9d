// instruction.rs
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::COUNTER_SEED;

pub enum PdaRelayInstruction {
    /// Forward a counter invocation to the target program, signing for the
    /// per-user counter PDA with this program's seeds.
    ///
    /// Accounts:
    /// 0. `[writable]` counter PDA, derived from `[b"counter", user]`
    /// 1. `[]` user the PDA is derived from
    /// 2. `[]` counter program (the callee's address as an account entry)
    RelaySigned,
}

impl PdaRelayInstruction {
    /// Single implicit instruction; non-empty payloads are rejected rather
    /// than ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if !input.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self::RelaySigned)
    }
}

/// Build a `RelaySigned` instruction, deriving the counter PDA for `user`.
pub fn relay_signed(
    program_id: &Pubkey,
    user: &Pubkey,
    target_program_id: &Pubkey,
) -> Instruction {
    let (counter_pda, _bump) =
        Pubkey::find_program_address(&[COUNTER_SEED, user.as_ref()], program_id);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(counter_pda, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new_readonly(*target_program_id, false),
        ],
        data: vec![],
    }
}
