// instruction.rs
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};

pub enum CounterInstruction {
    /// Advance the counter: a zero count becomes 1, anything else doubles,
    /// wrapping modulo 2^32.
    ///
    /// Accounts:
    /// 0. `[writable]` counter account
    Double,
}

impl CounterInstruction {
    /// The program has a single implicit instruction, so the payload carries
    /// no discriminator. A non-empty payload is rejected rather than ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if !input.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self::Double)
    }
}

/// Build a `Double` instruction against the given counter account.
pub fn double(program_id: &Pubkey, counter_account: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*counter_account, false)],
        data: vec![],
    }
}
