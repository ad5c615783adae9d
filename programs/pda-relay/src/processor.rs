use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{instruction::PdaRelayInstruction, COUNTER_SEED};

// program entrypoint's implementation
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = PdaRelayInstruction::unpack(instruction_data)?;

    match instruction {
        PdaRelayInstruction::RelaySigned => {
            msg!("Instruction: RelaySigned");
            process_relay_signed(program_id, accounts)
        }
    }
}

/// Re-invoke the counter program on the per-user counter PDA, signing for
/// the PDA with this program's seeds. The callee's result propagates to our
/// caller unmodified.
pub fn process_relay_signed(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let counter_account = next_account_info(accounts_iter)?;
    let user_account = next_account_info(accounts_iter)?;
    let counter_program = next_account_info(accounts_iter)?;

    // Check to ensure that you're using the right PDA derived from the user
    let (counter_pda, bump_seed) =
        Pubkey::find_program_address(&[COUNTER_SEED, user_account.key.as_ref()], program_id);
    if counter_pda != *counter_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    let instruction = Instruction {
        program_id: *counter_program.key,
        accounts: vec![AccountMeta::new(*counter_account.key, true)],
        data: vec![],
    };

    invoke_signed(
        &instruction,
        &[counter_account.clone(), counter_program.clone()],
        &[&[COUNTER_SEED, user_account.key.as_ref(), &[bump_seed]]],
    )
}
