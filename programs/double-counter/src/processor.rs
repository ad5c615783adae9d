use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{instruction::CounterInstruction, state::Counter};

// program entrypoint's implementation
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = CounterInstruction::unpack(instruction_data)?;

    match instruction {
        CounterInstruction::Double => {
            msg!("Instruction: Double");
            process_double(program_id, accounts)
        }
    }
}

/// Apply the counter transition to the first account. Extra accounts are
/// ignored; only the first one is read or written.
pub fn process_double(_program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let counter_account = next_account_info(accounts_iter)?;

    if !counter_account.is_writable {
        msg!("Counter account {} must be writable", counter_account.key);
        return Err(ProgramError::InvalidAccountData);
    }

    let mut counter = Counter::try_from_slice(&counter_account.data.borrow())?;
    // A zero count advances to 1 on the first call; every later call doubles
    // the value, wrapping silently modulo 2^32.
    counter.count = if counter.count == 0 {
        1
    } else {
        counter.count.wrapping_mul(2)
    };
    counter.serialize(&mut &mut counter_account.data.borrow_mut()[..])?;
    msg!("Counter {} count: {}", counter_account.key, counter.count);

    Ok(())
}
