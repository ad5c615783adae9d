use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::invoke,
    pubkey::Pubkey,
};

use crate::instruction::RelayInstruction;

// program entrypoint's implementation
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = RelayInstruction::unpack(instruction_data)?;

    match instruction {
        RelayInstruction::Relay => {
            msg!("Instruction: Relay");
            process_relay(program_id, accounts)
        }
    }
}

/// Re-invoke the counter program named by the trailing account, passing the
/// counter account through with its incoming signer/writable flags. The
/// callee's success or failure is returned to our caller unmodified; this
/// program never touches account data itself.
pub fn process_relay(_program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();
    let counter_account = next_account_info(accounts_iter)?;
    let counter_program = next_account_info(accounts_iter)?;

    let instruction = Instruction {
        program_id: *counter_program.key,
        accounts: vec![AccountMeta {
            pubkey: *counter_account.key,
            is_signer: counter_account.is_signer,
            is_writable: counter_account.is_writable,
        }],
        data: vec![],
    };

    invoke(
        &instruction,
        &[counter_account.clone(), counter_program.clone()],
    )
}
