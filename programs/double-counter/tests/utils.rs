#![allow(dead_code)]

use borsh::BorshDeserialize;
use double_counter::state::Counter;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_pubkey::Pubkey;
use solana_sdk::{account::Account, signature::Keypair};
use solana_signer::Signer;
use solana_system_interface::instruction::create_account;
use solana_transaction::Transaction;

pub const PROGRAM: Pubkey = Pubkey::new_from_array([7u8; 32]);

pub fn counter_program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "double_counter",
        PROGRAM,
        processor!(double_counter::processor::process_instruction),
    );
    program_test.prefer_bpf(false);
    program_test
}

/// Create a zero-filled 4-byte counter account owned by the program, funded
/// by the context payer.
pub async fn create_counter_account(context: &mut ProgramTestContext) -> Pubkey {
    let counter = Keypair::new();
    let rent = context.banks_client.get_rent().await.unwrap();
    let ix = create_account(
        &context.payer.pubkey(),
        &counter.pubkey(),
        rent.minimum_balance(Counter::SIZE),
        Counter::SIZE as u64,
        &PROGRAM,
    );
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &[&context.payer, &counter],
        context.last_blockhash,
    );
    context.banks_client.process_transaction(tx).await.unwrap();
    counter.pubkey()
}

/// Submit a single `Double` invocation under a fresh blockhash so repeated
/// identical submissions are not rejected as duplicates.
pub async fn submit_double(
    context: &mut ProgramTestContext,
    counter: &Pubkey,
) -> Result<(), BanksClientError> {
    let ix = double_counter::instruction::double(&PROGRAM, counter);
    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        blockhash,
    );
    context.banks_client.process_transaction(tx).await
}

pub async fn read_counter(context: &mut ProgramTestContext, counter: Pubkey) -> u32 {
    let account = context
        .banks_client
        .get_account(counter)
        .await
        .unwrap()
        .expect("counter account must exist");
    assert_eq!(account.data.len(), Counter::SIZE);
    Counter::try_from_slice(&account.data).unwrap().count
}

/// A counter account seeded with an arbitrary starting value.
pub fn counter_account_with_count(count: u32) -> Account {
    Account {
        lamports: 1_000_000,
        data: count.to_le_bytes().to_vec(),
        owner: PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}
