// 🔁 Bank Operation - the fixed run sequence
//
// 1. SystemInfo report -> out
// 2. Bank: set customer id + account number
// 3. ATM: withdraw, deposit
// 4. PoS: swipe card, pin, bill
//
// Strictly linear. The first failure stops the sequence and is returned
// to the caller, which owns the one top-level handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::ProgramConfig;
use crate::entities::{Atm, Bank, CashMachine, PointOfSale, Pos};
use crate::system_info::{InterfaceSource, SystemInfo};

/// Run all four steps, returning the populated Bank record
pub fn run<S, W>(config: &ProgramConfig, info: &SystemInfo<S>, out: &mut W) -> Result<Bank>
where
    S: InterfaceSource,
    W: Write,
{
    tracing::debug!(registration_number = %config.registration_number, "step 1: system info");
    info.write_details(&config.registration_number, out)
        .context("Failed to print system details")?;

    tracing::debug!("step 2: bank");
    let mut bank = Bank::new();
    bank.set_customer_id(config.customer_id.as_str());
    bank.set_account_number(config.account_number);

    tracing::debug!("step 3: atm");
    let atm = Atm::new();
    atm.withdraw();
    atm.deposit();

    tracing::debug!("step 4: pos");
    let pos = Pos::new();
    pos.swipe_card();
    pos.pin();
    pos.bill();

    Ok(bank)
}

/// Top-level handler: report a failed run on `err_out` and pick the exit status
pub fn exit_code<E: Write>(outcome: Result<()>, err_out: &mut E) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to fall back to if stderr itself is gone
            let _ = writeln!(err_out, "Error: {:?}", err);
            1
        }
    }
}
