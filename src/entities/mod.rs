// Entity Models
//
// - Bank: data holder (customer id, account number)
// - Atm / Pos: stateless placeholders behind CashMachine / PointOfSale

pub mod atm;
pub mod bank;
pub mod pos;

pub use atm::{Atm, CashMachine};
pub use bank::Bank;
pub use pos::{PointOfSale, Pos};
