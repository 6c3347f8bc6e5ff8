// 🏧 ATM - cash machine extension point
//
// Withdraw and deposit are not implemented yet. The trait is the contract
// future cash handling plugs into; `Atm` fulfills it with no-ops.

/// Operations a cash machine offers
pub trait CashMachine {
    /// Hand out cash. Currently a no-op: no output, no state change, no error.
    fn withdraw(&self);

    /// Take in cash. Currently a no-op: no output, no state change, no error.
    fn deposit(&self);
}

/// Stateless ATM placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atm;

impl Atm {
    pub fn new() -> Self {
        Atm
    }
}

impl CashMachine for Atm {
    fn withdraw(&self) {}

    fn deposit(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_operations_are_noops() {
        let atm = Atm::new();

        atm.withdraw();
        atm.deposit();
        atm.withdraw();

        assert_eq!(atm, Atm::default());
    }

    #[test]
    fn test_atm_usable_as_trait_object() {
        let machines: Vec<Box<dyn CashMachine>> = vec![Box::new(Atm), Box::new(Atm::new())];

        for machine in &machines {
            machine.withdraw();
            machine.deposit();
        }
    }
}
