// 🧾 PoS - point-of-sale terminal extension point
//
// Card swipe, PIN entry and billing are placeholders. Each is callable,
// does nothing and cannot fail.

/// Steps of a card payment at a terminal
pub trait PointOfSale {
    /// Read the card. Intentionally unimplemented (no-op).
    fn swipe_card(&self);

    /// Collect the PIN. Intentionally unimplemented (no-op).
    fn pin(&self);

    /// Produce the bill. Intentionally unimplemented (no-op).
    fn bill(&self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pos;

impl Pos {
    pub fn new() -> Self {
        Pos
    }
}

impl PointOfSale for Pos {
    fn swipe_card(&self) {}

    fn pin(&self) {}

    fn bill(&self) {}
}
