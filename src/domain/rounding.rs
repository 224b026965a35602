//! Explicit rounding direction for integer arithmetic.

/// Direction of precision loss in a division.
///
/// Quotes and derived bounds both round [`Down`](Self::Down): a minimum
/// output never promises more than the TWAP, and a maximum input is the
/// floor of the buffered estimate. The simulated engine rounds required
/// inputs [`Up`](Self::Up) so fills never undercharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}
