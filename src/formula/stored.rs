use crate::structures::literal::CLiteral;

/// A clause as stored in the arena of a [formula](crate::formula::Formula).
///
/// The literals of the clause are split in two:
/// - A prefix of *remaining* literals, i.e. those not (yet) dropped.
/// - A suffix of dropped literals.
///
/// Dropping a literal swaps the literal with the last remaining literal and shortens the prefix by one.
/// And, as the swap is recorded on the trail, undoing the drop restores the original order.
#[derive(Clone, Debug)]
pub struct StoredClause {
    literals: Vec<CLiteral>,
    length: usize,
    active: bool,
}

impl StoredClause {
    pub(super) fn new(literals: Vec<CLiteral>) -> Self {
        StoredClause {
            length: literals.len(),
            literals,
            active: true,
        }
    }

    /// The remaining literals of the clause.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals[..self.length]
    }

    /// Every literal of the clause, as given when the clause was stored, though not necessarily in the same order.
    pub fn original_literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// A count of the remaining literals of the clause.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether every literal of the clause has been dropped.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether the clause is active, i.e. not known to be satisfied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Swaps the literal at `position` with the last remaining literal, and shortens the remaining literals by one.
    pub(super) fn drop_at(&mut self, position: usize) {
        self.literals.swap(position, self.length - 1);
        self.length -= 1;
    }

    /// The inverse of [drop_at](StoredClause::drop_at).
    pub(super) fn restore_at(&mut self, position: usize) {
        self.length += 1;
        self.literals.swap(position, self.length - 1);
    }
}
