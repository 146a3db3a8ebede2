/// Actions an observer can take while the Catalan series accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop summing and derive the roots from the current partial sum.
    StopEarly,
}
