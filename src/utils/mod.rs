/// Selects whether an operation runs over the rows or the columns of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ROW,
    COLUMN,
}
