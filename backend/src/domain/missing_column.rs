//! Required columns left unset by a create request.

/// A required column had no submitted value.
///
/// The message matches the PostgreSQL NOT NULL violation, so in-memory and
/// database-backed stores report the same text.
///
/// # Examples
/// ```
/// use backend::domain::MissingColumn;
///
/// let err = MissingColumn::new("recipes", "calories");
/// assert_eq!(
///     err.to_string(),
///     "null value in column \"calories\" of relation \"recipes\" violates not-null constraint"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("null value in column \"{column}\" of relation \"{table}\" violates not-null constraint")]
pub struct MissingColumn {
    table: &'static str,
    column: &'static str,
}

impl MissingColumn {
    #[must_use]
    pub const fn new(table: &'static str, column: &'static str) -> Self {
        Self { table, column }
    }

    /// Name of the unset column.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }
}

/// Unwrap a required value or report its column.
pub(crate) fn required<T>(
    value: Option<T>,
    table: &'static str,
    column: &'static str,
) -> Result<T, MissingColumn> {
    value.ok_or(MissingColumn::new(table, column))
}
