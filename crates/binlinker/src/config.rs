//! Validation settings for opening containers

/// How much checking [`BinLinkerAccessor::open_with`] performs
///
/// [`BinLinkerAccessor::open_with`]: crate::BinLinkerAccessor::open_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationLevel {
    /// Trust the buffer; only debug builds assert on the header
    Trusted,
    /// Check size, identifier and that the offset table fits in the buffer
    Header,
    /// Header checks plus a walk over every offset in the table
    #[default]
    Full,
}

impl ValidationLevel {
    /// Whether the header is checked at all
    pub fn checks_header(self) -> bool {
        !matches!(self, Self::Trusted)
    }

    /// Whether every offset in the table is checked
    pub fn checks_offsets(self) -> bool {
        matches!(self, Self::Full)
    }
}
