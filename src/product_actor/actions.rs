/// Custom actions for Product entities.
///
/// These run inside the store actor, so each one reads and writes the
/// record without any other request in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductAction {
    /// Takes one unit out of stock.
    ///
    /// # Errors
    /// Rejected with [`ProductRejection::OutOfStock`] when no units remain.
    Purchase,
}

/// Why a [`ProductAction`] was refused. The stored record is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductRejection {
    OutOfStock,
}
