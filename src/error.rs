use thiserror::Error;

/// Errors reported by the checked view operations
///
/// The unchecked operations treat these conditions as contract violations;
/// only the `try_*` variants inspect the bounds and report them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// A count or bound reaches past the end of the view
    #[error("requested {requested} elements but only {available} are available")]
    OutOfRange {
        /// Elements the caller asked for
        requested: usize,
        /// Elements the view actually holds
        available: usize,
    },

    /// A slice whose start lies after its end
    #[error("invalid range {from}..{to}")]
    InvalidRange { from: usize, to: usize },
}

impl ViewError {
    /// Checks that `requested` elements fit in a view of `available`
    pub(crate) fn check_available(requested: usize, available: usize) -> Result<(), ViewError> {
        if requested > available {
            let error = ViewError::OutOfRange {
                requested,
                available,
            };
            tracing::debug!(%error, "rejected out of range request");
            return Err(error);
        }
        Ok(())
    }

    pub(crate) fn check_range(from: usize, to: usize) -> Result<(), ViewError> {
        if from > to {
            let error = ViewError::InvalidRange { from, to };
            tracing::debug!(%error, "rejected inverted range");
            return Err(error);
        }
        Ok(())
    }
}
