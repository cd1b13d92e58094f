//! Error types for run-time checked quantities.

use crate::{Dimension, Offset, Scale};

/// Result alias used by [`DynQuantity`](crate::DynQuantity).
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Reasons a run-time unit operation is rejected.
///
/// These mirror the checks [`Quantity`](crate::Quantity) performs at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The operands measure different physical dimensions.
    #[error("dimension mismatch: {left} is not {right}")]
    DimensionMismatch {
        /// Dimension of the left operand (or the source of a conversion).
        left: Dimension,
        /// Dimension of the right operand (or the destination of a conversion).
        right: Dimension,
    },

    /// The operands use affine units with different zero points.
    #[error("offset mismatch: {left} vs {right}; cast to a common unit first")]
    OffsetMismatch {
        /// Offset of the left operand.
        left: Offset,
        /// Offset of the right operand.
        right: Offset,
    },

    /// An implicit conversion of an integer value would not be exact.
    #[error(
        "conversion by a factor of {factor} with offset {offset} loses precision; use an explicit cast"
    )]
    PrecisionLoss {
        /// `source_scale / destination_scale`.
        factor: Scale,
        /// `source_offset - destination_offset`.
        offset: Offset,
    },

    /// Combining the units' exact scales or dimensions overflows their integer encoding.
    #[error("{op} overflows the exact unit arithmetic")]
    Overflow {
        /// The rejected operation.
        op: &'static str,
    },
}
