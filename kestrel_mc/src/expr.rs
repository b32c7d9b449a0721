//! Symbolic expressions attached to lowered instruction operands.

use crate::context::McSymbol;

/// Relocation variant on a symbol reference.
///
/// `Lo16`/`Ha16` select which halfword of the final address a reference
/// materializes. PIC-relative references carry no variant of their own;
/// the PIC-base subtraction is explicit in the expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    None,
    /// Low 16 bits of the address.
    Lo16,
    /// High 16 bits of the address, adjusted for carry out of the low half.
    Ha16,
}

/// Arena reference to an `McExpr` owned by an `McContext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McExprRef(pub u32);

/// A node in a symbolic operand expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McExpr {
    /// Reference to an interned symbol, optionally variant-tagged.
    SymbolRef {
        symbol: McSymbol,
        variant: VariantKind,
    },
    /// Integer constant (offset addend).
    Constant(i64),
    /// lhs + rhs
    Add(McExprRef, McExprRef),
    /// lhs - rhs
    Sub(McExprRef, McExprRef),
}
