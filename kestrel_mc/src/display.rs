//! Text rendering for lowered instructions and expressions.
//!
//! Output format:
//! ```text
//! op<42> reg3, reg30, (ha16(_foo) + 4) - L0$pb
//! ```
//!
//! Meant for diagnostics and tests; the real assembly printer lives
//! downstream of this crate.

use crate::context::McContext;
use crate::expr::{McExpr, McExprRef, VariantKind};
use crate::inst::{McInst, McOperand};

/// Render an expression tree. Binary children are parenthesized, the root
/// is not.
pub fn expr_to_string(ctx: &McContext, expr: McExprRef) -> String {
    match *ctx.expr(expr) {
        McExpr::SymbolRef { symbol, variant } => {
            let name = ctx.symbol_name(symbol);
            match variant {
                VariantKind::None => name.to_string(),
                VariantKind::Lo16 => format!("lo16({name})"),
                VariantKind::Ha16 => format!("ha16({name})"),
            }
        }
        McExpr::Constant(v) => v.to_string(),
        McExpr::Add(l, r) => format!("{} + {}", fmt_child(ctx, l), fmt_child(ctx, r)),
        McExpr::Sub(l, r) => format!("{} - {}", fmt_child(ctx, l), fmt_child(ctx, r)),
    }
}

fn fmt_child(ctx: &McContext, expr: McExprRef) -> String {
    let s = expr_to_string(ctx, expr);
    match ctx.expr(expr) {
        McExpr::Add(..) | McExpr::Sub(..) => format!("({s})"),
        _ => s,
    }
}

/// Render a single operand.
pub fn operand_to_string(ctx: &McContext, op: &McOperand) -> String {
    match *op {
        McOperand::Reg(r) => format!("reg{r}"),
        McOperand::Imm(v) => v.to_string(),
        McOperand::Expr(e) => expr_to_string(ctx, e),
    }
}

/// Render an instruction as `op<opcode> operand, operand, ...`.
pub fn inst_to_string(ctx: &McContext, inst: &McInst) -> String {
    let ops = inst
        .operands()
        .iter()
        .map(|op| operand_to_string(ctx, op))
        .collect::<Vec<_>>()
        .join(", ");
    if ops.is_empty() {
        format!("op<{}>", inst.opcode())
    } else {
        format!("op<{}> {}", inst.opcode(), ops)
    }
}
