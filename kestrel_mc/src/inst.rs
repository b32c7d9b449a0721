//! Generic lowered instruction form.

use crate::expr::McExprRef;

/// A lowered instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McOperand {
    /// Physical register id.
    Reg(u32),
    /// Immediate value.
    Imm(i64),
    /// Symbolic expression (symbols, offset addends, PIC arithmetic).
    Expr(McExprRef),
}

/// A lowered instruction: opcode plus ordered operands.
///
/// Operand count and order always match the machine instruction this was
/// lowered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McInst {
    opcode: u32,
    operands: Vec<McOperand>,
}

impl McInst {
    pub fn new(opcode: u32) -> Self {
        Self {
            opcode,
            operands: Vec::new(),
        }
    }

    pub fn opcode(&self) -> u32 {
        self.opcode
    }

    /// Append an operand.
    pub fn add_operand(&mut self, op: McOperand) {
        self.operands.push(op);
    }

    pub fn operands(&self) -> &[McOperand] {
        &self.operands
    }

    pub fn operand(&self, index: usize) -> &McOperand {
        &self.operands[index]
    }

    pub fn num_operands(&self) -> usize {
        self.operands.len()
    }
}
