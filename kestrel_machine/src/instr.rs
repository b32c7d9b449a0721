//! Machine instruction container.

use crate::operand::MachineOperand;

/// A register-allocated machine instruction: opcode plus ordered operands.
///
/// Opcodes are target-assigned numbers; this layer never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineInstr {
    pub opcode: u32,
    pub operands: Vec<MachineOperand>,
}

impl MachineInstr {
    pub fn new(opcode: u32) -> Self {
        Self {
            opcode,
            operands: Vec::new(),
        }
    }

    /// Append an operand, builder-style.
    pub fn with_operand(mut self, op: MachineOperand) -> Self {
        self.operands.push(op);
        self
    }
}
