//! Machine operands and target relocation flags.

use crate::function::BlockRef;
use crate::module::GlobalId;

/// Relocation/ABI flag on a symbol operand. Exactly one applies per operand.
///
/// The enum is closed: adding a variant forces every match in the lowering
/// path to be updated before the crate compiles again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocFlag {
    /// Direct reference, no relocation variant.
    None,
    /// Reference through a lazily-bound `$stub` indirection symbol.
    LazyStub,
    /// Low 16 bits of the address.
    Lo16,
    /// High 16 bits of the address, carry-adjusted.
    Ha16,
    /// Low 16 bits, relative to the function's PIC base.
    Lo16Pic,
    /// High 16 bits, carry-adjusted, relative to the function's PIC base.
    Ha16Pic,
}

impl RelocFlag {
    /// Whether this flag requires subtracting the PIC base.
    pub fn is_pic(self) -> bool {
        matches!(self, RelocFlag::Lo16Pic | RelocFlag::Ha16Pic)
    }
}

/// An operand of a register-allocated machine instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineOperand {
    /// Physical register. `subreg` must be zero by the time lowering runs;
    /// sub-register elimination is owed by earlier pipeline stages.
    Register { reg: u32, subreg: u32 },
    /// Immediate value.
    Immediate(i64),
    /// Branch target block within the enclosing function.
    Block(BlockRef),
    /// Address of a global definition.
    Global {
        global: GlobalId,
        offset: i64,
        flags: RelocFlag,
    },
    /// Named symbol defined outside the module.
    ExternalSymbol {
        name: String,
        offset: i64,
        flags: RelocFlag,
    },
    /// Jump table index. The offset field is carried for operand-shape
    /// uniformity but never reaches the lowered expression.
    JumpTable {
        index: u32,
        offset: i64,
        flags: RelocFlag,
    },
    /// Constant pool index.
    ConstantPool {
        index: u32,
        offset: i64,
        flags: RelocFlag,
    },
    /// Address-taken basic block (module-level label index).
    BlockAddress {
        index: u32,
        offset: i64,
        flags: RelocFlag,
    },
    /// Abstract stack slot. Eliminated by frame lowering; must not reach
    /// MC lowering.
    FrameIndex(i32),
    /// Call-clobber bookkeeping. Must not reach MC lowering.
    RegMask,
}

impl MachineOperand {
    /// Register operand with no sub-register selector.
    pub fn reg(reg: u32) -> Self {
        MachineOperand::Register { reg, subreg: 0 }
    }
}
