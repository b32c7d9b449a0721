//! Machine functions and the labels they mint.

use kestrel_mc::context::{McContext, McSymbol};

use crate::instr::MachineInstr;

/// Reference to a basic block within its function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef(pub u32);

/// A machine basic block.
#[derive(Debug, Default)]
pub struct MachineBasicBlock {
    pub instrs: Vec<MachineInstr>,
}

/// A register-allocated machine function.
///
/// The function number keys every label this function mints: block labels,
/// jump-table and constant-pool labels, and the PIC base. Numbers must be
/// unique per compilation unit or labels collide.
#[derive(Debug)]
pub struct MachineFunction {
    pub name: String,
    number: u32,
    pub blocks: Vec<MachineBasicBlock>,
}

impl MachineFunction {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number,
            blocks: Vec::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Append an empty block, returning its reference.
    pub fn add_block(&mut self) -> BlockRef {
        let r = BlockRef(self.blocks.len() as u32);
        self.blocks.push(MachineBasicBlock::default());
        r
    }

    /// Label symbol for a basic block: `<priv>BB<fn>_<block>`.
    pub fn block_symbol(&self, ctx: &mut McContext, block: BlockRef) -> McSymbol {
        assert!(
            (block.0 as usize) < self.blocks.len(),
            "block {} out of range in function {}",
            block.0,
            self.name
        );
        let p = ctx.asm_info().private_global_prefix;
        ctx.get_or_create_symbol(&format!("{p}BB{}_{}", self.number, block.0))
    }

    /// Label symbol for a jump table: `<priv>JTI<fn>_<index>`.
    pub fn jump_table_symbol(&self, ctx: &mut McContext, index: u32) -> McSymbol {
        let p = ctx.asm_info().private_global_prefix;
        ctx.get_or_create_symbol(&format!("{p}JTI{}_{}", self.number, index))
    }

    /// Label symbol for a constant pool entry: `<priv>CPI<fn>_<index>`.
    pub fn constant_pool_symbol(&self, ctx: &mut McContext, index: u32) -> McSymbol {
        let p = ctx.asm_info().private_global_prefix;
        ctx.get_or_create_symbol(&format!("{p}CPI{}_{}", self.number, index))
    }

    /// The function's PIC base label: `<priv><fn>$pb`.
    ///
    /// Bound by the prologue; PIC-relative operands lower to
    /// `(symbol + offset) - picbase` against it.
    pub fn pic_base_symbol(&self, ctx: &mut McContext) -> McSymbol {
        let p = ctx.asm_info().private_global_prefix;
        ctx.get_or_create_symbol(&format!("{p}{}$pb", self.number))
    }
}
