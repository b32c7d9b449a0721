//! Lower register-allocated PPC machine instructions to generic MC form.
//!
//! This is the last target-specific stage before encoding or printing.
//! Register and immediate operands pass through; symbol operands get their
//! canonical linker-visible names, lazy-binding `$stub` indirection,
//! lo16/ha16 relocation variants, and PIC-base subtraction.

use kestrel_machine::function::MachineFunction;
use kestrel_machine::instr::MachineInstr;
use kestrel_machine::mangler::Mangler;
use kestrel_machine::module::MachineModule;
use kestrel_machine::module_info::{MachineModuleInfo, StubValue};
use kestrel_machine::operand::{MachineOperand, RelocFlag};
use kestrel_mc::context::{McContext, McSymbol};
use kestrel_mc::expr::VariantKind;
use kestrel_mc::inst::{McInst, McOperand};

/// Suffix on lazy-binding indirection symbols.
const STUB_SUFFIX: &str = "$stub";

/// Per-function lowering state.
///
/// Holds mutable borrows of the unit-wide context and stub table, so the
/// borrow checker serializes all symbol and stub access per compilation
/// unit.
pub struct PpcInstLowering<'a> {
    ctx: &'a mut McContext,
    module: &'a MachineModule,
    module_info: &'a mut MachineModuleInfo,
    mangler: &'a Mangler,
    func: &'a MachineFunction,
}

impl<'a> PpcInstLowering<'a> {
    pub fn new(
        ctx: &'a mut McContext,
        module: &'a MachineModule,
        module_info: &'a mut MachineModuleInfo,
        mangler: &'a Mangler,
        func: &'a MachineFunction,
    ) -> Self {
        Self {
            ctx,
            module,
            module_info,
            mangler,
            func,
        }
    }

    /// Lower one machine instruction. The output opcode and operand count
    /// and order match the input exactly.
    ///
    /// Panics on operands that must not reach this stage: sub-register
    /// selectors, frame indices, and register masks are upstream contract
    /// violations with no recoverable meaning.
    pub fn lower(&mut self, mi: &MachineInstr) -> McInst {
        let mut out = McInst::new(mi.opcode);
        for mo in &mi.operands {
            let op = match mo {
                MachineOperand::Register { reg, subreg } => {
                    assert!(
                        *subreg == 0,
                        "subregs should be eliminated before MC lowering: {mi:?}"
                    );
                    McOperand::Reg(*reg)
                }
                MachineOperand::Immediate(value) => McOperand::Imm(*value),
                MachineOperand::Block(block) => {
                    let sym = self.func.block_symbol(self.ctx, *block);
                    McOperand::Expr(self.ctx.symbol_ref(sym, VariantKind::None))
                }
                MachineOperand::Global { .. } | MachineOperand::ExternalSymbol { .. } => {
                    let sym = self.operand_symbol(mo);
                    self.symbol_ref_operand(mo, sym)
                }
                MachineOperand::JumpTable { index, .. } => {
                    let sym = self.func.jump_table_symbol(self.ctx, *index);
                    self.symbol_ref_operand(mo, sym)
                }
                MachineOperand::ConstantPool { index, .. } => {
                    let sym = self.func.constant_pool_symbol(self.ctx, *index);
                    self.symbol_ref_operand(mo, sym)
                }
                MachineOperand::BlockAddress { index, .. } => {
                    let sym = self.module.block_address_symbol(self.ctx, *index);
                    self.symbol_ref_operand(mo, sym)
                }
                MachineOperand::FrameIndex(_) | MachineOperand::RegMask => {
                    panic!("cannot lower operand {mo:?} in {mi:?}")
                }
            };
            out.add_operand(op);
        }
        out
    }

    /// Resolve a global or external-symbol operand to its MC symbol,
    /// synthesizing the `$stub` indirection entry for lazy binding.
    fn operand_symbol(&mut self, mo: &MachineOperand) -> McSymbol {
        let ai = self.ctx.asm_info();
        let (name, global, flags) = match mo {
            MachineOperand::ExternalSymbol { name, flags, .. } => {
                (format!("{}{}", ai.global_prefix, name), None, *flags)
            }
            MachineOperand::Global { global, flags, .. } => {
                let gv = self.module.global(*global);
                // Stub symbols stay out of the symbol table on linkers that
                // bind them lazily.
                let implicitly_private =
                    *flags == RelocFlag::LazyStub && ai.linker_private_stubs;
                (
                    self.mangler.mangled_name(&ai, gv, implicitly_private),
                    Some(gv),
                    *flags,
                )
            }
            other => panic!("operand is not a symbol reference: {other:?}"),
        };

        match flags {
            RelocFlag::LazyStub => {
                let stub = self
                    .ctx
                    .get_or_create_symbol(&format!("{name}{STUB_SUFFIX}"));
                if self.module_info.fn_stub(stub).is_some() {
                    return stub;
                }
                let value = match global {
                    Some(gv) => StubValue {
                        target: self
                            .ctx
                            .get_or_create_symbol(&self.mangler.mangled_name(&ai, gv, false)),
                        external: !gv.has_internal_linkage(),
                    },
                    // For an external symbol, stripping the suffix back off
                    // yields the plain prefixed name.
                    None => StubValue {
                        target: self.ctx.get_or_create_symbol(&name),
                        external: false,
                    },
                };
                self.module_info.set_fn_stub(stub, value);
                stub
            }
            RelocFlag::None
            | RelocFlag::Lo16
            | RelocFlag::Ha16
            | RelocFlag::Lo16Pic
            | RelocFlag::Ha16Pic => self.ctx.get_or_create_symbol(&name),
        }
    }

    /// Wrap a resolved symbol in its relocation expression: variant tag,
    /// then offset addend, then PIC-base subtraction, strictly in that
    /// order.
    fn symbol_ref_operand(&mut self, mo: &MachineOperand, symbol: McSymbol) -> McOperand {
        let (offset, flags) = match mo {
            MachineOperand::Global { offset, flags, .. }
            | MachineOperand::ExternalSymbol { offset, flags, .. }
            | MachineOperand::ConstantPool { offset, flags, .. }
            | MachineOperand::BlockAddress { offset, flags, .. } => (*offset, *flags),
            // Jump tables never take an addend.
            MachineOperand::JumpTable { flags, .. } => (0, *flags),
            other => panic!("operand is not a symbol reference: {other:?}"),
        };

        let variant = match flags {
            RelocFlag::None | RelocFlag::LazyStub => VariantKind::None,
            RelocFlag::Lo16 | RelocFlag::Lo16Pic => VariantKind::Lo16,
            RelocFlag::Ha16 | RelocFlag::Ha16Pic => VariantKind::Ha16,
        };
        let mut expr = self.ctx.symbol_ref(symbol, variant);

        if offset != 0 {
            let addend = self.ctx.constant(offset);
            expr = self.ctx.add(expr, addend);
        }

        if flags.is_pic() {
            let pic_base = self.func.pic_base_symbol(self.ctx);
            let base_ref = self.ctx.symbol_ref(pic_base, VariantKind::None);
            expr = self.ctx.sub(expr, base_ref);
        }

        McOperand::Expr(expr)
    }
}
