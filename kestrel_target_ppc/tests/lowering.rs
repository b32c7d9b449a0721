//! End-to-end lowering test: Darwin-dialect PIC code and lazy stubs,
//! checked through the text renderer.

use kestrel_machine::function::MachineFunction;
use kestrel_machine::instr::MachineInstr;
use kestrel_machine::mangler::Mangler;
use kestrel_machine::module::{Linkage, MachineModule};
use kestrel_machine::module_info::MachineModuleInfo;
use kestrel_machine::operand::{MachineOperand, RelocFlag};
use kestrel_mc::context::{McAsmInfo, McContext};
use kestrel_mc::display::inst_to_string;
use kestrel_target_ppc::lower::PpcInstLowering;
use kestrel_target_ppc::opcodes::Opcode;
use kestrel_target_ppc::reg::Gpr;

#[test]
fn pic_load_of_a_global() {
    let mut ctx = McContext::new(McAsmInfo::darwin());
    let mut module = MachineModule::new();
    let mut module_info = MachineModuleInfo::new();
    let mangler = Mangler::new();
    let foo = module.add_global("foo", Linkage::External);
    let mut func = MachineFunction::new("f", 0);
    let entry = func.add_block();

    // bcl 20, 31, LBB0_0   (materialize the PIC base in lr)
    // mflr r30
    // addis r3, r30, ha16(_foo + 4 - L0$pb)
    // lwz r3, lo16(_foo + 4 - L0$pb)(r3)
    let bcl = MachineInstr::new(Opcode::Bcl.code()).with_operand(MachineOperand::Block(entry));
    let mflr =
        MachineInstr::new(Opcode::Mflr.code()).with_operand(MachineOperand::reg(Gpr::R30.id()));
    let addis = MachineInstr::new(Opcode::Addis.code())
        .with_operand(MachineOperand::reg(Gpr::R3.id()))
        .with_operand(MachineOperand::reg(Gpr::R30.id()))
        .with_operand(MachineOperand::Global {
            global: foo,
            offset: 4,
            flags: RelocFlag::Ha16Pic,
        });
    let lwz = MachineInstr::new(Opcode::Lwz.code())
        .with_operand(MachineOperand::reg(Gpr::R3.id()))
        .with_operand(MachineOperand::Global {
            global: foo,
            offset: 4,
            flags: RelocFlag::Lo16Pic,
        })
        .with_operand(MachineOperand::reg(Gpr::R3.id()));

    let mut lowering =
        PpcInstLowering::new(&mut ctx, &module, &mut module_info, &mangler, &func);
    let out: Vec<_> = [&bcl, &mflr, &addis, &lwz]
        .into_iter()
        .map(|mi| lowering.lower(mi))
        .collect();

    let bcl_code = Opcode::Bcl.code();
    let mflr_code = Opcode::Mflr.code();
    let addis_code = Opcode::Addis.code();
    let lwz_code = Opcode::Lwz.code();
    assert_eq!(
        inst_to_string(&ctx, &out[0]),
        format!("op<{bcl_code}> LBB0_0")
    );
    assert_eq!(
        inst_to_string(&ctx, &out[1]),
        format!("op<{mflr_code}> reg30")
    );
    assert_eq!(
        inst_to_string(&ctx, &out[2]),
        format!("op<{addis_code}> reg3, reg30, (ha16(_foo) + 4) - L0$pb")
    );
    assert_eq!(
        inst_to_string(&ctx, &out[3]),
        format!("op<{lwz_code}> reg3, (lo16(_foo) + 4) - L0$pb, reg3")
    );

    // No stubs involved in PIC data access.
    assert_eq!(module_info.num_fn_stubs(), 0);
}

#[test]
fn lazy_calls_fill_the_stub_table_once() {
    let mut ctx = McContext::new(McAsmInfo::darwin());
    let mut module = MachineModule::new();
    let mut module_info = MachineModuleInfo::new();
    let mangler = Mangler::new();
    let helper = module.add_global("helper", Linkage::Internal);
    let func = MachineFunction::new("f", 0);

    let call_printf =
        MachineInstr::new(Opcode::Bl.code()).with_operand(MachineOperand::ExternalSymbol {
            name: "printf".to_string(),
            offset: 0,
            flags: RelocFlag::LazyStub,
        });
    let call_helper =
        MachineInstr::new(Opcode::Bl.code()).with_operand(MachineOperand::Global {
            global: helper,
            offset: 0,
            flags: RelocFlag::LazyStub,
        });

    let mut lowering =
        PpcInstLowering::new(&mut ctx, &module, &mut module_info, &mangler, &func);
    let first = lowering.lower(&call_printf);
    let again = lowering.lower(&call_printf);
    let third = lowering.lower(&call_helper);

    // Re-lowering allocates a fresh expression node but resolves to the
    // same stub symbol.
    assert_eq!(inst_to_string(&ctx, &first), inst_to_string(&ctx, &again));
    assert_eq!(
        inst_to_string(&ctx, &first),
        format!("op<{}> _printf$stub", Opcode::Bl.code())
    );
    // Lazy stubs for globals are implicitly private on Darwin.
    assert_eq!(
        inst_to_string(&ctx, &third),
        format!("op<{}> L_helper$stub", Opcode::Bl.code())
    );

    assert_eq!(module_info.num_fn_stubs(), 2);
    let entries: Vec<_> = module_info
        .fn_stubs()
        .map(|(stub, v)| {
            (
                ctx.symbol_name(stub).to_string(),
                ctx.symbol_name(v.target).to_string(),
                v.external,
            )
        })
        .collect();
    assert_eq!(
        entries,
        vec![
            ("_printf$stub".to_string(), "_printf".to_string(), false),
            ("L_helper$stub".to_string(), "_helper".to_string(), false),
        ]
    );
}

#[test]
fn absolute_halfword_materialization() {
    let mut ctx = McContext::new(McAsmInfo::darwin());
    let mut module = MachineModule::new();
    let mut module_info = MachineModuleInfo::new();
    let mangler = Mangler::new();
    let table = module.add_global("table", Linkage::External);
    let func = MachineFunction::new("f", 1);

    // lis r4, ha16(_table); ori r4, r4, lo16(_table)
    let lis = MachineInstr::new(Opcode::Addis.code())
        .with_operand(MachineOperand::reg(Gpr::R4.id()))
        .with_operand(MachineOperand::reg(Gpr::R0.id()))
        .with_operand(MachineOperand::Global {
            global: table,
            offset: 0,
            flags: RelocFlag::Ha16,
        });
    let ori = MachineInstr::new(Opcode::Ori.code())
        .with_operand(MachineOperand::reg(Gpr::R4.id()))
        .with_operand(MachineOperand::reg(Gpr::R4.id()))
        .with_operand(MachineOperand::Global {
            global: table,
            offset: 0,
            flags: RelocFlag::Lo16,
        });

    let mut lowering =
        PpcInstLowering::new(&mut ctx, &module, &mut module_info, &mangler, &func);
    let lis_out = lowering.lower(&lis);
    let ori_out = lowering.lower(&ori);

    assert_eq!(
        inst_to_string(&ctx, &lis_out),
        format!("op<{}> reg4, reg0, ha16(_table)", Opcode::Addis.code())
    );
    assert_eq!(
        inst_to_string(&ctx, &ori_out),
        format!("op<{}> reg4, reg4, lo16(_table)", Opcode::Ori.code())
    );
    // No addend, no PIC arithmetic, no stub traffic.
    assert_eq!(module_info.num_fn_stubs(), 0);
}
