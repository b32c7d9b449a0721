//! PPC opcode numbers shared by the machine and MC instruction forms.
//!
//! Lowering copies the opcode through unchanged; this enum only exists so
//! pipeline stages and tests agree on the numbering.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Opcode {
    /// addi rD, rA, simm
    Addi,
    /// addis rD, rA, simm
    Addis,
    /// ori rD, rA, uimm
    Ori,
    /// lwz rD, d(rA)
    Lwz,
    /// stw rS, d(rA)
    Stw,
    /// b target
    B,
    /// bl target
    Bl,
    /// bcl 20, 31, target (PIC-base materialization idiom)
    Bcl,
    /// mflr rD
    Mflr,
    /// blr
    Blr,
}

impl Opcode {
    pub fn code(self) -> u32 {
        self as u32
    }
}
