//! kestrel_target_ppc: PPC machine-instruction lowering to generic MC form.

pub mod lower;
pub mod opcodes;
pub mod reg;
