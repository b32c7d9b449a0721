//! kestrel_machine: Register-allocated machine IR consumed by MC lowering.
//!
//! Everything here sits between register allocation and the MC layer:
//! machine operands with their relocation flags, the functions and module
//! that own label minting, the name mangler, and the write-once lazy-stub
//! table that the end-of-unit emitter drains.

pub mod function;
pub mod instr;
pub mod mangler;
pub mod module;
pub mod module_info;
pub mod operand;
