//! kestrel_mc: Generic lowered-instruction representation for kestrel backends.
//!
//! The MC layer is what the encoder and the assembly printer consume: an
//! opcode, registers, immediates, and symbolic expressions over interned
//! symbols. It knows nothing about any particular target beyond the
//! dialect facts in `McAsmInfo`.

pub mod context;
pub mod display;
pub mod expr;
pub mod inst;
