//! Linker-visible name mangling.

use kestrel_mc::context::McAsmInfo;

use crate::module::GlobalValue;

/// Produces canonical linker-visible names for global definitions.
///
/// An implicitly-private reference (a lazy stub on linkers that demand it)
/// gets the private-label prefix in front of the usual global prefix,
/// keeping the minted symbol out of the object's symbol table.
#[derive(Debug, Default)]
pub struct Mangler;

impl Mangler {
    pub fn new() -> Self {
        Self
    }

    /// Mangle `gv` into its canonical name.
    pub fn mangled_name(
        &self,
        ai: &McAsmInfo,
        gv: &GlobalValue,
        implicitly_private: bool,
    ) -> String {
        let mut name = String::new();
        if implicitly_private {
            name.push_str(ai.private_global_prefix);
        }
        name.push_str(ai.global_prefix);
        name.push_str(&gv.name);
        name
    }
}
