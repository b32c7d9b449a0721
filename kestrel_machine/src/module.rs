//! Module-level containers: global definitions and block-address labels.

use kestrel_mc::context::{McContext, McSymbol};

/// Symbol visibility of a global definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Visible to other compilation units.
    External,
    /// Restricted to the defining compilation unit.
    Internal,
}

/// Reference to a global definition owned by a `MachineModule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalId(pub u32);

/// A named global definition (function or data).
#[derive(Debug, Clone)]
pub struct GlobalValue {
    pub name: String,
    pub linkage: Linkage,
}

impl GlobalValue {
    pub fn has_internal_linkage(&self) -> bool {
        self.linkage == Linkage::Internal
    }
}

/// Module-level machine state addressed by operands.
#[derive(Debug, Default)]
pub struct MachineModule {
    globals: Vec<GlobalValue>,
}

impl MachineModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global definition.
    pub fn add_global(&mut self, name: impl Into<String>, linkage: Linkage) -> GlobalId {
        let id = GlobalId(self.globals.len() as u32);
        self.globals.push(GlobalValue {
            name: name.into(),
            linkage,
        });
        id
    }

    pub fn global(&self, id: GlobalId) -> &GlobalValue {
        &self.globals[id.0 as usize]
    }

    /// Label symbol for an address-taken block: `<priv>tmp<index>`.
    ///
    /// Block-address indices are assigned module-wide by the stage that
    /// takes the addresses, so the label needs no function number.
    pub fn block_address_symbol(&self, ctx: &mut McContext, index: u32) -> McSymbol {
        let p = ctx.asm_info().private_global_prefix;
        ctx.get_or_create_symbol(&format!("{p}tmp{index}"))
    }
}
