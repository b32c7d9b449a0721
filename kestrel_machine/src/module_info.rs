//! Per-compilation-unit lowering byproducts: the lazy-stub table.

use std::collections::HashMap;

use kestrel_mc::context::McSymbol;

/// Target of a stub symbol: the real symbol the loader binds, and whether
/// that symbol must be resolvable outside the compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubValue {
    pub target: McSymbol,
    pub external: bool,
}

/// Write-once table of `$stub` indirection entries.
///
/// Populated during instruction lowering, drained when the stub section is
/// emitted at the end of the unit. Each key is written at most once;
/// lookups before population return `None`, afterwards always the same
/// value.
#[derive(Debug, Default)]
pub struct MachineModuleInfo {
    stubs: Vec<(McSymbol, StubValue)>,
    index: HashMap<McSymbol, usize>,
}

impl MachineModuleInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry for a stub symbol.
    pub fn fn_stub(&self, stub: McSymbol) -> Option<&StubValue> {
        self.index.get(&stub).map(|&i| &self.stubs[i].1)
    }

    /// Populate the entry for a stub symbol.
    ///
    /// Panics if the entry is already populated; callers check `fn_stub`
    /// first.
    pub fn set_fn_stub(&mut self, stub: McSymbol, value: StubValue) {
        assert!(
            !self.index.contains_key(&stub),
            "stub entry written twice: {stub:?}"
        );
        self.index.insert(stub, self.stubs.len());
        self.stubs.push((stub, value));
    }

    /// All stub entries, in insertion order.
    pub fn fn_stubs(&self) -> impl Iterator<Item = (McSymbol, &StubValue)> {
        self.stubs.iter().map(|(s, v)| (*s, v))
    }

    /// Number of stub entries.
    pub fn num_fn_stubs(&self) -> usize {
        self.stubs.len()
    }
}
