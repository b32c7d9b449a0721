//! Per-compilation-unit MC state: symbol interner and expression arena.

use std::collections::HashMap;

use crate::expr::{McExpr, McExprRef, VariantKind};

/// Target assembly dialect facts consulted when minting symbol names.
#[derive(Debug, Clone, Copy)]
pub struct McAsmInfo {
    /// Prefix applied to every linker-visible symbol (Darwin: `_`).
    pub global_prefix: &'static str,
    /// Prefix marking assembler-local labels (Darwin: `L`).
    pub private_global_prefix: &'static str,
    /// Whether the linker requires lazy-stub symbols to be assembler-local.
    pub linker_private_stubs: bool,
}

impl McAsmInfo {
    /// Darwin dialect: `_` global prefix, `L` local labels, private stubs.
    pub fn darwin() -> Self {
        Self {
            global_prefix: "_",
            private_global_prefix: "L",
            linker_private_stubs: true,
        }
    }
}

impl Default for McAsmInfo {
    /// Bare dialect with no prefixes.
    fn default() -> Self {
        Self {
            global_prefix: "",
            private_global_prefix: "",
            linker_private_stubs: false,
        }
    }
}

/// Interned symbol identifier, unique within one `McContext`.
///
/// Equal names intern to equal ids, so symbol identity is O(1) comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct McSymbol(pub u32);

/// Owner of everything the MC layer allocates for one compilation unit:
/// interned symbols, expression nodes, and the dialect facts.
///
/// All mutation goes through `&mut self`; a context shared across threads
/// must be externally serialized. Independent contexts never interact.
#[derive(Debug)]
pub struct McContext {
    asm_info: McAsmInfo,
    symbol_names: Vec<String>,
    symbol_ids: HashMap<String, McSymbol>,
    exprs: Vec<McExpr>,
}

impl McContext {
    pub fn new(asm_info: McAsmInfo) -> Self {
        Self {
            asm_info,
            symbol_names: Vec::new(),
            symbol_ids: HashMap::new(),
            exprs: Vec::new(),
        }
    }

    pub fn asm_info(&self) -> McAsmInfo {
        self.asm_info
    }

    /// Intern a symbol name, returning its `McSymbol`.
    ///
    /// Idempotent: a name already interned returns the existing symbol.
    pub fn get_or_create_symbol(&mut self, name: &str) -> McSymbol {
        if let Some(&sym) = self.symbol_ids.get(name) {
            return sym;
        }
        let sym = McSymbol(self.symbol_names.len() as u32);
        self.symbol_names.push(name.to_string());
        self.symbol_ids.insert(name.to_string(), sym);
        sym
    }

    /// Resolve a symbol back to its name.
    pub fn symbol_name(&self, sym: McSymbol) -> &str {
        &self.symbol_names[sym.0 as usize]
    }

    /// Number of interned symbols.
    pub fn num_symbols(&self) -> usize {
        self.symbol_names.len()
    }

    /// Allocate an expression node in the context arena.
    pub fn alloc_expr(&mut self, expr: McExpr) -> McExprRef {
        let r = McExprRef(self.exprs.len() as u32);
        self.exprs.push(expr);
        r
    }

    /// Symbol reference expression tagged with a relocation variant.
    pub fn symbol_ref(&mut self, symbol: McSymbol, variant: VariantKind) -> McExprRef {
        self.alloc_expr(McExpr::SymbolRef { symbol, variant })
    }

    /// Integer constant expression.
    pub fn constant(&mut self, value: i64) -> McExprRef {
        self.alloc_expr(McExpr::Constant(value))
    }

    /// Binary addition expression.
    pub fn add(&mut self, lhs: McExprRef, rhs: McExprRef) -> McExprRef {
        self.alloc_expr(McExpr::Add(lhs, rhs))
    }

    /// Binary subtraction expression.
    pub fn sub(&mut self, lhs: McExprRef, rhs: McExprRef) -> McExprRef {
        self.alloc_expr(McExpr::Sub(lhs, rhs))
    }

    /// Fetch an expression node by reference.
    pub fn expr(&self, r: McExprRef) -> &McExpr {
        &self.exprs[r.0 as usize]
    }
}
