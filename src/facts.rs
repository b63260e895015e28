//! Structural facts extracted from a single parsed file.
//!
//! Facts are the intermediate representation between the language adapter
//! layer and the detectors: one tree walk produces a `FileFacts`, and every
//! downstream pass (per-file metrics, dead code, call graph) reads from it
//! instead of re-parsing.

use std::collections::BTreeMap;

use crate::lang::Language;

/// Kind of a declared symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
    Import,
    Variable,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Import => "import",
            SymbolKind::Variable => "variable",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A declared symbol with its visibility.
#[derive(Debug, Clone)]
pub struct DeclarationFact {
    pub name: String,
    pub kind: SymbolKind,
    /// Line number (1-indexed).
    pub line: usize,
    /// Whether the symbol is plausibly visible outside its file.
    pub exported: bool,
}

/// A function or method with the structure needed for metrics.
#[derive(Debug, Clone)]
pub struct FunctionFact {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub param_count: usize,
    /// Cyclomatic complexity: 1 + branch constructs in the body.
    pub complexity: u32,
    /// Deepest control-structure nesting inside the body.
    pub max_nesting: usize,
    /// Construct kinds on the path to the deepest nesting point.
    pub nesting_path: Vec<String>,
    pub exported: bool,
}

impl FunctionFact {
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// A lexical call expression. `caller` is `None` for module-level calls.
#[derive(Debug, Clone)]
pub struct CallFact {
    pub caller: Option<String>,
    pub callee: String,
    pub line: usize,
}

/// Kind of literal seen in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Str,
}

/// A literal occurrence, kept for magic-value detection.
#[derive(Debug, Clone)]
pub struct LiteralFact {
    /// Literal text as written (truncated).
    pub value: String,
    pub kind: LiteralKind,
    pub line: usize,
    /// The trimmed source line containing the literal.
    pub context: String,
    /// Whether the literal sits inside a function body.
    pub in_function: bool,
}

/// An exception handler clause.
#[derive(Debug, Clone)]
pub struct CatchFact {
    pub line: usize,
    /// The caught type text, `None` for a bare handler.
    pub caught: Option<String>,
    /// Whether the handler body is empty (or pass/comment only).
    pub is_empty: bool,
}

/// Kind of collection literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StructureKind {
    List,
    Map,
    Set,
    Tuple,
}

impl StructureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::List => "list",
            StructureKind::Map => "map",
            StructureKind::Set => "set",
            StructureKind::Tuple => "tuple",
        }
    }
}

/// A collection-literal usage site.
#[derive(Debug, Clone)]
pub struct StructureFact {
    pub kind: StructureKind,
    pub line: usize,
}

/// Everything one tree walk learns about a file.
#[derive(Debug, Clone)]
pub struct FileFacts {
    /// Path relative to the analysis root.
    pub path: String,
    pub language: Language,
    pub total_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub todo_count: usize,
    pub class_count: usize,
    pub functions: Vec<FunctionFact>,
    pub declarations: Vec<DeclarationFact>,
    /// Identifier reference counts. Declaration-name occurrences are not
    /// counted as references to themselves.
    pub references: BTreeMap<String, usize>,
    pub calls: Vec<CallFact>,
    pub literals: Vec<LiteralFact>,
    pub catches: Vec<CatchFact>,
    pub structures: Vec<StructureFact>,
}

impl FileFacts {
    pub fn new(path: &str, language: Language) -> Self {
        Self {
            path: path.to_string(),
            language,
            total_lines: 0,
            blank_lines: 0,
            comment_lines: 0,
            todo_count: 0,
            class_count: 0,
            functions: Vec::new(),
            declarations: Vec::new(),
            references: BTreeMap::new(),
            calls: Vec::new(),
            literals: Vec::new(),
            catches: Vec::new(),
            structures: Vec::new(),
        }
    }

    /// Lines that are neither blank nor comment-only.
    pub fn code_lines(&self) -> usize {
        self.total_lines
            .saturating_sub(self.blank_lines)
            .saturating_sub(self.comment_lines)
    }

    /// Record an identifier reference.
    pub fn add_reference(&mut self, name: &str) {
        *self.references.entry(name.to_string()).or_insert(0) += 1;
    }
}

/// A successfully read source file, retained for the duplicate pass.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub language: Language,
    pub source: String,
}
