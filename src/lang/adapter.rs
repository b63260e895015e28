//! Generic tree-sitter adapter.
//!
//! One `TreeSitterAdapter` serves every language: the grammar descriptor
//! supplies the node kinds, and a single cursor walk extracts all facts in
//! one pass (declarations, references, calls, literals, handlers, nesting,
//! complexity). No detector re-parses a file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::anyhow;
use tree_sitter::Node;

use super::grammar::{Grammar, VisibilityRule};
use super::{Language, LanguageAdapter};
use crate::facts::{
    CallFact, CatchFact, DeclarationFact, FileFacts, FunctionFact, LiteralFact, LiteralKind,
    StructureFact, StructureKind, SymbolKind,
};

const MAX_LITERAL_LEN: usize = 60;
const MAX_CONTEXT_LEN: usize = 120;

/// A parsed file: tree plus the source it was parsed from.
#[derive(Debug)]
pub struct ParsedFile {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: String,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Grammar-driven adapter shared by all supported languages.
pub struct TreeSitterAdapter {
    grammar: &'static Grammar,
}

impl TreeSitterAdapter {
    pub fn new(grammar: &'static Grammar) -> Self {
        Self { grammar }
    }
}

impl LanguageAdapter for TreeSitterAdapter {
    fn language(&self) -> Language {
        self.grammar.language
    }

    fn parse(&self, path: &Path, source: &str) -> anyhow::Result<ParsedFile> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&(self.grammar.ts_language)())?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("parser produced no tree for {}", path.display()))?;

        if tree.root_node().has_error() {
            let line = first_error_line(tree.root_node()).unwrap_or(1);
            return Err(anyhow!("syntax error near line {}", line));
        }

        Ok(ParsedFile {
            tree,
            source: source.to_string(),
            path: path.display().to_string(),
        })
    }

    fn extract_facts(&self, parsed: &ParsedFile) -> anyhow::Result<FileFacts> {
        let mut facts = FileFacts::new(&parsed.path, self.grammar.language);
        facts.total_lines = parsed.source.lines().count();
        facts.blank_lines = parsed
            .source
            .lines()
            .filter(|l| l.trim().is_empty())
            .count();

        let lines: Vec<&str> = parsed.source.lines().collect();
        let mut walker = Walker {
            grammar: self.grammar,
            source: &parsed.source,
            lines,
            facts,
            fn_stack: Vec::new(),
            nest_stack: Vec::new(),
            suppressed_offsets: HashSet::new(),
        };
        walker.visit(parsed.tree.root_node());
        Ok(walker.facts)
    }
}

/// Find the line of the first ERROR or missing node.
fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(line) = first_error_line(child) {
                return Some(line);
            }
        }
    }
    None
}

/// Context for a function currently being walked.
struct FnCtx {
    index: usize,
    nest_base: usize,
}

struct Walker<'a> {
    grammar: &'static Grammar,
    source: &'a str,
    lines: Vec<&'a str>,
    facts: FileFacts,
    fn_stack: Vec<FnCtx>,
    nest_stack: Vec<String>,
    /// Byte offsets of declaration-name nodes; not counted as references.
    suppressed_offsets: HashSet<usize>,
}

impl<'a> Walker<'a> {
    fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn line_of(&self, node: Node) -> usize {
        node.start_position().row + 1
    }

    fn visit(&mut self, node: Node) {
        let kind = node.kind();

        // Leaf-style handlers: these do not recurse.
        if self.grammar.comment_kinds.contains(&kind) {
            self.on_comment(node);
            return;
        }
        if self.grammar.import_kinds.contains(&kind) {
            self.on_import(node);
            return;
        }
        if self.grammar.string_kinds.contains(&kind) {
            self.on_literal(node, LiteralKind::Str);
            return;
        }
        if self.grammar.number_kinds.contains(&kind) {
            self.on_literal(node, LiteralKind::Number);
            return;
        }
        if self.grammar.identifier_kinds.contains(&kind) {
            self.on_identifier(node);
            return;
        }

        let mut pushed_fn = false;
        let mut pushed_nest = false;

        if self.grammar.function_kinds.contains(&kind)
            || self.grammar.anon_function_kinds.contains(&kind)
        {
            pushed_fn = self.on_function(node);
        } else if self.grammar.class_kinds.contains(&kind) {
            self.on_class(node);
        } else if self.fn_stack.is_empty() && self.grammar.module_var_kinds.contains(&kind) {
            self.on_module_var(node);
        }

        if self.grammar.call_kinds.contains(&kind) {
            self.on_call(node);
        }
        if self.grammar.catch_kinds.contains(&kind) {
            self.on_catch(node);
            self.bump_complexity();
        }
        if self.grammar.branch_kinds.contains(&kind) {
            self.bump_complexity();
        }
        if self.grammar.bool_op_kinds.contains(&kind) {
            self.bump_complexity();
        }
        if self.grammar.short_circuit_binary_kinds.contains(&kind) && self.is_short_circuit(node) {
            self.bump_complexity();
        }
        self.on_structure(node, kind);

        if self.grammar.nesting_kinds.contains(&kind) && !self.fn_stack.is_empty() {
            self.nest_stack.push(kind.to_string());
            self.update_nesting();
            pushed_nest = true;
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children {
            self.visit(child);
        }

        if pushed_nest {
            self.nest_stack.pop();
        }
        if pushed_fn {
            self.fn_stack.pop();
        }
    }

    fn on_comment(&mut self, node: Node) {
        let span = node.end_position().row - node.start_position().row + 1;
        self.facts.comment_lines += span;
        let upper = self.text(node).to_uppercase();
        if upper.contains("TODO") || upper.contains("FIXME") || upper.contains("HACK") {
            self.facts.todo_count += 1;
        }
    }

    fn on_literal(&mut self, node: Node, kind: LiteralKind) {
        let value = truncate(self.text(node), MAX_LITERAL_LEN);
        let line = self.line_of(node);
        let context = self
            .lines
            .get(node.start_position().row)
            .map(|l| truncate(l.trim(), MAX_CONTEXT_LEN))
            .unwrap_or_default();
        self.facts.literals.push(LiteralFact {
            value,
            kind,
            line,
            context,
            in_function: !self.fn_stack.is_empty(),
        });
    }

    fn on_identifier(&mut self, node: Node) {
        if self.suppressed_offsets.contains(&node.start_byte()) {
            return;
        }
        let name = self.text(node);
        if is_identifier(name) {
            self.facts.add_reference(name);
        }
    }

    /// Returns true when a function context was pushed.
    fn on_function(&mut self, node: Node) -> bool {
        let name_node = if self.grammar.function_kinds.contains(&node.kind()) {
            node.child_by_field_name("name")
        } else {
            anon_function_name(node)
        };

        let name_node = match name_node {
            Some(n) => n,
            // Truly anonymous: walk the body attributing work to the
            // enclosing function, but record no declaration.
            None => return false,
        };

        let name = self.text(name_node).to_string();
        if !is_identifier(&name) {
            return false;
        }
        self.suppressed_offsets.insert(name_node.start_byte());

        let exported = self.is_exported(node, &name);
        let line = self.line_of(node);
        self.facts.declarations.push(DeclarationFact {
            name: name.clone(),
            kind: SymbolKind::Function,
            line,
            exported,
        });
        self.facts.functions.push(FunctionFact {
            name,
            start_line: line,
            end_line: node.end_position().row + 1,
            param_count: self.count_params(node),
            complexity: 1,
            max_nesting: 0,
            nesting_path: Vec::new(),
            exported,
        });
        self.fn_stack.push(FnCtx {
            index: self.facts.functions.len() - 1,
            nest_base: self.nest_stack.len(),
        });
        true
    }

    fn on_class(&mut self, node: Node) {
        let name_node = match node.child_by_field_name("name") {
            Some(n) => n,
            None => return,
        };
        let name = self.text(name_node).to_string();
        if !is_identifier(&name) {
            return;
        }
        self.suppressed_offsets.insert(name_node.start_byte());
        self.facts.class_count += 1;
        let exported = self.is_exported(node, &name);
        self.facts.declarations.push(DeclarationFact {
            name,
            kind: SymbolKind::Class,
            line: self.line_of(node),
            exported,
        });
    }

    fn on_module_var(&mut self, node: Node) {
        let mut names: Vec<Node> = Vec::new();
        match node.kind() {
            "assignment" => {
                if let Some(left) = node.child_by_field_name("left") {
                    if self.grammar.identifier_kinds.contains(&left.kind()) {
                        names.push(left);
                    }
                }
            }
            "const_item" | "static_item" => {
                if let Some(n) = node.child_by_field_name("name") {
                    names.push(n);
                }
            }
            "lexical_declaration" | "variable_declaration" | "field_declaration" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() == "variable_declarator" {
                        if let Some(n) = child.child_by_field_name("name") {
                            names.push(n);
                        }
                    }
                }
            }
            "var_declaration" | "const_declaration" => {
                let mut cursor = node.walk();
                for spec in node.named_children(&mut cursor) {
                    if spec.kind().ends_with("_spec") {
                        let mut spec_cursor = spec.walk();
                        for n in spec.children_by_field_name("name", &mut spec_cursor) {
                            names.push(n);
                        }
                    }
                }
            }
            _ => {}
        }

        for name_node in names {
            let name = self.text(name_node).to_string();
            if !is_identifier(&name) {
                continue;
            }
            self.suppressed_offsets.insert(name_node.start_byte());
            let exported = self.is_exported(node, &name);
            self.facts.declarations.push(DeclarationFact {
                name,
                kind: SymbolKind::Variable,
                line: self.line_of(name_node),
                exported,
            });
        }
    }

    fn on_call(&mut self, node: Node) {
        let callee_node = match node.child_by_field_name(self.grammar.callee_field) {
            Some(n) => n,
            None => return,
        };
        let callee = match last_path_segment(self.text(callee_node)) {
            Some(n) => n,
            None => return,
        };
        let caller = self
            .fn_stack
            .last()
            .map(|ctx| self.facts.functions[ctx.index].name.clone());
        self.facts.calls.push(CallFact {
            caller,
            callee,
            line: self.line_of(node),
        });
    }

    fn on_catch(&mut self, node: Node) {
        let mut caught = None;
        let mut is_empty = false;
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "block" | "statement_block" => {
                    let mut block_cursor = child.walk();
                    is_empty = child
                        .named_children(&mut block_cursor)
                        .all(|n| matches!(n.kind(), "pass_statement") || self.grammar.comment_kinds.contains(&n.kind()));
                }
                k if self.grammar.comment_kinds.contains(&k) => {}
                _ => {
                    if caught.is_none() {
                        caught = Some(truncate(self.text(child), 40));
                    }
                }
            }
        }
        self.facts.catches.push(CatchFact {
            line: self.line_of(node),
            caught,
            is_empty,
        });
    }

    fn on_structure(&mut self, node: Node, kind: &str) {
        let structure = if self.grammar.list_kinds.contains(&kind) {
            Some(StructureKind::List)
        } else if self.grammar.map_kinds.contains(&kind) {
            Some(StructureKind::Map)
        } else if self.grammar.set_kinds.contains(&kind) {
            Some(StructureKind::Set)
        } else if self.grammar.tuple_kinds.contains(&kind) {
            Some(StructureKind::Tuple)
        } else if self.grammar.language == Language::Go && kind == "composite_literal" {
            // Go spells every collection literal the same way; the type
            // child disambiguates.
            node.child_by_field_name("type").and_then(|t| match t.kind() {
                "map_type" => Some(StructureKind::Map),
                "slice_type" | "array_type" => Some(StructureKind::List),
                _ => None,
            })
        } else {
            None
        };

        if let Some(kind) = structure {
            self.facts.structures.push(StructureFact {
                kind,
                line: self.line_of(node),
            });
        }
    }

    fn on_import(&mut self, node: Node) {
        let line = self.line_of(node);
        let text = self.text(node);
        for name in import_bindings(self.grammar.language, text) {
            self.facts.declarations.push(DeclarationFact {
                name,
                kind: SymbolKind::Import,
                line,
                exported: false,
            });
        }
    }

    fn bump_complexity(&mut self) {
        if let Some(ctx) = self.fn_stack.last() {
            self.facts.functions[ctx.index].complexity += 1;
        }
    }

    fn is_short_circuit(&self, node: Node) -> bool {
        node.child_by_field_name("operator")
            .map(|op| matches!(self.text(op), "&&" | "||"))
            .unwrap_or(false)
    }

    fn update_nesting(&mut self) {
        if let Some(ctx) = self.fn_stack.last() {
            let depth = self.nest_stack.len() - ctx.nest_base;
            let fact = &mut self.facts.functions[ctx.index];
            if depth > fact.max_nesting {
                fact.max_nesting = depth;
                fact.nesting_path = self.nest_stack[ctx.nest_base..].to_vec();
            }
        }
    }

    fn count_params(&self, node: Node) -> usize {
        let params = node
            .child_by_field_name("parameters")
            .or_else(|| node.child_by_field_name("parameter"));
        let params = match params {
            Some(p) => p,
            None => return 0,
        };
        if self.grammar.identifier_kinds.contains(&params.kind()) {
            // Single-parameter arrow function.
            return 1;
        }
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|p| {
                !self.grammar.comment_kinds.contains(&p.kind())
                    && p.kind() != "self_parameter"
                    && !matches!(self.text(*p), "self" | "cls")
            })
            .count()
    }

    fn is_exported(&self, node: Node, name: &str) -> bool {
        match self.grammar.visibility {
            VisibilityRule::UnderscorePrivate => !name.starts_with('_'),
            VisibilityRule::CaseBased => name.chars().next().is_some_and(|c| c.is_uppercase()),
            VisibilityRule::ExportKeyword => {
                let mut current = node.parent();
                while let Some(parent) = current {
                    if parent.kind() == "export_statement" {
                        return true;
                    }
                    current = parent.parent();
                }
                false
            }
            VisibilityRule::PubModifier => {
                let mut cursor = node.walk();
                let has_vis = node
                    .children(&mut cursor)
                    .any(|c| c.kind() == "visibility_modifier");
                has_vis
            }
            VisibilityRule::PublicModifier => {
                let mut cursor = node.walk();
                let has_public = node
                    .children(&mut cursor)
                    .any(|c| c.kind() == "modifiers" && self.text(c).contains("public"));
                has_public
            }
        }
    }
}

/// Name node for an anonymous function bound to a variable.
fn anon_function_name(node: Node) -> Option<Node> {
    let parent = node.parent()?;
    match parent.kind() {
        "variable_declarator" => parent.child_by_field_name("name"),
        "assignment" => parent.child_by_field_name("left"),
        _ => None,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s[..end].to_string()
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Last segment of a possibly-qualified callee (`a.b.c` -> `c`).
fn last_path_segment(text: &str) -> Option<String> {
    let seg = text
        .rsplit(|c| c == '.' || c == ':')
        .next()?
        .trim();
    if is_identifier(seg) {
        Some(seg.to_string())
    } else {
        None
    }
}

/// Extract the names an import statement binds in its file.
///
/// Textual on purpose: each language spells imports differently enough that
/// per-grammar node patterns buy little over careful splitting, and dead
/// import detection only needs the bound names.
fn import_bindings(language: Language, text: &str) -> Vec<String> {
    let mut names = Vec::new();
    match language {
        Language::Python => {
            let text = text.trim();
            if let Some(rest) = text.strip_prefix("from ") {
                if let Some(idx) = rest.find(" import ") {
                    let imported = rest[idx + 8..].replace(['(', ')'], "");
                    for seg in imported.split(',') {
                        push_binding(&mut names, binding_after_as(seg, " as "));
                    }
                }
            } else if let Some(rest) = text.strip_prefix("import ") {
                for seg in rest.split(',') {
                    let seg = seg.trim();
                    if let Some(alias) = seg.split(" as ").nth(1) {
                        push_binding(&mut names, alias);
                    } else {
                        // `import os.path` binds `os`.
                        push_binding(&mut names, seg.split('.').next().unwrap_or(""));
                    }
                }
            }
        }
        Language::JavaScript | Language::TypeScript => {
            let body = text
                .strip_prefix("import")
                .unwrap_or(text)
                .split(" from ")
                .next()
                .unwrap_or("");
            let cleaned = body.replace(['{', '}', ','], " ");
            let tokens: Vec<&str> = cleaned.split_whitespace().collect();
            let mut i = 0;
            while i < tokens.len() {
                if tokens[i] == "as" && i + 1 < tokens.len() {
                    names.pop();
                    push_binding(&mut names, tokens[i + 1]);
                    i += 2;
                    continue;
                }
                if tokens[i] != "type" && tokens[i] != "*" {
                    push_binding(&mut names, tokens[i]);
                }
                i += 1;
            }
        }
        Language::Go => {
            for line in text.lines() {
                let line = line.trim().trim_start_matches("import").trim();
                let Some(quote) = line.find('"') else { continue };
                let prefix = line[..quote].trim().trim_start_matches('(').trim();
                if !prefix.is_empty() && prefix != "_" && prefix != "." {
                    push_binding(&mut names, prefix);
                } else if prefix.is_empty() {
                    let path = line[quote..].trim_matches(|c| c == '"' || c == ')');
                    push_binding(&mut names, path.rsplit('/').next().unwrap_or(""));
                }
            }
        }
        Language::Rust => {
            let body = text
                .trim()
                .trim_start_matches("pub ")
                .trim_start_matches("use ")
                .trim_end_matches(';');
            let cleaned = body.replace(['{', '}'], ",");
            for seg in cleaned.split(',') {
                let seg = seg.trim();
                if seg.is_empty() || seg == "*" {
                    continue;
                }
                let binding = binding_after_as(seg, " as ");
                let last = binding.rsplit("::").next().unwrap_or("").trim();
                if !matches!(last, "self" | "super" | "crate" | "*") {
                    push_binding(&mut names, last);
                }
            }
        }
        Language::Java => {
            let body = text
                .trim()
                .trim_start_matches("import")
                .trim()
                .trim_start_matches("static")
                .trim()
                .trim_end_matches(';');
            let last = body.rsplit('.').next().unwrap_or("");
            if last != "*" {
                push_binding(&mut names, last);
            }
        }
    }
    names
}

fn binding_after_as<'b>(seg: &'b str, sep: &str) -> &'b str {
    match seg.split(sep).nth(1) {
        Some(alias) => alias.trim(),
        None => seg.trim(),
    }
}

fn push_binding(names: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if is_identifier(candidate) {
        names.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{adapter_for, grammar};

    fn facts_for(language: Language, source: &str) -> FileFacts {
        let adapter = adapter_for(language);
        let parsed = adapter.parse(Path::new("test.src"), source).unwrap();
        adapter.extract_facts(&parsed).unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed_source() {
        let adapter = TreeSitterAdapter::new(grammar::for_language(Language::Python));
        let err = adapter
            .parse(Path::new("bad.py"), "def broken(:\n    pass\n")
            .unwrap_err();
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn test_python_function_facts() {
        let source = r#"
def simple():
    return 1

def branchy(x, y):
    if x > 0:
        for i in range(x):
            if i % 2 == 0 and y:
                print(i)
    return x
"#;
        let facts = facts_for(Language::Python, source);
        assert_eq!(facts.functions.len(), 2);

        let simple = &facts.functions[0];
        assert_eq!(simple.name, "simple");
        assert_eq!(simple.complexity, 1);
        assert_eq!(simple.param_count, 0);

        let branchy = &facts.functions[1];
        assert_eq!(branchy.name, "branchy");
        assert_eq!(branchy.param_count, 2);
        // 1 + if + for + if + and
        assert_eq!(branchy.complexity, 5);
        assert_eq!(branchy.max_nesting, 3);
        assert_eq!(branchy.nesting_path, vec!["if_statement", "for_statement", "if_statement"]);
    }

    #[test]
    fn test_python_visibility_and_references() {
        let source = r#"
def _private_helper():
    return 1

def public_entry():
    return _private_helper()
"#;
        let facts = facts_for(Language::Python, source);
        let private = facts
            .declarations
            .iter()
            .find(|d| d.name == "_private_helper")
            .unwrap();
        assert!(!private.exported);
        // The call in public_entry counts as a reference; the definition
        // itself does not.
        assert_eq!(facts.references.get("_private_helper"), Some(&1));
        assert_eq!(facts.references.get("public_entry"), None);
    }

    #[test]
    fn test_python_imports_and_catches() {
        let source = r#"
import os.path
from collections import OrderedDict as OD, defaultdict

try:
    os.path.join("a")
except Exception:
    pass
except:
    pass
"#;
        let facts = facts_for(Language::Python, source);
        let imports: Vec<&str> = facts
            .declarations
            .iter()
            .filter(|d| d.kind == SymbolKind::Import)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(imports, vec!["os", "OD", "defaultdict"]);

        assert_eq!(facts.catches.len(), 2);
        assert_eq!(facts.catches[0].caught.as_deref(), Some("Exception"));
        assert!(facts.catches[0].is_empty);
        assert_eq!(facts.catches[1].caught, None);
    }

    #[test]
    fn test_javascript_arrow_and_exports() {
        let source = r#"
export function visible(a, b) {
    return a && b;
}

const hidden = (x) => {
    if (x) { return x; }
    return 0;
};
"#;
        let facts = facts_for(Language::JavaScript, source);
        let visible = facts.functions.iter().find(|f| f.name == "visible").unwrap();
        assert!(visible.exported);
        assert_eq!(visible.param_count, 2);
        assert_eq!(visible.complexity, 2); // 1 + &&

        let hidden = facts.functions.iter().find(|f| f.name == "hidden").unwrap();
        assert!(!hidden.exported);
        assert_eq!(hidden.complexity, 2); // 1 + if
    }

    #[test]
    fn test_go_case_visibility_and_structures() {
        let source = r#"
package main

func Exported() []int {
    return []int{1, 2}
}

func internal(m map[string]int) {
    if len(m) > 0 {
        return
    }
}
"#;
        let facts = facts_for(Language::Go, source);
        assert!(facts.functions.iter().find(|f| f.name == "Exported").unwrap().exported);
        assert!(!facts.functions.iter().find(|f| f.name == "internal").unwrap().exported);
        assert!(facts
            .structures
            .iter()
            .any(|s| s.kind == StructureKind::List));
    }

    #[test]
    fn test_rust_pub_visibility_and_calls() {
        let source = r#"
pub fn entry() {
    helper();
}

fn helper() {}
"#;
        let facts = facts_for(Language::Rust, source);
        assert!(facts.functions.iter().find(|f| f.name == "entry").unwrap().exported);
        assert!(!facts.functions.iter().find(|f| f.name == "helper").unwrap().exported);
        let call = facts.calls.iter().find(|c| c.callee == "helper").unwrap();
        assert_eq!(call.caller.as_deref(), Some("entry"));
    }

    #[test]
    fn test_comment_and_todo_counting() {
        let source = "# TODO: fix this\n# plain comment\nx = 1\n";
        let facts = facts_for(Language::Python, source);
        assert_eq!(facts.comment_lines, 2);
        assert_eq!(facts.todo_count, 1);
        assert_eq!(facts.total_lines, 3);
    }

    #[test]
    fn test_import_bindings_rust_and_java() {
        assert_eq!(
            import_bindings(Language::Rust, "use std::collections::{HashMap, HashSet};"),
            vec!["HashMap", "HashSet"]
        );
        assert_eq!(
            import_bindings(Language::Rust, "use serde_json as json;"),
            vec!["json"]
        );
        assert_eq!(
            import_bindings(Language::Java, "import java.util.List;"),
            vec!["List"]
        );
        assert!(import_bindings(Language::Java, "import java.util.*;").is_empty());
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("foo"), Some("foo".to_string()));
        assert_eq!(last_path_segment("obj.method"), Some("method".to_string()));
        assert_eq!(last_path_segment("a::b::c"), Some("c".to_string()));
        assert_eq!(last_path_segment("(x)()"), None);
    }
}
