//! Per-language grammar descriptors.
//!
//! Each descriptor names the tree-sitter node kinds that matter to the fact
//! extractor: definition kinds, branch kinds, literal kinds, and so on. The
//! extractor itself is generic; this table is the only per-language code.

use super::Language;

/// How a language expresses symbol visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// Leading underscore means private (Python).
    UnderscorePrivate,
    /// Uppercase initial means exported (Go).
    CaseBased,
    /// Symbols are exported via an enclosing `export` statement (JS/TS).
    ExportKeyword,
    /// Symbols carry an explicit `pub` visibility modifier node (Rust).
    PubModifier,
    /// Symbols carry a `public` keyword in their modifiers (Java).
    PublicModifier,
}

/// Node-kind tables driving the generic fact extractor.
pub struct Grammar {
    pub language: Language,
    pub ts_language: fn() -> tree_sitter::Language,

    /// Named function/method definitions (name in the `name` field).
    pub function_kinds: &'static [&'static str],
    /// Anonymous function forms named via an enclosing variable declarator.
    pub anon_function_kinds: &'static [&'static str],
    /// Class-like definitions.
    pub class_kinds: &'static [&'static str],

    /// Branch constructs counting toward cyclomatic complexity.
    pub branch_kinds: &'static [&'static str],
    /// Short-circuit operators identifiable by node kind alone.
    pub bool_op_kinds: &'static [&'static str],
    /// Binary-expression kinds whose operator field must be checked for
    /// `&&` / `||`.
    pub short_circuit_binary_kinds: &'static [&'static str],
    /// Exception handler clauses (count toward complexity too).
    pub catch_kinds: &'static [&'static str],
    /// Constructs contributing to nesting depth.
    pub nesting_kinds: &'static [&'static str],

    /// Call expressions.
    pub call_kinds: &'static [&'static str],
    /// Field on a call node holding the callee.
    pub callee_field: &'static str,

    pub string_kinds: &'static [&'static str],
    pub number_kinds: &'static [&'static str],
    pub comment_kinds: &'static [&'static str],
    pub import_kinds: &'static [&'static str],

    pub list_kinds: &'static [&'static str],
    pub map_kinds: &'static [&'static str],
    pub set_kinds: &'static [&'static str],
    pub tuple_kinds: &'static [&'static str],

    /// Module-level variable/constant declaration forms.
    pub module_var_kinds: &'static [&'static str],
    /// Identifier reference kinds.
    pub identifier_kinds: &'static [&'static str],

    pub visibility: VisibilityRule,
}

static PYTHON: Grammar = Grammar {
    language: Language::Python,
    ts_language: || tree_sitter_python::LANGUAGE.into(),
    function_kinds: &["function_definition"],
    anon_function_kinds: &["lambda"],
    class_kinds: &["class_definition"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "while_statement",
        "conditional_expression",
        "case_clause",
    ],
    bool_op_kinds: &["boolean_operator"],
    short_circuit_binary_kinds: &[],
    catch_kinds: &["except_clause"],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "while_statement",
        "try_statement",
        "with_statement",
        "match_statement",
    ],
    call_kinds: &["call"],
    callee_field: "function",
    string_kinds: &["string"],
    number_kinds: &["integer", "float"],
    comment_kinds: &["comment"],
    import_kinds: &["import_statement", "import_from_statement"],
    list_kinds: &["list", "list_comprehension"],
    map_kinds: &["dictionary", "dictionary_comprehension"],
    set_kinds: &["set", "set_comprehension"],
    tuple_kinds: &["tuple"],
    module_var_kinds: &["assignment"],
    identifier_kinds: &["identifier"],
    visibility: VisibilityRule::UnderscorePrivate,
};

static JAVASCRIPT: Grammar = Grammar {
    language: Language::JavaScript,
    ts_language: || tree_sitter_javascript::LANGUAGE.into(),
    function_kinds: &[
        "function_declaration",
        "generator_function_declaration",
        "method_definition",
    ],
    anon_function_kinds: &["arrow_function", "function_expression"],
    class_kinds: &["class_declaration"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "ternary_expression",
    ],
    bool_op_kinds: &[],
    short_circuit_binary_kinds: &["binary_expression"],
    catch_kinds: &["catch_clause"],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "try_statement",
    ],
    call_kinds: &["call_expression"],
    callee_field: "function",
    string_kinds: &["string", "template_string"],
    number_kinds: &["number"],
    comment_kinds: &["comment"],
    import_kinds: &["import_statement"],
    list_kinds: &["array"],
    map_kinds: &["object"],
    set_kinds: &[],
    tuple_kinds: &[],
    module_var_kinds: &["lexical_declaration", "variable_declaration"],
    identifier_kinds: &["identifier", "property_identifier", "shorthand_property_identifier"],
    visibility: VisibilityRule::ExportKeyword,
};

static TYPESCRIPT: Grammar = Grammar {
    language: Language::TypeScript,
    ts_language: || tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    function_kinds: &[
        "function_declaration",
        "generator_function_declaration",
        "method_definition",
    ],
    anon_function_kinds: &["arrow_function", "function_expression"],
    class_kinds: &["class_declaration", "interface_declaration", "enum_declaration"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "switch_case",
        "ternary_expression",
    ],
    bool_op_kinds: &[],
    short_circuit_binary_kinds: &["binary_expression"],
    catch_kinds: &["catch_clause"],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "switch_statement",
        "try_statement",
    ],
    call_kinds: &["call_expression"],
    callee_field: "function",
    string_kinds: &["string", "template_string"],
    number_kinds: &["number"],
    comment_kinds: &["comment"],
    import_kinds: &["import_statement"],
    list_kinds: &["array"],
    map_kinds: &["object"],
    set_kinds: &[],
    tuple_kinds: &[],
    module_var_kinds: &["lexical_declaration", "variable_declaration"],
    identifier_kinds: &["identifier", "property_identifier", "shorthand_property_identifier"],
    visibility: VisibilityRule::ExportKeyword,
};

static GO: Grammar = Grammar {
    language: Language::Go,
    ts_language: || tree_sitter_go::LANGUAGE.into(),
    function_kinds: &["function_declaration", "method_declaration"],
    anon_function_kinds: &["func_literal"],
    class_kinds: &["type_spec"],
    branch_kinds: &["if_statement", "for_statement", "expression_case", "communication_case"],
    bool_op_kinds: &[],
    short_circuit_binary_kinds: &["binary_expression"],
    catch_kinds: &[],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
    ],
    call_kinds: &["call_expression"],
    callee_field: "function",
    string_kinds: &["interpreted_string_literal", "raw_string_literal"],
    number_kinds: &["int_literal", "float_literal"],
    comment_kinds: &["comment"],
    import_kinds: &["import_declaration"],
    list_kinds: &[],
    map_kinds: &[],
    set_kinds: &[],
    tuple_kinds: &[],
    module_var_kinds: &["var_declaration", "const_declaration"],
    identifier_kinds: &["identifier", "field_identifier", "type_identifier"],
    visibility: VisibilityRule::CaseBased,
};

static RUST: Grammar = Grammar {
    language: Language::Rust,
    ts_language: || tree_sitter_rust::LANGUAGE.into(),
    function_kinds: &["function_item"],
    anon_function_kinds: &["closure_expression"],
    class_kinds: &["struct_item", "enum_item", "trait_item"],
    branch_kinds: &[
        "if_expression",
        "while_expression",
        "loop_expression",
        "for_expression",
        "match_arm",
    ],
    bool_op_kinds: &[],
    short_circuit_binary_kinds: &["binary_expression"],
    catch_kinds: &[],
    nesting_kinds: &[
        "if_expression",
        "for_expression",
        "while_expression",
        "loop_expression",
        "match_expression",
    ],
    call_kinds: &["call_expression"],
    callee_field: "function",
    string_kinds: &["string_literal", "raw_string_literal"],
    number_kinds: &["integer_literal", "float_literal"],
    comment_kinds: &["line_comment", "block_comment"],
    import_kinds: &["use_declaration"],
    list_kinds: &["array_expression"],
    map_kinds: &[],
    set_kinds: &[],
    tuple_kinds: &["tuple_expression"],
    module_var_kinds: &["const_item", "static_item"],
    identifier_kinds: &["identifier", "field_identifier", "type_identifier"],
    visibility: VisibilityRule::PubModifier,
};

static JAVA: Grammar = Grammar {
    language: Language::Java,
    ts_language: || tree_sitter_java::LANGUAGE.into(),
    function_kinds: &["method_declaration", "constructor_declaration"],
    anon_function_kinds: &["lambda_expression"],
    class_kinds: &["class_declaration", "interface_declaration", "enum_declaration"],
    branch_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_label",
        "ternary_expression",
    ],
    bool_op_kinds: &[],
    short_circuit_binary_kinds: &["binary_expression"],
    catch_kinds: &["catch_clause"],
    nesting_kinds: &[
        "if_statement",
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
        "switch_expression",
        "try_statement",
    ],
    call_kinds: &["method_invocation"],
    callee_field: "name",
    string_kinds: &["string_literal"],
    number_kinds: &[
        "decimal_integer_literal",
        "hex_integer_literal",
        "decimal_floating_point_literal",
    ],
    comment_kinds: &["line_comment", "block_comment"],
    import_kinds: &["import_declaration"],
    list_kinds: &["array_initializer"],
    map_kinds: &[],
    set_kinds: &[],
    tuple_kinds: &[],
    module_var_kinds: &["field_declaration"],
    identifier_kinds: &["identifier", "type_identifier"],
    visibility: VisibilityRule::PublicModifier,
};

/// Look up the grammar descriptor for a language.
pub fn for_language(language: Language) -> &'static Grammar {
    match language {
        Language::Python => &PYTHON,
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Go => &GO,
        Language::Rust => &RUST,
        Language::Java => &JAVA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_grammar() {
        for &language in Language::ALL {
            let grammar = for_language(language);
            assert_eq!(grammar.language, language);
            assert!(!grammar.function_kinds.is_empty());
            assert!(!grammar.identifier_kinds.is_empty());
        }
    }

    #[test]
    fn test_go_uses_case_based_visibility() {
        assert_eq!(for_language(Language::Go).visibility, VisibilityRule::CaseBased);
    }
}
