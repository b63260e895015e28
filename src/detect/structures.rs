//! Data-structure usage collection.
//!
//! Not a defect detector: records where collection literals appear so the
//! aggregate report can show which structures a codebase leans on.

use crate::facts::FileFacts;

use super::DataStructureUse;

/// List every collection-literal usage in one file.
pub fn collect(facts: &FileFacts) -> Vec<DataStructureUse> {
    facts
        .structures
        .iter()
        .map(|s| DataStructureUse {
            file: facts.path.clone(),
            line: s.line,
            kind: s.kind.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{StructureFact, StructureKind};
    use crate::lang::Language;

    #[test]
    fn test_collects_all_usages() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.structures.push(StructureFact { kind: StructureKind::List, line: 3 });
        facts.structures.push(StructureFact { kind: StructureKind::Map, line: 7 });

        let uses = collect(&facts);
        assert_eq!(uses.len(), 2);
        assert_eq!(uses[0].kind, "list");
        assert_eq!(uses[1].kind, "map");
        assert_eq!(uses[1].line, 7);
    }
}
