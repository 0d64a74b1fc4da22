//! Module-level orchestration of a combine run.

use super::combiner;
use crate::equality::OwnerKind;
use crate::error::MergeError;
use crate::names::{match_by_name, DuplicateNames};
use crate::schema::SchemaModel;
use crate::syntax::{Declaration, Module};
use crate::warnings::Warning;
use tracing::{debug, trace};

/// CombinerBuilder configures a [`ModuleCombiner`].
#[derive(Debug, Default)]
pub struct CombinerBuilder {
    schema: Option<SchemaModel>,
    duplicate_names: DuplicateNames,
}

impl CombinerBuilder {
    /// Creates a new CombinerBuilder.
    pub fn new() -> Self {
        CombinerBuilder::default()
    }

    /// Sets the schema model consulted for union member order.
    pub fn schema(mut self, schema: SchemaModel) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the policy for siblings that share a name.
    pub fn duplicate_names(mut self, policy: DuplicateNames) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// Builds a combiner over the given previous and next modules.
    pub fn build<'a>(self, prev: &'a Module, next: &'a Module) -> ModuleCombiner<'a> {
        ModuleCombiner {
            prev,
            next,
            schema: self.schema,
            duplicate_names: self.duplicate_names,
        }
    }
}

/// CombineOutcome is the merged module plus the warnings raised while
/// producing it, in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct CombineOutcome {
    pub module: Module,
    pub warnings: Vec<Warning>,
}

impl CombineOutcome {
    /// Returns the warning texts.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(Warning::to_string).collect()
    }

    /// Returns true if at least one breaking change was found.
    pub fn has_breaking_changes(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// ModuleCombiner merges a regenerated module into a previously generated,
/// possibly hand-edited one.
#[derive(Debug)]
pub struct ModuleCombiner<'a> {
    prev: &'a Module,
    next: &'a Module,
    schema: Option<SchemaModel>,
    duplicate_names: DuplicateNames,
}

impl<'a> ModuleCombiner<'a> {
    /// Creates a combiner with the default configuration.
    pub fn new(prev: &'a Module, next: &'a Module) -> Self {
        CombinerBuilder::new().build(prev, next)
    }

    /// Creates a new CombinerBuilder.
    pub fn builder() -> CombinerBuilder {
        CombinerBuilder::new()
    }

    /// Runs the combine.
    ///
    /// Declarations are matched by name. Matched pairs are merged in next
    /// order and next-only declarations follow. Previous-only constructs the
    /// engine has no comparator for are kept at the end; other previous-only
    /// declarations are dropped. Imports are kept from both sides. Either the
    /// whole module merges or an error is returned.
    pub fn combine(&self) -> Result<CombineOutcome, MergeError> {
        let policy = self.duplicate_names;
        let mut warnings = Vec::new();

        let (prev_imports, prev_decls) = split_imports(self.prev);
        let (next_imports, next_decls) = split_imports(self.next);

        let mut members = Vec::with_capacity(next_imports.len() + next_decls.len());

        let imports = match_by_name(&prev_imports, &next_imports, |d| d.name().to_string(), "module imports", policy)?;
        members.extend(prev_imports.iter().map(|d| (*d).clone()));
        for import in &imports.added {
            debug!(module = %import.name(), "adding import");
            members.push((**import).clone());
        }

        let decls = match_by_name(&prev_decls, &next_decls, |d| d.name().to_string(), "module", policy)?;
        let mut retained = Vec::new();
        for removed in &decls.removed {
            if matches!(removed, Declaration::Other(_)) {
                debug!(name = %removed.name(), "keeping developer declaration");
                retained.push((**removed).clone());
            } else {
                debug!(name = %removed.name(), kind = %removed.kind(), "dropping declaration missing from next module");
            }
        }
        for (prev, next) in &decls.matched {
            members.push(self.combine_declaration(prev, next, &mut warnings)?);
        }
        for added in &decls.added {
            debug!(name = %added.name(), kind = %added.kind(), "adding declaration");
            members.push((**added).clone());
        }
        members.extend(retained);

        debug!(
            members = members.len(),
            warnings = warnings.len(),
            "combined modules"
        );
        Ok(CombineOutcome {
            module: Module::with_members(members),
            warnings,
        })
    }

    fn combine_declaration(
        &self,
        prev: &Declaration,
        next: &Declaration,
        warnings: &mut Vec<Warning>,
    ) -> Result<Declaration, MergeError> {
        let policy = self.duplicate_names;
        trace!(name = %next.name(), kind = %next.kind(), "combining declaration");

        let merged = match (prev, next) {
            (Declaration::ServiceObject(p), Declaration::ServiceObject(n)) => Declaration::ServiceObject(
                combiner::combine_objects(OwnerKind::ServiceObject, p, n, policy, warnings)?,
            ),
            (Declaration::Interface(p), Declaration::Interface(n)) => {
                Declaration::Interface(combiner::combine_objects(OwnerKind::Interface, p, n, policy, warnings)?)
            }
            (Declaration::Class(p), Declaration::Class(n)) => {
                Declaration::Class(combiner::combine_classes(p, n, policy, warnings)?)
            }
            (Declaration::Record(p), Declaration::Record(n)) => {
                Declaration::Record(combiner::combine_records(p, n, policy, warnings)?)
            }
            (Declaration::Enum(p), Declaration::Enum(n)) => {
                Declaration::Enum(combiner::combine_enums(p, n, policy, warnings)?)
            }
            (Declaration::Union(p), Declaration::Union(n)) => {
                Declaration::Union(combiner::combine_unions(p, n, self.schema.as_ref(), warnings))
            }
            (Declaration::Other(_), Declaration::Other(n)) => {
                return Err(MergeError::unsupported(n.construct.clone(), n.name.clone()));
            }
            (p, n) => {
                return Err(MergeError::mismatch(n.name(), p.kind().as_str(), n.kind().as_str()));
            }
        };
        Ok(merged)
    }
}

/// Combines `next` into `prev` with the default configuration.
pub fn combine_modules(prev: &Module, next: &Module) -> Result<CombineOutcome, MergeError> {
    ModuleCombiner::new(prev, next).combine()
}

fn split_imports(module: &Module) -> (Vec<&Declaration>, Vec<&Declaration>) {
    module
        .members
        .iter()
        .partition(|d| matches!(d, Declaration::Import(_)))
}
