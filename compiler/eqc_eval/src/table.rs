//! Class table: the hierarchy and generated methods the interpreter runs.

use eqc_ir::{GeneratedMethods, TypeDescriptor, ROOT_TYPE_NAMES};
use rustc_hash::FxHashMap;

use crate::error::{EvalError, EvalResult};

/// One registered class.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassEntry {
    /// Qualified name.
    pub name: String,
    /// Qualified superclass name; `None` when directly rooted.
    pub superclass: Option<String>,
    /// `None` for classes that inherit the root type's identity equality.
    pub methods: Option<GeneratedMethods>,
}

#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: FxHashMap<String, ClassEntry>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any earlier entry of the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        superclass: Option<String>,
        methods: Option<GeneratedMethods>,
    ) {
        let name = name.into();
        let superclass = superclass.filter(|s| !ROOT_TYPE_NAMES.contains(&s.as_str()));
        self.classes.insert(
            name.clone(),
            ClassEntry {
                name,
                superclass,
                methods,
            },
        );
    }

    /// Register a class with no generated methods.
    pub fn register_plain(&mut self, name: impl Into<String>, superclass: Option<String>) {
        self.register(name, superclass, None);
    }

    /// Register a synthesized type under its qualified name.
    pub fn register_synthesized(&mut self, ty: &TypeDescriptor, methods: GeneratedMethods) {
        self.register(
            ty.type_name().qualified(),
            ty.superclass.clone(),
            Some(methods),
        );
    }

    pub fn get(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `class` and its registered ancestors, nearest first.
    ///
    /// The walk stops at the first superclass that is not registered: such a
    /// class is treated as a library class with identity equality.
    pub fn lineage(&self, class: &str) -> EvalResult<Vec<&ClassEntry>> {
        let mut chain = Vec::new();
        let mut next = Some(class);
        while let Some(name) = next {
            let Some(entry) = self.classes.get(name) else {
                break;
            };
            if chain.len() > self.classes.len() {
                return Err(EvalError::CyclicHierarchy(class.to_string()));
            }
            chain.push(entry);
            next = entry.superclass.as_deref();
        }
        Ok(chain)
    }

    /// Whether `class` is `target` or one of its subclasses.
    ///
    /// Unregistered superclasses still count by name, so an instance of a
    /// class extending an unregistered `Base` is an instance of `Base`.
    pub fn is_subclass(&self, class: &str, target: &str) -> EvalResult<bool> {
        if class == target {
            return Ok(true);
        }
        let lineage = self.lineage(class)?;
        Ok(lineage
            .iter()
            .any(|e| e.name == target || e.superclass.as_deref() == Some(target)))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
