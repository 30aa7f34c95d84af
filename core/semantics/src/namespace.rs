//! Namespace
//!
//! Maps type names to type objects. Builtin leaf types are registered on
//! construction; user-defined names are added with [`Namespace::declare`].
//!
//! Scopes form a stack. Lookup walks from the innermost scope outwards, and a
//! name may not be redeclared while it is visible, so inner scopes never
//! shadow outer ones.
//!
//! Type resolution only ever reads a namespace. Each compilation owns its own
//! instance; nothing here is shared between compilations.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::errors::TypeError;
use crate::types::{AddressT, BoolT, BytesMT, BytesT, DecimalT, IntegerT, StringT, TypeObject};

#[derive(Debug, Clone)]
pub struct Namespace {
    scopes: Vec<FxHashMap<String, TypeObject>>,
}

impl Default for Namespace {
    fn default() -> Self {
        let mut namespace = Self::empty();
        namespace.init_builtin_types();
        namespace
    }
}

impl Namespace {
    /// A namespace with a single empty scope and no builtins.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scopes: vec![FxHashMap::default()],
        }
    }

    fn init_builtin_types(&mut self) {
        let mut builtins: Vec<TypeObject> = vec![
            BoolT.into(),
            DecimalT.into(),
            AddressT.into(),
            BytesT.into(),
            StringT.into(),
        ];
        builtins.extend(IntegerT::all().into_iter().map(TypeObject::from));
        builtins.extend(BytesMT::all().into_iter().map(TypeObject::from));

        let root = &mut self.scopes[0];
        for ty in builtins {
            root.insert(ty.to_string(), ty);
        }
    }

    /// Declares `name` in the innermost scope.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NamespaceCollision`] if `name` is already visible.
    pub fn declare(&mut self, name: &str, ty: TypeObject) -> Result<(), TypeError> {
        if self.contains(name) {
            return Err(TypeError::NamespaceCollision {
                name: name.to_string(),
            });
        }
        debug!(name, ty = %ty, depth = self.scopes.len(), "declared type");
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), ty);
        }
        Ok(())
    }

    /// Type object bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UndeclaredDefinition`] if `name` is not visible.
    pub fn lookup(&self, name: &str) -> Result<TypeObject, TypeError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| TypeError::UndeclaredDefinition {
                name: name.to_string(),
            })
    }

    #[must_use = "this is a pure lookup with no side effects"]
    pub fn get(&self, name: &str) -> Option<&TypeObject> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every visible name, innermost scope first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.keys().map(String::as_str))
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
        trace!(depth = self.scopes.len(), "entered scope");
    }

    /// Drops the innermost scope and everything declared in it. The root
    /// scope is never dropped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        trace!(depth = self.scopes.len(), "exited scope");
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
