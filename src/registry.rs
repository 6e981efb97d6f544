//! Name → validators lookup.
//!
//! Several validators may share one name; they are tried in registration
//! order and the name matches when any of them accepts the value.
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::descriptor::{TypeDescriptionParser, TypeDescriptor};
use crate::types::{
    AnyType, ArrayType, BoolType, CallableType, FloatType, IntegerType, NumberType, NumericType,
    ObjectType, ResourceType, StringType, Type,
};

pub struct TypeRegistry<P: TypeDescriptionParser = TypeDescriptor> {
    types: IndexMap<String, Vec<Arc<dyn Type<P>>>>,
}

impl<P: TypeDescriptionParser> TypeRegistry<P> {
    pub fn empty() -> Self {
        TypeRegistry { types: IndexMap::new() }
    }

    /// Registry preloaded with the built-in types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry
            .register(AnyType)
            .register(ArrayType)
            .register(BoolType)
            .register(CallableType)
            .register(FloatType)
            .register(IntegerType)
            .register(NumberType)
            .register(NumericType)
            .register(ObjectType)
            .register(ResourceType)
            .register(StringType);
        registry
    }

    /// Register under the type's own name and all of its aliases.
    pub fn register(&mut self, ty: impl Type<P> + 'static) -> &mut Self {
        let ty: Arc<dyn Type<P>> = Arc::new(ty);
        let names: Vec<String> = std::iter::once(ty.name())
            .chain(ty.aliases().iter().copied())
            .map(str::to_string)
            .collect();
        for name in names {
            self.insert(name, Arc::clone(&ty));
        }
        self
    }

    /// Register under `name` only, ignoring the type's own name and aliases.
    pub fn register_as(&mut self, ty: impl Type<P> + 'static, name: &str) -> &mut Self {
        self.insert(name.to_string(), Arc::new(ty));
        self
    }

    /// `None` means the name is not a registered type.
    pub fn lookup(&self, name: &str) -> Option<&[Arc<dyn Type<P>>]> {
        self.types.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    fn insert(&mut self, name: String, ty: Arc<dyn Type<P>>) {
        debug!(name = %name, type_name = ty.name(), "registering type");
        self.types.entry(name).or_default().push(ty);
    }
}

impl<P: TypeDescriptionParser> Default for TypeRegistry<P> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<P: TypeDescriptionParser> fmt::Debug for TypeRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.types.iter().map(|(name, types)| (name, types.len())))
            .finish()
    }
}
