use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [`NamedRef`] is done via [`NamedRef::deref()`] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, a [`Value::VarRef`](crate::Value::VarRef) stores a
/// [`NamedVariableRef`](crate::NamedVariableRef): the name of an operation
/// variable that may not have been registered yet when the value is declared.
/// The reference is only resolved against the
/// [`VariableRegistry`](crate::VariableRegistry) once the value is rendered
/// into GraphQL source text.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<TResource>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DerefByNameError {
    DanglingReference(String),
}
