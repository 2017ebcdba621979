use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a resource (`TResource`)
/// stored within some data-store (`TSource`) without borrowing the
/// data-store itself. De-referencing a [NamedRef] is done via
/// [NamedRef::deref()] by providing an explicit reference to the `TSource`.
///
/// Each [Field](crate::model::Field) uses one of these to point back at the
/// [NamedType](crate::types::NamedType) that declares it, which keeps the
/// produced object model free of ownership cycles between objects and their
/// fields.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// A resource that can be looked up by name in its `Source`.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No item named `{0}` exists")]
    DanglingReference(String),
}
