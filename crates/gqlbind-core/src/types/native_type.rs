use crate::NativeMember;

/// The native (generated-code) representation a schema type is bound to.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeType {
    /// A key/value mapping type. Fields of map-bound objects are looked up by
    /// key at runtime, so they are never bound to members.
    Map {
        path: String,
    },

    /// A structure with a known set of members.
    Struct {
        members: Vec<NativeMember>,
        path: String,
    },
}
impl NativeType {
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Map { path } => path.as_str(),
            Self::Struct { path, .. } => path.as_str(),
        }
    }
}
impl std::fmt::Display for NativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
