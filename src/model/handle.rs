use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct SourceInfo {
    name: String,
    pixel_type: Option<String>,
}

/// Identity of one image layer. Two handles are equal only when they were
/// cloned from the same `SourceHandle::new` call, regardless of their names.
#[derive(Clone)]
pub struct SourceHandle(Arc<SourceInfo>);

impl SourceHandle {
    pub fn new(name: impl Into<String>, pixel_type: Option<String>) -> Self {
        Self(Arc::new(SourceInfo {
            name: name.into(),
            pixel_type,
        }))
    }

    /// A source without pixel data, used as a stand-in until real data arrives.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// The intrinsic name. Not necessarily unique; see `NameRegistry`.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn pixel_type(&self) -> Option<&str> {
        self.0.pixel_type.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.pixel_type.is_none()
    }
}

impl PartialEq for SourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SourceHandle {}

impl Hash for SourceHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceHandle({:?}@{:p})", self.0.name, Arc::as_ptr(&self.0))
    }
}

#[derive(Debug)]
struct GroupToken {
    label: String,
}

/// Identity of one source group. The live name, activity and membership
/// are held by the model; the handle only carries the label it was created with.
#[derive(Clone)]
pub struct GroupHandle(Arc<GroupToken>);

impl GroupHandle {
    pub fn new(label: impl Into<String>) -> Self {
        Self(Arc::new(GroupToken {
            label: label.into(),
        }))
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }
}

impl PartialEq for GroupHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for GroupHandle {}

impl Hash for GroupHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupHandle({:?}@{:p})", self.0.label, Arc::as_ptr(&self.0))
    }
}
