use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use kube::api::{
    ApiResource,
    GroupVersionKind,
};
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

// GVK is a "newtype" wrapper around the GroupVersionKind object that lets us provide custom
// serialization and parsing, so that kinds can be named on the command line or in config files.
//
// The textual format is "group/version.kind" (or just "version.kind" for the core group; we
// also accept "/version.kind" when parsing).
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct GVK(GroupVersionKind);

impl GVK {
    pub fn new(group: &str, version: &str, kind: &str) -> GVK {
        GVK(GroupVersionKind::gvk(group, version, kind))
    }

    pub fn from_resource<K: kube::Resource<DynamicType = ()>>() -> GVK {
        GVK::new(&K::group(&()), &K::version(&()), &K::kind(&()))
    }

    // For kinds whose plural isn't what discovery would guess (or where we want to skip
    // discovery entirely), build the ApiResource directly.
    pub fn to_api_resource(&self, plural: &str) -> ApiResource {
        ApiResource::from_gvk_with_plural(&self.0, plural)
    }
}

// Impl Deref lets a GVK act like a GroupVersionKind anywhere one of those is expected
impl Deref for GVK {
    type Target = GroupVersionKind;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVK {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut group = Cow::from(&self.0.group);
        if !group.is_empty() {
            group.to_mut().push('/');
        }

        write!(f, "{group}{}.{}", self.0.version, self.0.kind)
    }
}

impl std::str::FromStr for GVK {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (group, rest) = match value.split('/').collect::<Vec<_>>()[..] {
            [group, rest] => (group, rest),
            [rest] => ("", rest),
            _ => return Err(format!("invalid format for gvk: {value}")),
        };

        // Group names are full of dots, but by this point we've already stripped the group off
        match rest.split_once('.') {
            Some((version, kind)) if !version.is_empty() && !kind.is_empty() && !kind.contains('.') => {
                Ok(GVK::new(group, version, kind))
            },
            _ => Err(format!("invalid format for gvk: {value}")),
        }
    }
}

impl Serialize for GVK {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // reuse the display impl for serializing
        serializer.serialize_str(&format!("{self}"))
    }
}

struct GVKVisitor;

impl<'de> de::Visitor<'de> for GVKVisitor {
    type Value = GVK;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a GroupVersionKind in the format group/version.kind")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for GVK {
    fn deserialize<D>(deserializer: D) -> Result<GVK, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(GVKVisitor)
    }
}
