//! Metric record model
//!
//! A [`MetricRecord`] is one metric definition as it appears in a catalog
//! snapshot. Optional attributes use the empty value (empty string, empty
//! collection, zero) as their "absent" state; there is no separate null.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::identity::metric_key;

/// One versioned metric definition.
///
/// Field order matches the serialized catalog layout so that record dumps
/// read the same way the catalogs do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub subsystem: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub help: String,
    /// Type tag (`counter`, `gauge`, `histogram`, `summary`, ...)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub metric_type: String,
    /// Empty means "not deprecated"
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub deprecated_version: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub stability_level: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub buckets: Vec<f64>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Objectives::is_empty"
    )]
    pub objectives: Objectives,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero_u32"
    )]
    pub age_buckets: u32,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero_u32"
    )]
    pub buf_cap: u32,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero_i64"
    )]
    pub max_age: i64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub const_labels: BTreeMap<String, String>,
}

impl MetricRecord {
    /// Create a record with only a name; every other attribute is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The identity key joining this record across snapshots.
    pub fn key(&self) -> String {
        metric_key(&self.namespace, &self.subsystem, &self.name)
    }
}

/// Summary objectives: quantile → allowed error.
///
/// Kept as pairs sorted by quantile since `f64` has no total order usable
/// as a map key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Objectives(Vec<(f64, f64)>);

impl Objectives {
    pub fn new(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut pairs: Vec<(f64, f64)> = pairs.into_iter().collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.0.iter()
    }
}

impl Serialize for Objectives {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(q, e)| (QuantileKey(*q), e)))
    }
}

/// Map key for a quantile: a float where the format allows it.
///
/// YAML writes `0.5: 0.05`; JSON quotes finite float keys itself but
/// rejects non-finite ones, which fall back to their string form.
struct QuantileKey(f64);

impl Serialize for QuantileKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Objectives {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectivesVisitor;

        impl<'de> Visitor<'de> for ObjectivesVisitor {
            type Value = Objectives;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from quantile to allowed error")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((quantile, error)) = map.next_entry::<f64, f64>()? {
                    pairs.push((quantile, error));
                }
                Ok(Objectives::new(pairs))
            }
        }

        deserializer.deserialize_map(ObjectivesVisitor)
    }
}

/// Treat an explicit YAML `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}
