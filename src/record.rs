//! Registro ordenado de campos de metadata.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const INFO_KEY: &str = "info";
pub const ERROR_KEY: &str = "error";
pub const NO_METADATA: &str = "No metadata available";

/// Par campo → valor tal como se muestra al usuario.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

/// Mapeo campo → valor que conserva el orden de inserción.
///
/// Insertar un campo ya existente reemplaza su valor en la posición original.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MetadataRecord {
    fields: Vec<MetadataField>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registro con una única entrada informativa.
    pub fn info(message: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(INFO_KEY, message);
        record
    }

    /// Registro con una única entrada de error.
    pub fn error(message: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(ERROR_KEY, message);
        record
    }

    pub fn no_metadata() -> Self {
        Self::info(NO_METADATA)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(MetadataField { name, value }),
        }
    }

    pub fn extend(&mut self, other: MetadataRecord) {
        for field in other.fields {
            self.insert(field.name, field.value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetadataField> {
        self.fields.iter()
    }

    /// Verdadero si el registro es una entrada centinela (`info` o `error`).
    pub fn is_sentinel(&self) -> bool {
        self.fields.len() == 1 && (self.contains(INFO_KEY) || self.contains(ERROR_KEY))
    }

    /// Sustituye un registro vacío por el centinela genérico.
    pub fn or_no_metadata(self) -> Self {
        if self.is_empty() {
            Self::no_metadata()
        } else {
            self
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MetadataRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}
