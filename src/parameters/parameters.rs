use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Error deserializing parameters")]
    Deserialize(#[from] toml::de::Error),

    #[error("Error serializing parameter '{path}': {reason}")]
    Serialize { path: String, reason: String },

    #[error("Parameter toml does not have the right structure (error in '{0}')")]
    BadToml(String),

    #[error("Element '{path}' not found")]
    NotFound { path: String },

    #[error("Cannot cast parameter '{path}' to {dtype}")]
    BadCast { path: String, dtype: String },

    #[error("Element '{path}' is not a parameter")]
    NotAParameter { path: String },

    #[error("Element '{path}' is not a map")]
    NotAMap { path: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ParameterValue {
    #[serde(rename = "bool")]
    Bool { val: bool },
    #[serde(rename = "int")]
    Int { val: i64 },
    #[serde(rename = "float")]
    Float { val: f64 },
    #[serde(rename = "str")]
    String { val: String },

    #[serde(rename = "float[]")]
    FloatArray { val: Vec<f64> },
}

impl ParameterValue {
    pub fn bool(val: bool) -> Self {
        Self::Bool { val }
    }

    pub fn int(val: i64) -> Self {
        Self::Int { val }
    }

    pub fn float(val: f64) -> Self {
        Self::Float { val }
    }

    pub fn string(val: impl Into<String>) -> Self {
        Self::String { val: val.into() }
    }

    pub fn float_arr(val: &[f64]) -> Self {
        Self::FloatArray { val: val.to_vec() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    path: String,
    value: ParameterValue,
}

impl Parameter {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value_bool(&self) -> Result<bool, Error> {
        if let ParameterValue::Bool { val } = self.value {
            Ok(val)
        } else {
            Err(self.bad_cast("bool"))
        }
    }

    pub fn value_int(&self) -> Result<i64, Error> {
        if let ParameterValue::Int { val } = self.value {
            Ok(val)
        } else {
            Err(self.bad_cast("int"))
        }
    }

    pub fn value_float(&self) -> Result<f64, Error> {
        if let ParameterValue::Float { val } = self.value {
            Ok(val)
        } else {
            Err(self.bad_cast("float"))
        }
    }

    pub fn value_string(&self) -> Result<String, Error> {
        if let ParameterValue::String { val } = &self.value {
            Ok(val.clone())
        } else {
            Err(self.bad_cast("str"))
        }
    }

    pub fn value_float_arr(&self) -> Result<&[f64], Error> {
        if let ParameterValue::FloatArray { val } = &self.value {
            Ok(val)
        } else {
            Err(self.bad_cast("float[]"))
        }
    }

    fn bad_cast(&self, dtype: &str) -> Error {
        Error::BadCast {
            path: self.path.clone(),
            dtype: dtype.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterMap {
    path: String,
    map: BTreeMap<String, ParameterTree>,
}

static EMPTY_MAP: ParameterMap = ParameterMap {
    path: String::new(),
    map: BTreeMap::new(),
};

impl ParameterMap {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, rel_path: &str) -> Result<&ParameterTree, Error> {
        let not_found = || Error::NotFound {
            path: append_path(&self.path, rel_path),
        };
        let (head, rest) = rel_path.split_once(".").unwrap_or((rel_path, ""));

        let mut elem = self.map.get(head).ok_or_else(not_found)?;

        for part in rest.split(".").filter(|p| !p.is_empty()) {
            match elem {
                ParameterTree::Node(n) => {
                    elem = n.map.get(part).ok_or_else(not_found)?;
                }
                ParameterTree::Leaf(_) => return Err(not_found()),
            }
        }

        Ok(elem)
    }

    pub fn get_param(&self, rel_path: &str) -> Result<&Parameter, Error> {
        self.get(rel_path)?.as_param()
    }

    pub fn get_map(&self, rel_path: &str) -> Result<&ParameterMap, Error> {
        self.get(rel_path)?.as_map()
    }

    /// Like [`get_map`](Self::get_map), but a missing map reads as empty.
    pub fn get_map_or_empty(&self, rel_path: &str) -> Result<&ParameterMap, Error> {
        match self.get_map(rel_path) {
            Err(Error::NotFound { .. }) => Ok(&EMPTY_MAP),
            other => other,
        }
    }

    pub fn get_float_or(&self, rel_path: &str, default: f64) -> Result<f64, Error> {
        self.get_or(rel_path, default, Parameter::value_float)
    }

    pub fn get_int_or(&self, rel_path: &str, default: i64) -> Result<i64, Error> {
        self.get_or(rel_path, default, Parameter::value_int)
    }

    pub fn get_bool_or(&self, rel_path: &str, default: bool) -> Result<bool, Error> {
        self.get_or(rel_path, default, Parameter::value_bool)
    }

    pub fn get_string_or(&self, rel_path: &str, default: &str) -> Result<String, Error> {
        self.get_or(rel_path, default.to_string(), Parameter::value_string)
    }

    pub fn get_float_arr_or(&self, rel_path: &str, default: &[f64]) -> Result<Vec<f64>, Error> {
        self.get_or(rel_path, default.to_vec(), |p| {
            p.value_float_arr().map(|v| v.to_vec())
        })
    }

    fn get_or<T>(
        &self,
        rel_path: &str,
        default: T,
        cast: impl FnOnce(&Parameter) -> Result<T, Error>,
    ) -> Result<T, Error> {
        match self.get_param(rel_path) {
            Ok(param) => cast(param),
            Err(Error::NotFound { .. }) => Ok(default),
            Err(e) => Err(e),
        }
    }

    /// Inserts a parameter, creating intermediate maps as needed. An existing
    /// element at the same path is replaced.
    pub fn insert(&mut self, rel_path: &str, value: ParameterValue) -> Result<(), Error> {
        let path = append_path(&self.path, rel_path);

        match rel_path.split_once(".") {
            None => {
                self.map.insert(
                    rel_path.to_string(),
                    ParameterTree::Leaf(Parameter { path, value }),
                );
                Ok(())
            }
            Some((head, tail)) => {
                let child_path = append_path(&self.path, head);
                let child = self
                    .map
                    .entry(head.to_string())
                    .or_insert_with(|| {
                        ParameterTree::Node(ParameterMap {
                            path: child_path,
                            map: BTreeMap::new(),
                        })
                    });

                match child {
                    ParameterTree::Node(map) => map.insert(tail, value),
                    ParameterTree::Leaf(p) => Err(Error::NotAMap {
                        path: p.path.clone(),
                    }),
                }
            }
        }
    }

    pub fn iter(&self) -> ParameterMapIter<'_> {
        ParameterMapIter {
            iter: self.map.iter(),
        }
    }

    pub fn to_table(&self) -> Result<Table, Error> {
        let mut table = Table::new();

        for (key, elem) in self.map.iter() {
            let value = match elem {
                ParameterTree::Node(map) => Value::Table(map.to_table()?),
                ParameterTree::Leaf(param) => {
                    Value::try_from(&param.value).map_err(|e| Error::Serialize {
                        path: param.path.clone(),
                        reason: e.to_string(),
                    })?
                }
            };
            table.insert(key.clone(), value);
        }

        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string(&self.to_table()?).map_err(|e| Error::Serialize {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

#[derive(Default)]
pub struct ParameterMapIter<'a> {
    iter: btree_map::Iter<'a, String, ParameterTree>,
}

impl<'a> Iterator for ParameterMapIter<'a> {
    type Item = (&'a String, &'a ParameterTree);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterTree {
    Node(ParameterMap),
    Leaf(Parameter),
}

impl Default for ParameterTree {
    fn default() -> Self {
        ParameterTree::Node(ParameterMap::default())
    }
}

impl ParameterTree {
    pub fn as_param(&self) -> Result<&Parameter, Error> {
        match self {
            Self::Leaf(p) => Ok(p),
            Self::Node(m) => Err(Error::NotAParameter {
                path: m.path.clone(),
            }),
        }
    }

    pub fn as_map(&self) -> Result<&ParameterMap, Error> {
        match self {
            Self::Node(m) => Ok(m),
            Self::Leaf(p) => Err(Error::NotAMap {
                path: p.path.clone(),
            }),
        }
    }
}

pub fn parse_string(toml_str: String) -> Result<ParameterMap, Error> {
    let table = toml::from_str::<Table>(toml_str.as_str())?;

    parse_table_recursive(table, "".to_string())
}

fn parse_table_recursive(table: Table, root: String) -> Result<ParameterMap, Error> {
    let mut nodes = BTreeMap::new();

    for (key, val) in table.into_iter() {
        let path = append_path(root.as_str(), key.as_str());
        match val {
            Value::Table(val) => {
                if let Ok(value) = val.clone().try_into::<ParameterValue>() {
                    let param = Parameter { path, value };
                    nodes.insert(key, ParameterTree::Leaf(param));
                } else {
                    nodes.insert(key, ParameterTree::Node(parse_table_recursive(val, path)?));
                }
            }
            _ => {
                return Err(Error::BadToml(root));
            }
        }
    }

    Ok(ParameterMap {
        path: root.clone(),
        map: nodes,
    })
}

fn append_path(root: &str, key: &str) -> String {
    format!("{root}.{key}")
}
