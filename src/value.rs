// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::mem;

use rand::distr::Alphanumeric;
use rand::distr::SampleString;
use rand::rng;
use rand::Rng;

use crate::constants::*;

/// The type tag of a [`Value`].
///
/// Booleans are split into `False` and `True` so that the tag alone
/// identifies a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => TYPE_NULL,
            ValueType::False | ValueType::True => TYPE_BOOLEAN,
            ValueType::Number => TYPE_NUMBER,
            ValueType::String => TYPE_STRING,
            ValueType::Array => TYPE_ARRAY,
            ValueType::Object => TYPE_OBJECT,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a JSON value.
///
/// Numbers are always stored as `f64`, integers and floats share the same
/// representation. Strings hold fully decoded text. Arrays and objects own
/// their children exclusively.
#[derive(Clone, Default)]
pub enum Value {
    /// Represents a JSON null value
    #[default]
    Null,
    /// Represents a JSON boolean value (true or false)
    Bool(bool),
    /// Represents a JSON number value
    Number(f64),
    /// Represents a JSON string value
    String(String),
    /// Represents a JSON array of values
    Array(Vec<Value>),
    /// Represents a JSON object as insertion-ordered members
    Object(Object),
}

/// A key/value pair of an [`Object`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Member {
    pub key: String,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<String>, value: Value) -> Member {
        Member {
            key: key.into(),
            value,
        }
    }
}

/// The members of a JSON object, kept in insertion order.
///
/// Duplicate keys are allowed, lookups return the first match.
#[derive(Clone, Default)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    pub fn new() -> Object {
        Object {
            members: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Object {
        Object {
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the key of the member at `index`, `None` if out of range.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.members.get(index).map(|m| m.key.as_str())
    }

    /// Returns the value of the member at `index`, `None` if out of range.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.members.get(index).map(|m| &m.value)
    }

    pub fn value_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.members.get_mut(index).map(|m| &mut m.value)
    }

    /// Returns the index of the first member named `key`.
    pub fn find_index(&self, key: &str) -> Option<usize> {
        self.members.iter().position(|m| m.key == key)
    }

    pub fn find_value(&self, key: &str) -> Option<&Value> {
        self.find_index(key).map(|i| &self.members[i].value)
    }

    pub fn find_value_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.find_index(key) {
            Some(i) => Some(&mut self.members[i].value),
            None => None,
        }
    }

    /// Returns the value of the first member named `key`, appending a
    /// `Null` member if there is none.
    pub fn set_value(&mut self, key: &str) -> &mut Value {
        let index = match self.find_index(key) {
            Some(i) => i,
            None => {
                self.members.push(Member::new(key, Value::Null));
                self.members.len() - 1
            }
        };
        &mut self.members[index].value
    }

    /// Appends a member without checking for an existing key.
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.members.push(Member::new(key, value));
    }

    /// Removes and returns the member at `index`, keeping the order of the
    /// remaining members.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Member {
        let len = self.members.len();
        assert!(
            index < len,
            "member index {index} out of range for object of size {len}"
        );
        self.members.remove(index)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Member> {
        self.members.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.key.as_str())
    }

    pub fn as_slice(&self) -> &[Member] {
        &self.members
    }
}

impl PartialEq for Object {
    /// Objects compare as sets: the sizes must match and every member on
    /// either side must find an equal value under the same key on the other.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.members
            .iter()
            .all(|m| other.find_value(&m.key) == Some(&m.value))
            && other
                .members
                .iter()
                .all(|m| self.find_value(&m.key) == Some(&m.value))
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.members.iter().map(|m| (&m.key, &m.value)))
            .finish()
    }
}

impl IntoIterator for Object {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object {
            members: iter
                .into_iter()
                .map(|(k, v)| Member::new(k, v.into()))
                .collect(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(v1), Value::Bool(v2)) => v1 == v2,
            (Value::Number(v1), Value::Number(v2)) => v1 == v2,
            (Value::String(v1), Value::String(v2)) => v1 == v2,
            (Value::Array(arr1), Value::Array(arr2)) => arr1 == arr2,
            (Value::Object(obj1), Value::Object(obj2)) => obj1 == obj2,
            (_, _) => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match *self {
            Value::Null => formatter.debug_tuple("Null").finish(),
            Value::Bool(v) => formatter.debug_tuple("Bool").field(&v).finish(),
            Value::Number(v) => formatter.debug_tuple("Number").field(&v).finish(),
            Value::String(ref v) => formatter.debug_tuple("String").field(v).finish(),
            Value::Array(ref v) => {
                formatter.write_str("Array(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
            Value::Object(ref v) => {
                formatter.write_str("Object(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
        }
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(false) => ValueType::False,
            Value::Bool(true) => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_object()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_v))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(ref obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(ref mut obj) => Some(obj),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_v))
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(ref array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(ref mut array) => Some(array),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_v))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_null(&self) -> Option<()> {
        match self {
            Value::Null => Some(()),
            _ => None,
        }
    }

    pub fn array_length(&self) -> Option<usize> {
        match self {
            Value::Array(arr) => Some(arr.len()),
            _ => None,
        }
    }

    pub fn object_length(&self) -> Option<usize> {
        match self {
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Returns the value stored under `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.find_value(key))
    }

    /// Returns the element at `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Resets the value to `Null`, releasing any owned payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, v: bool) {
        *self = Value::Bool(v);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    /// Replaces the value with an empty array and returns it.
    pub fn set_array(&mut self) -> &mut Vec<Value> {
        *self = Value::Array(Vec::new());
        match self {
            Value::Array(arr) => arr,
            _ => unreachable!(),
        }
    }

    /// Replaces the value with an empty object and returns it.
    pub fn set_object(&mut self) -> &mut Object {
        *self = Value::Object(Object::new());
        match self {
            Value::Object(obj) => obj,
            _ => unreachable!(),
        }
    }

    /// Replaces this value with a deep copy of `src`.
    pub fn copy_from(&mut self, src: &Value) {
        self.clone_from(src);
    }

    /// Takes the payload of `src`, leaving `src` as `Null`.
    pub fn move_from(&mut self, src: &mut Value) {
        *self = mem::take(src);
    }

    /// Exchanges the payload of two values.
    pub fn swap_with(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }

    /// generate random JSON value
    pub fn rand_value() -> Value {
        let mut rng = rng();
        let val = match rng.random_range(0..=2) {
            0 => {
                let len = rng.random_range(0..=5);
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(Self::rand_scalar_value());
                }
                Value::Array(values)
            }
            1 => {
                let len = rng.random_range(0..=5);
                let mut obj = Object::with_capacity(len);
                for _ in 0..len {
                    let k = Alphanumeric.sample_string(&mut rng, 5);
                    let v = Self::rand_scalar_value();
                    obj.push(k, v);
                }
                Value::Object(obj)
            }
            _ => Self::rand_scalar_value(),
        };
        val
    }

    fn rand_scalar_value() -> Value {
        let mut rng = rng();
        let val = match rng.random_range(0..=3) {
            0 => {
                let v = rng.random_bool(0.5);
                Value::Bool(v)
            }
            1 => {
                let s = Alphanumeric.sample_string(&mut rng, 5);
                Value::String(s)
            }
            2 => match rng.random_range(0..=10) {
                0..=5 => {
                    let n: i64 = rng.random_range(-100000..=100000);
                    Value::Number(n as f64)
                }
                _ => {
                    let n: f64 = rng.random_range(-4000.0..1.3e5);
                    Value::Number(n)
                }
            },
            _ => Value::Null,
        };
        val
    }
}
