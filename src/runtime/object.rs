use core::fmt;
use core::ptr;
use std::rc::Rc;
use std::collections::HashMap;
use static_assertions::const_assert_eq;
use crate::utils;
use crate::language::IntType;
use crate::builtins::Builtin;
use crate::runtime::DefaultBuildHasher;
use crate::runtime::function::Function;
use crate::runtime::hashkey::{self, HashKey, HashPair};
use crate::runtime::errors::RuntimeError;


pub type MapStore = HashMap<HashKey, HashPair, DefaultBuildHasher>;

#[cfg(target_pointer_width = "64")]
const_assert_eq!(core::mem::size_of::<Object>(), 24);


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    String,
    Null,
    List,
    Map,
    Function,
    Builtin,
    ReturnValue,
    Error,
}

impl ObjectType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Null => "NULL",
            Self::List => "LIST",
            Self::Map => "MAP",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}


/// Runtime value. Collections are shared and never mutated after construction.
#[derive(Debug, Clone)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(IntType),
    String(Rc<str>),

    List(Rc<Vec<Object>>),
    Map(Rc<MapStore>),

    Function(Rc<Function>),
    Builtin(&'static Builtin),

    // control sentinels, never stored in a binding or collection
    ReturnValue(Box<Object>),
    Error(Rc<RuntimeError>),
}

impl From<bool> for Object {
    fn from(value: bool) -> Self { Object::Boolean(value) }
}

impl From<IntType> for Object {
    fn from(value: IntType) -> Self { Object::Integer(value) }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self { Object::String(value.into()) }
}

impl From<String> for Object {
    fn from(value: String) -> Self { Object::String(value.into()) }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self { Object::List(Rc::new(items)) }
}

impl From<Box<RuntimeError>> for Object {
    fn from(error: Box<RuntimeError>) -> Self { Object::Error(Rc::from(error)) }
}

impl Object {
    pub fn type_tag(&self) -> ObjectType {
        match self {
            Self::Null => ObjectType::Null,
            Self::Boolean(..) => ObjectType::Boolean,
            Self::Integer(..) => ObjectType::Integer,
            Self::String(..) => ObjectType::String,
            Self::List(..) => ObjectType::List,
            Self::Map(..) => ObjectType::Map,
            Self::Function(..) => ObjectType::Function,
            Self::Builtin(..) => ObjectType::Builtin,
            Self::ReturnValue(..) => ObjectType::ReturnValue,
            Self::Error(..) => ObjectType::Error,
        }
    }

    /// Only `null` and `false` are falsy
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

    pub fn is_error(&self) -> bool { matches!(self, Self::Error(..)) }

    /// The equality used by `==` for everything except integers.
    /// Null and booleans compare by value, the rest by reference.
    pub fn is_identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b),
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// `None` if the value can't be used as a map key
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(value) => *value as u64,
            Self::Boolean(value) => u64::from(*value),
            Self::String(value) => hashkey::fnv1a_64(value.as_bytes()),
            _ => return None,
        };
        Some(HashKey::new(self.type_tag(), value))
    }

    pub fn as_list(&self) -> Option<&[Object]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(&**value),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&RuntimeError> {
        match self {
            Self::Error(error) => Some(&**error),
            _ => None,
        }
    }

    /// The human readable form, also used by `puts`
    pub fn inspect(&self) -> String { self.to_string() }
}

impl fmt::Display for Object {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => fmt.write_str("null"),
            Self::Boolean(value) => write!(fmt, "{}", value),
            Self::Integer(value) => write!(fmt, "{}", value),
            Self::String(value) => fmt.write_str(value),
            Self::List(items) => write!(fmt, "[{}]", utils::fmt_join(", ", items.as_slice())),
            Self::Map(store) => {
                fmt.write_str("{")?;
                for (idx, pair) in store.values().enumerate() {
                    if idx > 0 {
                        fmt.write_str(", ")?;
                    }
                    write!(fmt, "{}: {}", pair.key, pair.value)?;
                }
                fmt.write_str("}")
            }
            Self::Function(function) => write!(fmt, "{}", function),
            Self::Builtin(..) => fmt.write_str("builtin function"),
            Self::ReturnValue(value) => write!(fmt, "{}", value),
            Self::Error(error) => write!(fmt, "ERROR: {}", error),
        }
    }
}
