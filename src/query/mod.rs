//! Typed GraphQL query documents.
//!
//! Subgraph batch queries are a single anonymous-shape document holding one
//! aliased field per input (`t1700000000: blocks(...) { number }`). Building
//! those as an AST instead of by string concatenation keeps argument escaping
//! in one place and lets tests inspect exactly which aliases a request asked for.

pub mod alias;

use std::fmt::{self, Write as _};

/// A named GraphQL query operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Document {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Aliases of the top-level fields, in request order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| f.alias.as_deref())
    }
}

/// A field selection with optional alias, arguments and sub-selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub args: Vec<(String, Value)>,
    pub selection: Vec<Field>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            args: Vec::new(),
            selection: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    pub fn select(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.selection.extend(fields);
        self
    }

    /// Look up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.args.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}

/// A GraphQL input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Str(String),
    /// Bare enum literal, e.g. `desc`.
    Enum(String),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn enum_literal(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a key inside an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query {} {{", self.name)?;
        for field in &self.fields {
            write_field(f, field, 1)?;
        }
        write!(f, "}}")
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &Field, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    f.write_str(&indent)?;
    if let Some(alias) = &field.alias {
        write!(f, "{}: ", alias)?;
    }
    f.write_str(&field.name)?;
    if !field.args.is_empty() {
        f.write_char('(')?;
        write_entries(f, &field.args)?;
        f.write_char(')')?;
    }
    if field.selection.is_empty() {
        return f.write_char('\n');
    }
    f.write_str(" {\n")?;
    for child in &field.selection {
        write_field(f, child, depth + 1)?;
    }
    writeln!(f, "{}}}", indent)
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[(String, Value)]) -> fmt::Result {
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Enum(e) => f.write_str(e),
            Value::Str(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
            Value::Object(entries) => {
                f.write_char('{')?;
                write_entries(f, entries)?;
                f.write_char('}')
            }
        }
    }
}
