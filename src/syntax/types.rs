//! Type descriptors as they appear in declarations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Keyword of the push-style return type.
pub const STREAM: &str = "stream";

/// TypeDescriptor is the structured form of a declared type.
///
/// It renders exactly as the source language writes it (`Book?`, `int?[]?`,
/// `stream<string>`, `A|B`) and parses back from that text, so two descriptors
/// are equal exactly when their rendered forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDescriptor {
    /// A plain or module-qualified type name (`string`, `graphql:Context`).
    Named(String),
    /// A type constructor with arguments (`stream<T>`, `map<T>`).
    Parameterized {
        base: String,
        args: Vec<TypeDescriptor>,
    },
    /// Nilable type (`T?`).
    Optional(Box<TypeDescriptor>),
    /// Array type (`T[]`).
    Array(Box<TypeDescriptor>),
    /// Union composition (`A|B`). Members may themselves be unions when the
    /// source groups them with parentheses.
    Union(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Creates a named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Wraps the type as nilable.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(inner))
    }

    /// Wraps the type as an array.
    pub fn array(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    /// Wraps the type in `stream<...>`.
    pub fn stream(item: TypeDescriptor) -> Self {
        TypeDescriptor::Parameterized {
            base: STREAM.to_string(),
            args: vec![item],
        }
    }

    /// Returns true for `stream<...>` types.
    pub fn is_stream(&self) -> bool {
        matches!(self, TypeDescriptor::Parameterized { base, .. } if base == STREAM)
    }

    /// Returns true for union compositions.
    pub fn is_union(&self) -> bool {
        matches!(self, TypeDescriptor::Union(_))
    }

    /// Returns true if this union has a member that is itself a union.
    pub fn is_nested_union(&self) -> bool {
        match self {
            TypeDescriptor::Union(members) => members.iter().any(TypeDescriptor::is_union),
            _ => false,
        }
    }

    /// Flattens nested union compositions into the rendered member names,
    /// in source order. A non-union type yields itself as the only member.
    pub fn union_member_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_union_members(&mut names);
        names
    }

    fn collect_union_members(&self, names: &mut Vec<String>) {
        match self {
            TypeDescriptor::Union(members) => {
                for member in members {
                    member.collect_union_members(names);
                }
            }
            other => names.push(other.to_string()),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Named(name) => write!(f, "{}", name),
            TypeDescriptor::Parameterized { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeDescriptor::Optional(inner) => {
                write_operand(f, inner)?;
                write!(f, "?")
            }
            TypeDescriptor::Array(inner) => {
                write_operand(f, inner)?;
                write!(f, "[]")
            }
            TypeDescriptor::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write_operand(f, member)?;
                }
                Ok(())
            }
        }
    }
}

// Unions bind looser than postfix operators and need grouping when nested.
fn write_operand(f: &mut fmt::Formatter<'_>, ty: &TypeDescriptor) -> fmt::Result {
    if ty.is_union() {
        write!(f, "({})", ty)
    } else {
        write!(f, "{}", ty)
    }
}

/// TypeParseError reports malformed type text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("empty type descriptor")]
    Empty,

    #[error("unexpected '{found}' at offset {offset} in type '{text}'")]
    Unexpected {
        text: String,
        offset: usize,
        found: char,
    },

    #[error("unexpected end of type '{text}'")]
    UnexpectedEnd { text: String },
}

impl FromStr for TypeDescriptor {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TypeParseError::Empty);
        }
        let mut parser = TypeParser { text: s, pos: 0 };
        let ty = parser.parse_union()?;
        parser.skip_whitespace();
        match parser.peek() {
            None => Ok(ty),
            Some(c) => Err(parser.unexpected(c)),
        }
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeDescriptor> for String {
    fn from(ty: TypeDescriptor) -> Self {
        ty.to_string()
    }
}

/// Recursive descent over:
///
/// ```text
/// union   := postfix ('|' postfix)*
/// postfix := primary ('?' | '[' ']')*
/// primary := '(' union ')' | ident ('<' union (',' union)* '>')?
/// ```
struct TypeParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn unexpected(&self, found: char) -> TypeParseError {
        TypeParseError::Unexpected {
            text: self.text.to_string(),
            offset: self.pos,
            found,
        }
    }

    fn end(&self) -> TypeParseError {
        TypeParseError::UnexpectedEnd {
            text: self.text.to_string(),
        }
    }

    fn expect(&mut self, want: char) -> Result<(), TypeParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.end()),
        }
    }

    fn parse_union(&mut self) -> Result<TypeDescriptor, TypeParseError> {
        let mut members = vec![self.parse_postfix()?];
        loop {
            self.skip_whitespace();
            if self.peek() != Some('|') {
                break;
            }
            self.bump();
            members.push(self.parse_postfix()?);
        }
        if members.len() == 1 {
            Ok(members.remove(0))
        } else {
            Ok(TypeDescriptor::Union(members))
        }
    }

    fn parse_postfix(&mut self) -> Result<TypeDescriptor, TypeParseError> {
        let mut ty = self.parse_primary()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('?') => {
                    self.bump();
                    ty = TypeDescriptor::optional(ty);
                }
                Some('[') => {
                    self.bump();
                    self.expect(']')?;
                    ty = TypeDescriptor::array(ty);
                }
                _ => return Ok(ty),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<TypeDescriptor, TypeParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.end()),
            Some('(') => {
                self.bump();
                let inner = self.parse_union()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some(c) if is_ident_char(c) => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if is_ident_char(c)) {
                    self.bump();
                }
                let name = self.text[start..self.pos].to_string();
                self.skip_whitespace();
                if self.peek() != Some('<') {
                    return Ok(TypeDescriptor::Named(name));
                }
                self.bump();
                let mut args = vec![self.parse_union()?];
                loop {
                    self.skip_whitespace();
                    match self.bump() {
                        Some(',') => args.push(self.parse_union()?),
                        Some('>') => break,
                        Some(c) => {
                            self.pos -= c.len_utf8();
                            return Err(self.unexpected(c));
                        }
                        None => return Err(self.end()),
                    }
                }
                Ok(TypeDescriptor::Parameterized { base: name, args })
            }
            Some(c) => Err(self.unexpected(c)),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '.' | '\'' | '\\')
}
