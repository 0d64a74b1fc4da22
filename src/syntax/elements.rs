//! Declaration nodes of the structured source tree.

use super::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualifier marking a resource-style (field access) method.
pub const RESOURCE: &str = "resource";
/// Qualifier marking a remote-style (action) method.
pub const REMOTE: &str = "remote";
/// Accessor of pull-style resource methods.
pub const GET: &str = "get";
/// Accessor of push-style resource methods.
pub const SUBSCRIBE: &str = "subscribe";

/// Module is the root of a structured source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Declaration>,
}

/// Declaration is one module-level member. Every kind the engine knows is a
/// variant here; constructs it has no comparator for travel as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// Service contract type (`type Api service object { ... }`).
    ServiceObject(ObjectTypeDef),
    /// Interface type descriptor (`type Info distinct service object { ... }`).
    Interface(ObjectTypeDef),
    /// Service class with implemented resolver functions.
    Class(ClassDef),
    /// Record type, either an output record or an input type.
    Record(RecordDef),
    Enum(EnumDef),
    Union(UnionDef),
    Import(ImportDecl),
    Other(OtherDecl),
}

/// DeclarationKind is the tag of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    ServiceObject,
    Interface,
    Class,
    Record,
    Enum,
    Union,
    Import,
    Other,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::ServiceObject => "service object",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Class => "service class",
            DeclarationKind::Record => "record type",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Union => "union type",
            DeclarationKind::Import => "import",
            DeclarationKind::Other => "other",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Declaration {
    /// Returns the name siblings are matched by.
    pub fn name(&self) -> &str {
        match self {
            Declaration::ServiceObject(def) | Declaration::Interface(def) => &def.name,
            Declaration::Class(def) => &def.name,
            Declaration::Record(def) => &def.name,
            Declaration::Enum(def) => &def.name,
            Declaration::Union(def) => &def.name,
            Declaration::Import(decl) => &decl.module,
            Declaration::Other(decl) => &decl.name,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::ServiceObject(_) => DeclarationKind::ServiceObject,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Record(_) => DeclarationKind::Record,
            Declaration::Enum(_) => DeclarationKind::Enum,
            Declaration::Union(_) => DeclarationKind::Union,
            Declaration::Import(_) => DeclarationKind::Import,
            Declaration::Other(_) => DeclarationKind::Other,
        }
    }
}

/// Metadata is documentation and annotations attached to a declaration.
/// It takes part in equality but never in breaking-change decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

/// ObjectTypeDef is an object type whose members are method declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectTypeDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    pub name: String,

    /// Included types (`*graphql:Service`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDeclaration>,
}

/// ClassDef is a service class whose members carry implementation bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Class qualifiers (`isolated`, `distinct`, `service`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inclusions: Vec<String>,

    /// Object fields (`private final string name;`), developer-owned state.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionDefinition>,
}

/// MethodDeclaration is a method without a body.
///
/// Resource-style methods are named by their relative resource path and their
/// `name` holds the accessor (`get`, `subscribe`); other methods are named by
/// `name` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<String>,

    pub name: String,

    #[serde(default, rename = "path", skip_serializing_if = "Vec::is_empty")]
    pub resource_path: Vec<String>,

    #[serde(flatten)]
    pub signature: FunctionSignature,
}

impl MethodDeclaration {
    /// Returns the name the method is matched by.
    pub fn key(&self) -> String {
        if self.resource_path.is_empty() {
            self.name.clone()
        } else {
            self.resource_path.join("/")
        }
    }

    /// Returns the qualifier that decides the resolver category.
    pub fn main_qualifier(&self) -> Option<&str> {
        self.qualifiers
            .iter()
            .map(String::as_str)
            .find(|q| *q == RESOURCE || *q == REMOTE)
    }

    pub fn is_resource(&self) -> bool {
        self.main_qualifier() == Some(RESOURCE)
    }

    /// Returns the resolver kind, which only resource-style methods have.
    pub fn resolver_kind(&self) -> Option<ResolverKind> {
        if !self.is_resource() {
            return None;
        }
        match self.name.as_str() {
            GET => Some(ResolverKind::Get),
            SUBSCRIBE => Some(ResolverKind::Subscribe),
            _ if self.signature.return_type.as_ref().is_some_and(TypeDescriptor::is_stream) => {
                Some(ResolverKind::Subscribe)
            }
            _ => Some(ResolverKind::Get),
        }
    }
}

/// ResolverKind tells whether a method answers once or emits a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    /// Pull-style; answers a single request.
    Get,
    /// Push-style; emits values over time.
    Subscribe,
}

impl ResolverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverKind::Get => GET,
            ResolverKind::Subscribe => SUBSCRIBE,
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FunctionDefinition is a method declaration with a developer-owned body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(flatten)]
    pub declaration: MethodDeclaration,

    /// Raw source of the function body, braces included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl FunctionDefinition {
    pub fn key(&self) -> String {
        self.declaration.key()
    }
}

/// FunctionSignature is a parameter list plus an optional return type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, rename = "returns", skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeDescriptor>,
}

/// Parameter of a method or function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,

    pub name: String,

    #[serde(rename = "type")]
    pub param_type: TypeDescriptor,

    /// Literal source text of the default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// RecordFlavor tells output records apart from input types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFlavor {
    #[default]
    Record,
    Input,
}

impl RecordFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFlavor::Record => "record type",
            RecordFlavor::Input => "input type",
        }
    }
}

fn is_default_flavor(flavor: &RecordFlavor) -> bool {
    *flavor == RecordFlavor::Record
}

/// RecordDef is a record type descriptor bound to a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    pub name: String,

    #[serde(default, skip_serializing_if = "is_default_flavor")]
    pub flavor: RecordFlavor,

    /// Closed records (`record {| ... |}`).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// Field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,

    pub name: String,

    #[serde(rename = "type")]
    pub field_type: TypeDescriptor,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// EnumDef is an enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<EnumMember>,
}

/// EnumMember is one enumerator, optionally with an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// UnionDef binds a name to a union type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    pub name: String,

    #[serde(rename = "type")]
    pub descriptor: TypeDescriptor,
}

impl UnionDef {
    /// Returns the member type names with nested compositions flattened.
    pub fn member_names(&self) -> Vec<String> {
        self.descriptor.union_member_names()
    }
}

/// ImportDecl is a module import, keyed by its module path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportDecl {
    pub module: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// OtherDecl carries a construct the engine has no comparator for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtherDecl {
    /// What the construct is (`constant`, `listener`, `function`).
    pub construct: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}
