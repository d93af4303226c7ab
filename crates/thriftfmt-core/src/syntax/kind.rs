//! Grammar kinds for Thrift IDL syntax nodes
//!
//! The set is closed: every rule the Thrift grammar produces has exactly one
//! variant here, plus [`SyntaxKind::Terminal`] for leaves and
//! [`SyntaxKind::Error`] for the parser's error-recovery nodes.

use std::fmt;

/// Kind of a syntax tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    // Top level
    Document,
    Header,
    Include,
    CppInclude,
    Namespace,
    Definition,

    // Definitions
    Const,
    Typedef,
    Enum,
    EnumField,
    Senum,
    Struct,
    Union,
    Exception,
    Service,

    // Functions
    Function,
    Oneway,
    FunctionType,
    ThrowsList,

    // Fields
    Field,
    FieldId,
    FieldReq,
    FieldType,

    // Types
    BaseType,
    RealBaseType,
    ContainerType,
    MapType,
    SetType,
    ListType,
    CppType,

    // Constant values
    ConstValue,
    Integer,
    ConstList,
    ConstMap,
    ConstMapEntry,

    // Annotations
    TypeAnnotations,
    TypeAnnotation,
    AnnotationValue,

    ListSeparator,

    /// Leaf wrapping exactly one token
    Terminal,

    /// Error-recovery node produced by the parser
    Error,
}

impl SyntaxKind {
    /// Stable name of the kind, used as the alignment role key
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::Document => "document",
            SyntaxKind::Header => "header",
            SyntaxKind::Include => "include",
            SyntaxKind::CppInclude => "cpp_include",
            SyntaxKind::Namespace => "namespace",
            SyntaxKind::Definition => "definition",
            SyntaxKind::Const => "const",
            SyntaxKind::Typedef => "typedef",
            SyntaxKind::Enum => "enum",
            SyntaxKind::EnumField => "enum_field",
            SyntaxKind::Senum => "senum",
            SyntaxKind::Struct => "struct",
            SyntaxKind::Union => "union",
            SyntaxKind::Exception => "exception",
            SyntaxKind::Service => "service",
            SyntaxKind::Function => "function",
            SyntaxKind::Oneway => "oneway",
            SyntaxKind::FunctionType => "function_type",
            SyntaxKind::ThrowsList => "throws_list",
            SyntaxKind::Field => "field",
            SyntaxKind::FieldId => "field_id",
            SyntaxKind::FieldReq => "field_req",
            SyntaxKind::FieldType => "field_type",
            SyntaxKind::BaseType => "base_type",
            SyntaxKind::RealBaseType => "real_base_type",
            SyntaxKind::ContainerType => "container_type",
            SyntaxKind::MapType => "map_type",
            SyntaxKind::SetType => "set_type",
            SyntaxKind::ListType => "list_type",
            SyntaxKind::CppType => "cpp_type",
            SyntaxKind::ConstValue => "const_value",
            SyntaxKind::Integer => "integer",
            SyntaxKind::ConstList => "const_list",
            SyntaxKind::ConstMap => "const_map",
            SyntaxKind::ConstMapEntry => "const_map_entry",
            SyntaxKind::TypeAnnotations => "type_annotations",
            SyntaxKind::TypeAnnotation => "type_annotation",
            SyntaxKind::AnnotationValue => "annotation_value",
            SyntaxKind::ListSeparator => "list_separator",
            SyntaxKind::Terminal => "terminal",
            SyntaxKind::Error => "error",
        }
    }

    /// Kinds that always get a blank line before them inside a block
    pub fn is_always_blank_line_separated(self) -> bool {
        matches!(
            self,
            SyntaxKind::EnumField
                | SyntaxKind::Struct
                | SyntaxKind::Union
                | SyntaxKind::Exception
                | SyntaxKind::Service
        )
    }

    /// Wrapper kinds that only carry a single child
    pub fn is_wrapper(self) -> bool {
        matches!(self, SyntaxKind::Header | SyntaxKind::Definition)
    }

    /// Field or enum field
    pub fn is_field_like(self) -> bool {
        matches!(self, SyntaxKind::Field | SyntaxKind::EnumField)
    }

    /// Parents whose fields render inline (parameter and throws lists)
    pub fn is_inline_field_list(self) -> bool {
        matches!(self, SyntaxKind::Function | SyntaxKind::ThrowsList)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
