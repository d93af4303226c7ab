//! Fixture helpers that build parser output for formatter tests
//!
//! The helpers only emit tokens and nodes; source lines are left to the
//! caller (`b.newline()`), so comment placement stays under test control.

#![allow(dead_code)]

use thriftfmt_core::{ParserResult, SyntaxKind, TreeBuilder};

const BASE_TYPES: &[&str] = &[
    "bool", "byte", "i8", "i16", "i32", "i64", "double", "string", "binary", "uuid",
];

/// Wrap `build` in a document and close it with end-of-input
pub fn document(build: impl FnOnce(&mut TreeBuilder)) -> ParserResult {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::Document, |b| {
        build(b);
        b.eof();
    });
    builder.finish().expect("fixture tree is well formed")
}

pub fn include(b: &mut TreeBuilder, path: &str) {
    b.node(SyntaxKind::Header, |b| {
        b.node(SyntaxKind::Include, |b| {
            b.token("include");
            b.token(&format!("\"{path}\""));
        });
    });
}

pub fn namespace(b: &mut TreeBuilder, scope: &str, name: &str) {
    b.node(SyntaxKind::Header, |b| {
        b.node(SyntaxKind::Namespace, |b| {
            b.token("namespace");
            b.token(scope);
            b.token(name);
        });
    });
}

/// Field type; one level of `list<..>`, `set<..>` and `map<.., ..>` is understood
pub fn field_type(b: &mut TreeBuilder, ty: &str) {
    b.node(SyntaxKind::FieldType, |b| type_body(b, ty));
}

fn type_body(b: &mut TreeBuilder, ty: &str) {
    if let Some((outer, inner)) = ty.split_once('<') {
        let inner = inner.strip_suffix('>').unwrap_or(inner);
        let kind = match outer {
            "map" => SyntaxKind::MapType,
            "set" => SyntaxKind::SetType,
            _ => SyntaxKind::ListType,
        };
        b.node(SyntaxKind::ContainerType, |b| {
            b.node(kind, |b| {
                b.token(outer);
                b.token("<");
                for (i, part) in inner.split(',').enumerate() {
                    if i > 0 {
                        b.token(",");
                    }
                    field_type(b, part.trim());
                }
                b.token(">");
            });
        });
    } else if BASE_TYPES.contains(&ty) {
        b.node(SyntaxKind::BaseType, |b| {
            b.node(SyntaxKind::RealBaseType, |b| b.token(ty));
        });
    } else {
        b.token(ty);
    }
}

/// Scalar constant; integers get their own node
pub fn const_value(b: &mut TreeBuilder, value: &str) {
    b.node(SyntaxKind::ConstValue, |b| {
        if value.parse::<i64>().is_ok() {
            b.node(SyntaxKind::Integer, |b| b.token(value));
        } else {
            b.token(value);
        }
    });
}

pub fn separator(b: &mut TreeBuilder, sep: &str) {
    b.node(SyntaxKind::ListSeparator, |b| b.token(sep));
}

/// Shape of one struct or parameter field
#[derive(Debug, Clone, Copy, Default)]
pub struct Field<'a> {
    pub id: Option<&'a str>,
    pub req: Option<&'a str>,
    pub ty: &'a str,
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub annotations: &'a [(&'a str, &'a str)],
    pub sep: Option<&'a str>,
}

impl<'a> Field<'a> {
    pub fn new(id: &'a str, ty: &'a str, name: &'a str) -> Self {
        Self {
            id: Some(id),
            ty,
            name,
            ..Default::default()
        }
    }

    pub fn req(mut self, req: &'a str) -> Self {
        self.req = Some(req);
        self
    }

    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    pub fn annotations(mut self, annotations: &'a [(&'a str, &'a str)]) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn sep(mut self, sep: &'a str) -> Self {
        self.sep = Some(sep);
        self
    }

    pub fn build(&self, b: &mut TreeBuilder) {
        b.node(SyntaxKind::Field, |b| {
            if let Some(id) = self.id {
                b.node(SyntaxKind::FieldId, |b| {
                    b.node(SyntaxKind::Integer, |b| b.token(id));
                    b.token(":");
                });
            }
            if let Some(req) = self.req {
                b.node(SyntaxKind::FieldReq, |b| b.token(req));
            }
            field_type(b, self.ty);
            b.token(self.name);
            if let Some(value) = self.value {
                b.token("=");
                const_value(b, value);
            }
            if !self.annotations.is_empty() {
                annotations(b, self.annotations);
            }
            if let Some(sep) = self.sep {
                separator(b, sep);
            }
        });
    }
}

/// `( key = value, ... )`, every annotation followed by a comma
pub fn annotations(b: &mut TreeBuilder, pairs: &[(&str, &str)]) {
    b.node(SyntaxKind::TypeAnnotations, |b| {
        b.token("(");
        for &(key, value) in pairs {
            b.node(SyntaxKind::TypeAnnotation, |b| {
                b.token(key);
                b.token("=");
                b.node(SyntaxKind::AnnotationValue, |b| b.token(value));
                separator(b, ",");
            });
        }
        b.token(")");
    });
}

/// `keyword name {`, then `body`, then `}` on its own line
pub fn struct_like(
    b: &mut TreeBuilder,
    keyword: &str,
    name: &str,
    body: impl FnOnce(&mut TreeBuilder),
) {
    let kind = match keyword {
        "union" => SyntaxKind::Union,
        "exception" => SyntaxKind::Exception,
        _ => SyntaxKind::Struct,
    };
    b.node(SyntaxKind::Definition, |b| {
        b.node(kind, |b| {
            b.token(keyword);
            b.token(name);
            b.token("{");
            b.newline();
            body(b);
            b.newline();
            b.token("}");
        });
    });
}

pub fn enum_def(b: &mut TreeBuilder, name: &str, body: impl FnOnce(&mut TreeBuilder)) {
    b.node(SyntaxKind::Definition, |b| {
        b.node(SyntaxKind::Enum, |b| {
            b.token("enum");
            b.token(name);
            b.token("{");
            b.newline();
            body(b);
            b.newline();
            b.token("}");
        });
    });
}

pub fn enum_field(b: &mut TreeBuilder, name: &str, value: Option<&str>, sep: Option<&str>) {
    b.node(SyntaxKind::EnumField, |b| {
        b.token(name);
        if let Some(value) = value {
            b.token("=");
            b.node(SyntaxKind::Integer, |b| b.token(value));
        }
        if let Some(sep) = sep {
            separator(b, sep);
        }
    });
}

pub fn service(
    b: &mut TreeBuilder,
    name: &str,
    extends: Option<&str>,
    body: impl FnOnce(&mut TreeBuilder),
) {
    b.node(SyntaxKind::Definition, |b| {
        b.node(SyntaxKind::Service, |b| {
            b.token("service");
            b.token(name);
            if let Some(parent) = extends {
                b.token("extends");
                b.token(parent);
            }
            b.token("{");
            b.newline();
            body(b);
            b.newline();
            b.token("}");
        });
    });
}

/// Shape of one service function
#[derive(Debug, Clone, Copy, Default)]
pub struct Function<'a> {
    pub oneway: bool,
    pub ret: &'a str,
    pub name: &'a str,
    pub params: &'a [Field<'a>],
    pub throws: &'a [Field<'a>],
    pub sep: Option<&'a str>,
}

impl Function<'_> {
    pub fn build(&self, b: &mut TreeBuilder) {
        b.node(SyntaxKind::Function, |b| {
            if self.oneway {
                b.node(SyntaxKind::Oneway, |b| b.token("oneway"));
            }
            b.node(SyntaxKind::FunctionType, |b| {
                if self.ret == "void" {
                    b.token("void");
                } else {
                    field_type(b, self.ret);
                }
            });
            b.token(self.name);
            b.token("(");
            for param in self.params {
                param.build(b);
            }
            b.token(")");
            if !self.throws.is_empty() {
                b.node(SyntaxKind::ThrowsList, |b| {
                    b.token("throws");
                    b.token("(");
                    for field in self.throws {
                        field.build(b);
                    }
                    b.token(")");
                });
            }
            if let Some(sep) = self.sep {
                separator(b, sep);
            }
        });
    }
}
