//! Kotlin pretty-printer.
//!
//! Serializes a [`FileSpec`] to concrete Kotlin source text. All layout
//! decisions live here; the spec tree stays pure data.

use crate::naming::escape_identifier;
use crate::spec::{FileSpec, FunSpec, PropertySpec, Supertype, TypeSpec};

use super::CodeBuilder;

/// Renders generated type specifications as Kotlin source.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinRenderer;

impl KotlinRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a complete source file.
    pub fn render_file(&self, file: &FileSpec) -> String {
        let builder = CodeBuilder::kotlin()
            .line(&format!("package {}", file.package))
            .blank();
        self.render_type(builder, &file.type_spec).build()
    }

    fn render_type(&self, builder: CodeBuilder, spec: &TypeSpec) -> CodeBuilder {
        let supertype = match &spec.supertype {
            Supertype::Implements(ty) => ty.to_string(),
            Supertype::Extends { ty, super_args } => {
                let args: Vec<String> =
                    super_args.iter().map(|a| escape_identifier(a)).collect();
                format!("{}({})", ty, args.join(", "))
            }
        };

        let builder = if spec.constructor.has_params() {
            builder
                .line(&format!("class {}(", spec.name))
                .indent()
                .each(&spec.constructor.params, |b, param| {
                    let mut line =
                        format!("{}: {}", escape_identifier(&param.name), param.ty);
                    if let Some(default) = &param.default {
                        line.push_str(&format!(" = {}", default));
                    }
                    line.push(',');
                    b.line(&line)
                })
                .dedent()
                .line(&format!(") : {} {{", supertype))
        } else {
            builder.line(&format!("class {} : {} {{", spec.name, supertype))
        };

        let mut builder = builder.indent();
        let mut first = true;
        for property in &spec.properties {
            if !first {
                builder = builder.blank();
            }
            first = false;
            builder = self.render_property(builder, property);
        }
        for function in &spec.functions {
            if !first {
                builder = builder.blank();
            }
            first = false;
            builder = self.render_function(builder, function);
        }
        builder.dedent().line("}")
    }

    fn render_property(&self, builder: CodeBuilder, spec: &PropertySpec) -> CodeBuilder {
        let mut decl = String::new();
        if spec.visibility.is_private() {
            decl.push_str("private ");
        }
        if spec.is_override {
            decl.push_str("override ");
        }
        decl.push_str(if spec.mutable { "var " } else { "val " });
        decl.push_str(&escape_identifier(&spec.name));
        decl.push_str(&format!(": {}", spec.ty));
        if let Some(init) = &spec.initializer {
            decl.push_str(&format!(" = {}", init));
        }

        let builder = builder.line(&decl);
        if !spec.has_accessors() {
            return builder;
        }

        builder
            .indent()
            .when(spec.getter.is_some(), |b| {
                b.block("get() {", "}", |b| {
                    b.line(spec.getter.as_deref().unwrap_or_default())
                })
            })
            .when(spec.setter.is_some(), |b| {
                b.block("set(value) {", "}", |b| {
                    b.line(spec.setter.as_deref().unwrap_or_default())
                })
            })
            .dedent()
    }

    fn render_function(&self, builder: CodeBuilder, spec: &FunSpec) -> CodeBuilder {
        let mut header = String::new();
        if spec.is_override {
            header.push_str("override ");
        }
        if spec.suspending {
            header.push_str("suspend ");
        }
        header.push_str("fun ");
        header.push_str(&escape_identifier(&spec.name));
        header.push('(');
        let params: Vec<String> = spec
            .params
            .iter()
            .map(|(name, ty)| format!("{}: {}", escape_identifier(name), ty))
            .collect();
        header.push_str(&params.join(", "));
        header.push(')');
        if let Some(ret) = &spec.return_type {
            header.push_str(&format!(": {}", ret));
        }
        header.push_str(" {");

        builder.block(&header, "}", |b| {
            b.each(&spec.body, |b, stmt| b.line(stmt))
        })
    }
}

#[cfg(test)]
mod tests {
    use proxygen_model::TypeRef;

    use crate::spec::{ConstructorSpec, CtorParamSpec};

    use super::*;

    #[test]
    fn test_render_interface_proxy_skeleton() {
        let delegate_ty = TypeRef::lambda(vec![], TypeRef::string()).nullable();
        let ctor = ConstructorSpec::new().param(
            CtorParamSpec::new("fetchDelegate", delegate_ty.clone()).default_value("null"),
        );
        let spec = TypeSpec::new("RepoProxy", Supertype::Implements(TypeRef::named("Repo")))
            .constructor(ctor)
            .property(
                PropertySpec::new("fetchDelegate", delegate_ty)
                    .private()
                    .initializer("fetchDelegate"),
            )
            .function(
                FunSpec::new("fetch")
                    .override_()
                    .returns(TypeRef::string())
                    .statement("return fetchDelegate?.invoke() ?: TODO(\"Not yet implemented\")"),
            );
        let source = KotlinRenderer::new().render_file(&FileSpec::new("com.example", spec));

        let expected = "\
package com.example

class RepoProxy(
    fetchDelegate: (() -> String)? = null,
) : Repo {
    private val fetchDelegate: (() -> String)? = fetchDelegate

    override fun fetch(): String {
        return fetchDelegate?.invoke() ?: TODO(\"Not yet implemented\")
    }
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_render_extends_with_super_args() {
        let spec = TypeSpec::new(
            "BaseProxy",
            Supertype::Extends {
                ty: TypeRef::named("Base"),
                super_args: vec!["id".into()],
            },
        )
        .constructor(ConstructorSpec::new().param(CtorParamSpec::new("id", TypeRef::string())));
        let source = KotlinRenderer::new().render_file(&FileSpec::new("com.example", spec));

        assert!(source.contains("class BaseProxy("));
        assert!(source.contains("    id: String,"));
        assert!(source.contains(") : Base(id) {"));
    }

    #[test]
    fn test_render_mutable_property_accessors() {
        let spec = TypeSpec::new("RepoProxy", Supertype::Implements(TypeRef::named("Repo")))
            .property(
                PropertySpec::new("flag", TypeRef::boolean())
                    .mutable()
                    .override_()
                    .getter("return flagDelegate ?: TODO(\"Not yet implemented\")")
                    .setter("flagDelegate = value"),
            );
        let source = KotlinRenderer::new().render_file(&FileSpec::new("com.example", spec));

        assert!(source.contains("    override var flag: Boolean\n"));
        let getter = "        get() {\n            \
                      return flagDelegate ?: TODO(\"Not yet implemented\")\n        }\n";
        assert!(source.contains(getter));
        let setter = "        set(value) {\n            flagDelegate = value\n        }\n";
        assert!(source.contains(setter));
    }

    #[test]
    fn test_keyword_parameter_is_escaped() {
        let spec = TypeSpec::new("HolderProxy", Supertype::Implements(TypeRef::named("Holder")))
            .function(
                FunSpec::new("store")
                    .override_()
                    .param("object", TypeRef::named("Any"))
                    .statement("storeDelegate?.invoke(`object`) ?: TODO(\"Not yet implemented\")"),
            );
        let source = KotlinRenderer::new().render_file(&FileSpec::new("com.example", spec));
        assert!(source.contains("fun store(`object`: Any)"));
    }
}
