//! Rust Code Emitter
//!
//! Renders one [`ClassDescriptor`] into one Rust module.
//!
//! Key constraints:
//! - Rendering is pure: same descriptor, same text
//! - Emitted accessors never touch partner storage; they delegate to the
//!   runtime link crate with an `AssociationEnd` constant
//! - The only imports are the runtime crate and the base class module

use crate::config::OutputConfig;
use crate::model::{PrimitiveKind, ScalarType};

use super::names;
use super::{AttributeDescriptor, BaseClass, ClassDescriptor, Pairing};

const LINK_IMPORTS: &str = "into_handle, AssociationEnd, ClassInfo, Handle, Link, LinkError, \
                            Members, ModelObject, PendingLinks, ScalarInfo, ScalarKind, Slot";

// =============================================================================
// Template Set
// =============================================================================

/// Immutable rendering settings, built once per generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Path of the runtime link crate (`umlgen_links`)
    links_crate: String,
    /// Path prefix of generated packages (`crate`)
    crate_root: String,
}

impl TemplateSet {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            links_crate: output.links_crate.clone(),
            crate_root: output.crate_root.clone(),
        }
    }

    /// Render a class module
    pub fn render(&self, class: &ClassDescriptor) -> String {
        let view = ClassView::new(class);
        let mut output = String::new();

        emit_header(&mut output, self, &view);
        emit_init(&mut output, &view);
        emit_class_info(&mut output, &view);
        emit_struct(&mut output, &view);
        emit_impl(&mut output, self, &view);
        if view.base.is_some() {
            emit_deref(&mut output, &view);
        }
        emit_model_object(&mut output, &view);

        output
    }
}

// =============================================================================
// Render Views
// =============================================================================

struct BaseView {
    type_name: String,
    model_name: String,
    /// Module path segments of the base class
    path: Vec<String>,
}

struct ScalarView<'a> {
    model_name: &'a str,
    field: String,
    rust_type: &'static str,
    kind: &'static str,
    default: String,
    enumeration: Option<&'a str>,
    doc: Option<&'a str>,
}

struct ReferenceView<'a> {
    model_name: &'a str,
    field: String,
    end_const: String,
    pairing: Pairing,
    inverse: Option<&'a str>,
    target: &'a str,
    doc: Option<&'a str>,
}

impl ReferenceView<'_> {
    fn link(&self) -> String {
        match self.inverse {
            Some(inverse) => format!("Link::{} {{ inverse: {inverse:?} }}", self.pairing.variant()),
            None => format!("Link::{}", self.pairing.variant()),
        }
    }
}

struct ClassView<'a> {
    class: &'a ClassDescriptor,
    type_name: String,
    base: Option<BaseView>,
    scalars: Vec<ScalarView<'a>>,
    references: Vec<ReferenceView<'a>>,
}

impl<'a> ClassView<'a> {
    fn new(class: &'a ClassDescriptor) -> Self {
        let base = match &class.base {
            BaseClass::Root => None,
            BaseClass::Class { name, package } => {
                let type_name = names::type_name(name);
                let mut path: Vec<String> = package.iter().map(|p| names::type_name(p)).collect();
                path.push(type_name.clone());
                Some(BaseView {
                    type_name,
                    model_name: name.clone(),
                    path,
                })
            }
        };

        let mut scalars = Vec::new();
        let mut references = Vec::new();
        for attribute in &class.attributes {
            match attribute {
                AttributeDescriptor::Scalar {
                    name,
                    ty,
                    default,
                    documentation,
                } => scalars.push(ScalarView {
                    model_name: name,
                    field: names::member(name),
                    rust_type: rust_type(ty),
                    kind: scalar_kind(ty),
                    default: default_literal(ty, default.as_deref()),
                    enumeration: match ty {
                        ScalarType::Enumeration(e) => Some(e.as_str()),
                        ScalarType::Primitive(_) => None,
                    },
                    doc: documentation.as_deref(),
                }),
                AttributeDescriptor::Reference {
                    name,
                    target,
                    inverse,
                    documentation,
                    ..
                } => {
                    let Some(pairing) = attribute.pairing() else {
                        continue;
                    };
                    references.push(ReferenceView {
                        model_name: name,
                        field: names::member(name),
                        end_const: format!("{}_END", names::screaming_case(name)),
                        pairing,
                        inverse: inverse.as_ref().map(|i| i.name.as_str()),
                        target,
                        doc: documentation.as_deref(),
                    });
                }
            }
        }

        Self {
            class,
            type_name: names::type_name(&class.name),
            base,
            scalars,
            references,
        }
    }

    fn init_name(&self) -> String {
        format!("{}Init", self.type_name)
    }

    fn singles(&self) -> impl Iterator<Item = &ReferenceView<'a>> {
        self.references.iter().filter(|r| !r.pairing.is_many())
    }

    fn manys(&self) -> impl Iterator<Item = &ReferenceView<'a>> {
        self.references.iter().filter(|r| r.pairing.is_many())
    }
}

fn rust_type(ty: &ScalarType) -> &'static str {
    match ty {
        ScalarType::Primitive(PrimitiveKind::Text) | ScalarType::Enumeration(_) => "String",
        ScalarType::Primitive(PrimitiveKind::Integer) => "i64",
        ScalarType::Primitive(PrimitiveKind::Real) => "f64",
        ScalarType::Primitive(PrimitiveKind::Boolean) => "bool",
    }
}

fn scalar_kind(ty: &ScalarType) -> &'static str {
    match ty {
        ScalarType::Primitive(PrimitiveKind::Text) => "ScalarKind::Text",
        ScalarType::Primitive(PrimitiveKind::Integer) => "ScalarKind::Integer",
        ScalarType::Primitive(PrimitiveKind::Real) => "ScalarKind::Real",
        ScalarType::Primitive(PrimitiveKind::Boolean) => "ScalarKind::Boolean",
        ScalarType::Enumeration(_) => "ScalarKind::Enumerated",
    }
}

/// Rust expression for a scalar default. Literals that do not parse fall
/// back to the type default.
pub fn default_literal(ty: &ScalarType, default: Option<&str>) -> String {
    let default = default.map(str::trim).filter(|d| !d.is_empty());
    match ty {
        ScalarType::Primitive(PrimitiveKind::Text) => match default {
            Some(text) => format!("String::from({text:?})"),
            None => "String::new()".to_string(),
        },
        ScalarType::Enumeration(_) => match default {
            // `Kind.literal` or `literal`
            Some(text) => {
                let literal = text.rsplit('.').next().unwrap_or(text);
                format!("String::from({literal:?})")
            }
            None => "String::new()".to_string(),
        },
        ScalarType::Primitive(PrimitiveKind::Integer) => default
            .and_then(|d| d.parse::<i64>().ok())
            .map_or_else(|| "0".to_string(), |n| n.to_string()),
        ScalarType::Primitive(PrimitiveKind::Real) => default
            .and_then(|d| d.parse::<f64>().ok())
            .filter(|f| f.is_finite())
            .map_or_else(|| "0.0".to_string(), |f| format!("{f:?}")),
        ScalarType::Primitive(PrimitiveKind::Boolean) => {
            let value = default.is_some_and(|d| d.eq_ignore_ascii_case("true"));
            value.to_string()
        }
    }
}

fn push_doc(output: &mut String, indent: &str, doc: Option<&str>) {
    let Some(doc) = doc else {
        return;
    };
    for line in doc.lines() {
        let line = line.trim();
        if line.is_empty() {
            output.push_str(&format!("{indent}///\n"));
        } else {
            output.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

fn emit_header(output: &mut String, templates: &TemplateSet, view: &ClassView) {
    output.push_str(&format!(
        "//! `{}`, generated by umlgen - DO NOT EDIT\n",
        view.class.qualified_name()
    ));
    output.push_str("\n#![allow(non_snake_case)]\n#![allow(unused_imports)]\n\n");
    output.push_str("use std::any::Any;\n");
    if view.base.is_some() {
        output.push_str("use std::ops::{Deref, DerefMut};\n");
    }
    output.push_str(&format!("\nuse {}::{{{LINK_IMPORTS}}};\n", templates.links_crate));

    if let Some(base) = &view.base {
        output.push_str(&format!(
            "\nuse {}::{}::{{{}, {}Init}};\n",
            templates.crate_root,
            base.path.join("::"),
            base.type_name,
            base.type_name
        ));
    }
    output.push('\n');
}

fn emit_init(output: &mut String, view: &ClassView) {
    let init = view.init_name();
    output.push_str(&format!("/// Constructor arguments of [`{}`]\n", view.type_name));
    output.push_str("#[derive(Debug)]\n");

    let mut fields: Vec<(String, String, String, Option<&str>)> = Vec::new();
    for scalar in &view.scalars {
        fields.push((
            scalar.field.clone(),
            scalar.rust_type.to_string(),
            scalar.default.clone(),
            scalar.doc,
        ));
    }
    for reference in &view.references {
        let (ty, default) = if reference.pairing.is_many() {
            ("Vec<Handle>", "Vec::new()")
        } else {
            ("Option<Handle>", "None")
        };
        fields.push((reference.field.clone(), ty.to_string(), default.to_string(), reference.doc));
    }
    if let Some(base) = &view.base {
        fields.push((
            "base".to_string(),
            format!("{}Init", base.type_name),
            format!("{}Init::default()", base.type_name),
            None,
        ));
    }

    if fields.is_empty() {
        output.push_str(&format!("pub struct {init} {{}}\n\n"));
        output.push_str(&format!("impl Default for {init} {{\n"));
        output.push_str("    fn default() -> Self {\n        Self {}\n    }\n}\n\n");
        return;
    }

    output.push_str(&format!("pub struct {init} {{\n"));
    for (field, ty, _, doc) in &fields {
        push_doc(output, "    ", *doc);
        output.push_str(&format!("    pub {field}: {ty},\n"));
    }
    output.push_str("}\n\n");

    output.push_str(&format!("impl Default for {init} {{\n"));
    output.push_str("    fn default() -> Self {\n        Self {\n");
    for (field, _, default, _) in &fields {
        output.push_str(&format!("            {field}: {default},\n"));
    }
    output.push_str("        }\n    }\n}\n\n");
}

fn emit_class_info(output: &mut String, view: &ClassView) {
    let class = view.class;
    output.push_str("/// Metadata of this class\n");
    output.push_str("pub static CLASS: ClassInfo = ClassInfo {\n");
    output.push_str(&format!("    name: {:?},\n", class.name));

    let package: Vec<String> = class.package.iter().map(|p| format!("{p:?}")).collect();
    output.push_str(&format!("    package: &[{}],\n", package.join(", ")));

    match &view.base {
        Some(base) => output.push_str(&format!("    base: Some({:?}),\n", base.model_name)),
        None => output.push_str("    base: None,\n"),
    }

    if view.scalars.is_empty() {
        output.push_str("    attributes: &[],\n");
    } else {
        output.push_str("    attributes: &[\n");
        for scalar in &view.scalars {
            output.push_str("        ScalarInfo {\n");
            output.push_str(&format!("            name: {:?},\n", scalar.model_name));
            output.push_str(&format!("            kind: {},\n", scalar.kind));
            output.push_str(&format!("            default: {:?},\n", scalar.default));
            match scalar.enumeration {
                Some(e) => output.push_str(&format!("            enumeration: Some({e:?}),\n")),
                None => output.push_str("            enumeration: None,\n"),
            }
            output.push_str("        },\n");
        }
        output.push_str("    ],\n");
    }

    let references: Vec<String> = view
        .references
        .iter()
        .map(|r| format!("{}::{}", view.type_name, r.end_const))
        .collect();
    output.push_str(&format!("    references: &[{}],\n", references.join(", ")));
    output.push_str("};\n\n");
}

fn emit_struct(output: &mut String, view: &ClassView) {
    push_doc(output, "", view.class.documentation.as_deref());
    output.push_str("#[derive(Debug)]\n");

    if view.scalars.is_empty() && view.references.is_empty() && view.base.is_none() {
        output.push_str(&format!("pub struct {} {{}}\n\n", view.type_name));
        return;
    }

    output.push_str(&format!("pub struct {} {{\n", view.type_name));
    for scalar in &view.scalars {
        push_doc(output, "    ", scalar.doc);
        output.push_str(&format!("    pub {}: {},\n", scalar.field, scalar.rust_type));
    }
    for reference in &view.references {
        let storage = if reference.pairing.is_many() { "Members" } else { "Slot" };
        output.push_str(&format!("    {}: {storage},\n", reference.field));
    }
    if let Some(base) = &view.base {
        output.push_str(&format!("    base: {},\n", base.type_name));
    }
    output.push_str("}\n\n");
}

fn emit_impl(output: &mut String, templates: &TemplateSet, view: &ClassView) {
    let links = &templates.links_crate;
    let init = view.init_name();
    output.push_str(&format!("impl {} {{\n", view.type_name));

    for reference in &view.references {
        output.push_str(&format!(
            "    pub const {}: AssociationEnd =\n        AssociationEnd::new({:?}, {});\n",
            reference.end_const,
            reference.model_name,
            reference.link()
        ));
    }
    if !view.references.is_empty() {
        output.push('\n');
    }

    // new
    output.push_str(&format!(
        "    pub fn new(init: {init}) -> Result<Handle, LinkError> {{\n"
    ));
    output.push_str("        let mut links = PendingLinks::default();\n");
    output.push_str("        let this = into_handle(Self::construct(init, &mut links));\n");
    output.push_str("        links.apply(&this)?;\n");
    output.push_str("        Ok(this)\n");
    output.push_str("    }\n\n");

    // construct: own references are queued before the base constructor runs
    let uses_init = !view.scalars.is_empty() || !view.references.is_empty() || view.base.is_some();
    let uses_links = !view.references.is_empty() || view.base.is_some();
    output.push_str(&format!(
        "    pub fn construct({}: {init}, {}: &mut PendingLinks) -> Self {{\n",
        if uses_init { "init" } else { "_init" },
        if uses_links { "links" } else { "_links" },
    ));
    for reference in &view.references {
        let queue = if reference.pairing.is_many() { "many" } else { "single" };
        output.push_str(&format!(
            "        links.{queue}(Self::{}, init.{});\n",
            reference.end_const, reference.field
        ));
    }
    if uses_init {
        output.push_str("        Self {\n");
        for scalar in &view.scalars {
            output.push_str(&format!("            {0}: init.{0},\n", scalar.field));
        }
        for reference in &view.references {
            let storage = if reference.pairing.is_many() { "Members" } else { "Slot" };
            output.push_str(&format!("            {}: {storage}::default(),\n", reference.field));
        }
        if let Some(base) = &view.base {
            output.push_str(&format!(
                "            base: {}::construct(init.base, links),\n",
                base.type_name
            ));
        }
        output.push_str("        }\n");
    } else {
        output.push_str("        Self {}\n");
    }
    output.push_str("    }\n");

    for reference in &view.references {
        output.push('\n');
        emit_accessors(output, links, reference);
    }
    output.push_str("}\n\n");
}

fn emit_accessors(output: &mut String, links: &str, reference: &ReferenceView) {
    let field = &reference.field;
    let end = &reference.end_const;
    let model = reference.model_name;
    let target = reference.target;

    push_doc(output, "    ", reference.doc);
    if reference.pairing.is_many() {
        output.push_str(&format!("    pub fn {field}(&self) -> Vec<Handle> {{\n"));
        output.push_str(&format!("        self.{field}.handles()\n    }}\n\n"));

        output.push_str(&format!(
            "    /// Replace every `{model}` member. Members are held weakly: keep a handle \
             to each `{target}`.\n"
        ));
        output.push_str(&format!(
            "    pub fn {}(this: &Handle, values: Vec<Handle>) -> Result<(), LinkError> {{\n",
            names::prefixed("set", model)
        ));
        output.push_str(&format!(
            "        {links}::assign_all(this, Self::{end}, values)\n    }}\n\n"
        ));

        output.push_str(&format!("    /// Add one `{model}` member, held weakly\n"));
        output.push_str(&format!(
            "    pub fn {}(this: &Handle, value: &Handle) -> Result<(), LinkError> {{\n",
            names::prefixed("add", model)
        ));
        output.push_str(&format!("        {links}::add(this, Self::{end}, value)\n    }}\n\n"));

        output.push_str(&format!(
            "    /// Remove one `{model}` member; absent members are ignored\n"
        ));
        output.push_str(&format!(
            "    pub fn {}(this: &Handle, value: &Handle) -> Result<(), LinkError> {{\n",
            names::prefixed("remove", model)
        ));
        output.push_str(&format!("        {links}::remove(this, Self::{end}, value)\n    }}\n"));
    } else {
        output.push_str(&format!("    pub fn {field}(&self) -> Option<Handle> {{\n"));
        output.push_str(&format!("        self.{field}.get()\n    }}\n\n"));

        output.push_str(&format!(
            "    /// Set `{model}`. The `{target}` is held weakly: keep a handle to it.\n"
        ));
        output.push_str(&format!(
            "    pub fn {}(this: &Handle, value: Option<&Handle>) -> Result<(), LinkError> {{\n",
            names::prefixed("set", model)
        ));
        output.push_str(&format!("        {links}::assign(this, Self::{end}, value)\n    }}\n"));
    }
}

fn emit_deref(output: &mut String, view: &ClassView) {
    let Some(base) = &view.base else {
        return;
    };
    output.push_str(&format!("impl Deref for {} {{\n", view.type_name));
    output.push_str(&format!("    type Target = {};\n\n", base.type_name));
    output.push_str("    fn deref(&self) -> &Self::Target {\n        &self.base\n    }\n}\n\n");

    output.push_str(&format!("impl DerefMut for {} {{\n", view.type_name));
    output.push_str("    fn deref_mut(&mut self) -> &mut Self::Target {\n");
    output.push_str("        &mut self.base\n    }\n}\n\n");
}

fn emit_model_object(output: &mut String, view: &ClassView) {
    output.push_str(&format!("impl ModelObject for {} {{\n", view.type_name));
    output.push_str("    fn class_info(&self) -> &'static ClassInfo {\n        &CLASS\n    }\n\n");
    output.push_str("    fn as_any(&self) -> &dyn Any {\n        self\n    }\n\n");
    output.push_str("    fn as_any_mut(&mut self) -> &mut dyn Any {\n        self\n    }\n\n");

    let singles: Vec<&ReferenceView> = view.singles().collect();
    let manys: Vec<&ReferenceView> = view.manys().collect();
    let has_base = view.base.is_some();

    emit_lookup(output, "slot", "Slot", "", &singles, has_base);
    output.push('\n');
    emit_lookup(output, "slot_mut", "Slot", "mut ", &singles, has_base);
    output.push('\n');
    emit_lookup(output, "members", "Members", "", &manys, has_base);
    output.push('\n');
    emit_lookup(output, "members_mut", "Members", "mut ", &manys, has_base);
    output.push_str("}\n");
}

/// One end-lookup method: own ends by model name, then the base
fn emit_lookup(
    output: &mut String,
    method: &str,
    storage: &str,
    mutability: &str,
    ends: &[&ReferenceView],
    has_base: bool,
) {
    let receiver = if mutability.is_empty() { "&self" } else { "&mut self" };
    let param = if ends.is_empty() && !has_base { "_end" } else { "end" };
    let fallback = if has_base {
        format!("self.base.{method}(end)")
    } else {
        "None".to_string()
    };

    output.push_str(&format!(
        "    fn {method}({receiver}, {param}: &str) -> Option<&{mutability}{storage}> {{\n"
    ));
    if ends.is_empty() {
        output.push_str(&format!("        {fallback}\n"));
    } else {
        output.push_str("        match end {\n");
        for end in ends {
            output.push_str(&format!(
                "            {:?} => Some(&{mutability}self.{}),\n",
                end.model_name, end.field
            ));
        }
        output.push_str(&format!("            _ => {fallback},\n"));
        output.push_str("        }\n");
    }
    output.push_str("    }\n");
}
