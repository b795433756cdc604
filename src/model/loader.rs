//! Document Loading
//!
//! Parses an XMI file with roxmltree, checks the declared `xmi:version`, and
//! copies the element tree into an owned [`ModelTree`]. Namespace URIs are
//! normalized to the `xmi` and `uml` prefixes so lookups do not depend on the
//! prefixes a particular exporter chose.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, info};

use super::{ModelNode, ModelTree, NodeId, NodeKind};
use crate::error::{GenError, Result};

/// A loaded and version-checked model document
#[derive(Debug, Clone)]
pub struct ModelDocument {
    pub version: String,
    tree: ModelTree,
    /// Documentation by element identifier
    annotations: HashMap<String, String>,
}

impl ModelDocument {
    pub fn tree(&self) -> &ModelTree {
        &self.tree
    }

    /// Out-of-band documentation for an element identifier
    pub fn annotation(&self, identifier: &str) -> Option<&str> {
        self.annotations.get(identifier).map(String::as_str)
    }

    /// Every class element below a model element, in document order
    pub fn classes(&self) -> Vec<NodeId> {
        let Some(root) = self.tree.root() else {
            return Vec::new();
        };
        let mut models: Vec<NodeId> = Vec::new();
        if self.tree.node(root).kind == NodeKind::Model {
            models.push(root);
        }
        models.extend(
            self.tree
                .descendants(root)
                .into_iter()
                .filter(|&id| self.tree.node(id).kind == NodeKind::Model),
        );

        let mut classes = Vec::new();
        for model in models {
            for id in self.tree.descendants(model) {
                if self.tree.node(id).kind == NodeKind::Class && !classes.contains(&id) {
                    classes.push(id);
                }
            }
        }
        classes
    }
}

/// Load a model document from disk
pub fn load_file(path: &Path, expected_version: &str) -> Result<ModelDocument> {
    info!(path = %path.display(), "loading model document");
    let text = fs::read_to_string(path)?;
    load_str(&text, expected_version)
}

/// Load a model document from XMI text.
///
/// Fails with [`GenError::Format`] when the root `xmi:version` differs from
/// `expected_version`.
pub fn load_str(text: &str, expected_version: &str) -> Result<ModelDocument> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;
    let root = document.root_element();

    let version = root
        .attributes()
        .find(|a| a.name() == "version" && a.namespace().is_some_and(is_xmi))
        .map(|a| a.value().to_string());
    if version.as_deref() != Some(expected_version) {
        return Err(GenError::Format {
            expected: expected_version.to_string(),
            found: version,
        });
    }
    debug!(version = expected_version, "detected document version");

    let tree = build_tree(root);
    let annotations = build_annotations(&tree);
    debug!(
        nodes = tree.len(),
        annotations = annotations.len(),
        "model tree built"
    );

    Ok(ModelDocument {
        version: expected_version.to_string(),
        tree,
        annotations,
    })
}

// =============================================================================
// Tree Conversion
// =============================================================================

fn build_tree(root: Node<'_, '_>) -> ModelTree {
    let mut tree = ModelTree::default();
    let mut stack: Vec<(Node<'_, '_>, Option<NodeId>)> = vec![(root, None)];

    while let Some((element, parent)) = stack.pop() {
        let id = tree.push(parent, convert(element));
        let children: Vec<_> = element.children().filter(Node::is_element).collect();
        stack.extend(children.into_iter().rev().map(|c| (c, Some(id))));
    }
    tree
}

fn convert(element: Node<'_, '_>) -> ModelNode {
    let tag = qualify(
        element,
        element.tag_name().name(),
        element.tag_name().namespace(),
    );
    let attributes = element
        .attributes()
        .map(|a| (qualify(element, a.name(), a.namespace()), a.value().to_string()))
        .collect::<std::collections::BTreeMap<_, _>>();

    let kind = NodeKind::classify(&tag, attributes.get("xmi:type").map(String::as_str));
    ModelNode {
        kind,
        identifier: attributes.get("xmi:id").cloned(),
        name: attributes.get("name").cloned(),
        tag,
        attributes,
        children: Vec::new(),
    }
}

fn is_xmi(uri: &str) -> bool {
    uri.contains("/XMI")
}

fn qualify(element: Node<'_, '_>, local: &str, namespace: Option<&str>) -> String {
    let prefix = namespace.and_then(|uri| {
        if is_xmi(uri) {
            Some("xmi")
        } else if uri.contains("/UML") {
            Some("uml")
        } else {
            element.lookup_prefix(uri).filter(|p| !p.is_empty())
        }
    });
    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

// =============================================================================
// Annotation Index
// =============================================================================

/// Documentation sources, strongest first:
/// - `xmi:Extension/elements/element[@xmi:idref]/properties@documentation`
/// - `xmi:Extension/.../attributes/attribute[@xmi:idref]/documentation@value`
/// - `ownedComment@body`, keyed by `annotatedElement` or the owning element
fn build_annotations(tree: &ModelTree) -> HashMap<String, String> {
    let mut annotations = HashMap::new();
    let Some(root) = tree.root() else {
        return annotations;
    };

    let all = tree.descendants(root);
    for &extension in all.iter().filter(|&&id| tree.node(id).tag == "xmi:Extension") {
        for id in tree.descendants(extension) {
            let node = tree.node(id);
            let Some(target) = node.attr("xmi:idref") else {
                continue;
            };
            let text = match node.tag.as_str() {
                "element" => tree
                    .children_tagged(id, "properties")
                    .find_map(|(_, p)| p.attr("documentation")),
                "attribute" => tree
                    .children_tagged(id, "documentation")
                    .find_map(|(_, d)| d.attr("value")),
                _ => None,
            };
            if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
                annotations
                    .entry(target.to_string())
                    .or_insert_with(|| text.to_string());
            }
        }
    }

    for &comment in all.iter().filter(|&&id| tree.node(id).tag == "ownedComment") {
        let body = tree.node(comment).attr("body");
        let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
            continue;
        };
        let mut targets: Vec<&str> = tree.reference_list(comment, "annotatedElement");
        if targets.is_empty() {
            let owner = tree
                .parent(comment)
                .and_then(|p| tree.node(p).identifier.as_deref());
            targets.extend(owner);
        }
        for target in targets {
            annotations
                .entry(target.to_string())
                .or_insert_with(|| body.to_string());
        }
    }

    annotations
}
