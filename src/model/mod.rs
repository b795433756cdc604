//! Model Tree
//!
//! Owned, read-only view of an XMI document. Nodes live in one arena and own
//! their children by id. Parent links are kept in a separate lookup table used
//! only for ancestor walks.
//!
//! ```text
//! xmi:XMI
//! ├── uml:Model
//! │   └── packagedElement (uml:Package)
//! │       └── packagedElement (uml:Class)
//! │           ├── generalization
//! │           └── ownedAttribute
//! └── xmi:Extension
//!     └── elements/element/properties@documentation
//! ```

pub mod attributes;
pub mod loader;
pub mod resolve;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

pub use attributes::{class_properties, Multiplicity, RawAttribute, ScalarType};
pub use loader::{load_file, load_str, ModelDocument};
pub use resolve::{documentation, hierarchy, namespace, BaseLink};

/// Index of a node in the [`ModelTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Element kinds the generator cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Model,
    Package,
    Class,
    Enumeration,
    PrimitiveType,
    DataType,
    Association,
    Generalization,
    Property,
    Other,
}

impl NodeKind {
    /// Classify an element from its `xmi:type`, falling back to the tag
    pub fn classify(tag: &str, xmi_type: Option<&str>) -> Self {
        match xmi_type {
            Some("uml:Model") => Self::Model,
            Some("uml:Package") => Self::Package,
            Some("uml:Class") => Self::Class,
            Some("uml:Enumeration") => Self::Enumeration,
            Some("uml:PrimitiveType") => Self::PrimitiveType,
            Some("uml:DataType") => Self::DataType,
            Some("uml:Association") => Self::Association,
            Some("uml:Generalization") => Self::Generalization,
            Some("uml:Property") => Self::Property,
            Some(_) => Self::Other,
            None => match tag {
                "uml:Model" => Self::Model,
                "generalization" => Self::Generalization,
                "ownedAttribute" | "ownedEnd" => Self::Property,
                _ => Self::Other,
            },
        }
    }
}

/// Primitive scalar kinds, as named in the configuration type table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Text,
    Integer,
    Real,
    Boolean,
}

/// One element of the document
#[derive(Debug, Clone)]
pub struct ModelNode {
    pub kind: NodeKind,
    /// Prefixed tag name (`packagedElement`, `xmi:Extension`, ...)
    pub tag: String,
    /// `xmi:id`
    pub identifier: Option<String>,
    pub name: Option<String>,
    /// All attributes by prefixed name
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<NodeId>,
}

impl ModelNode {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Name for diagnostics: name, else identifier, else tag
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.identifier.as_deref())
            .unwrap_or(&self.tag)
    }
}

/// Arena of model nodes with an identifier index
#[derive(Debug, Clone, Default)]
pub struct ModelTree {
    nodes: Vec<ModelNode>,
    parents: Vec<Option<NodeId>>,
    by_id: HashMap<String, NodeId>,
}

impl ModelTree {
    /// Append a node under `parent`. The first node added is the root.
    pub(crate) fn push(&mut self, parent: Option<NodeId>, node: ModelNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(identifier) = &node.identifier {
            // First definition wins; later duplicates stay reachable by walking.
            self.by_id.entry(identifier.clone()).or_insert(id);
        }
        self.nodes.push(node);
        self.parents.push(parent);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &ModelNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Ancestors from the direct parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &ModelNode)> + '_ {
        self.node(id)
            .children
            .iter()
            .map(move |&c| (c, self.node(c)))
    }

    /// Children with the given tag
    pub fn children_tagged<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = (NodeId, &'a ModelNode)> + 'a {
        self.children(id).filter(move |(_, n)| n.tag == tag)
    }

    /// Every node below `id` in document order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            result.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        result
    }

    /// Look up a node by `xmi:id`
    pub fn by_identifier(&self, identifier: &str) -> Option<NodeId> {
        self.by_id.get(identifier).copied()
    }

    /// Identifier carried by an attribute, or by an `xmi:idref` child element
    /// with the same name (`<type xmi:idref="..."/>`)
    pub fn reference_attr(&self, id: NodeId, key: &str) -> Option<&str> {
        if let Some(value) = self.node(id).attr(key) {
            return Some(value);
        }
        self.node(id)
            .children
            .iter()
            .map(|&c| self.node(c))
            .find(|child| child.tag == key)
            .and_then(|child| child.attr("xmi:idref"))
    }

    /// Identifier list carried by a space-separated attribute and/or
    /// `xmi:idref` children with the same name
    pub fn reference_list(&self, id: NodeId, key: &str) -> Vec<&str> {
        let node = self.node(id);
        let mut result: Vec<&str> = node
            .attr(key)
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default();
        for &child in &node.children {
            let child = self.node(child);
            if child.tag == key {
                result.extend(child.attr("xmi:idref"));
            }
        }
        result
    }
}
