//! Cycle-safe component trees

use crate::error::{Error, Result};
use crate::identity::record::{ComponentInfo, ComponentRecord};
use crate::identity::registry::TagRegistry;
use crate::value_objects::ComponentId;
use serde::Serialize;
use std::fmt;

/// A component with its children, rendered recursively
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentTree {
    pub info: ComponentInfo,
    /// The node already appears on the path from the root; its children are not expanded
    pub cyclic: bool,
    pub children: Vec<ComponentTree>,
}

impl ComponentTree {
    /// Build the tree rooted at `record`
    ///
    /// A child whose id is already on the current path is emitted once, marked
    /// cyclic, and not descended into.
    pub(crate) fn build(registry: &TagRegistry, record: &ComponentRecord) -> Result<Self> {
        let mut path = Vec::new();
        Self::build_node(registry, record, &mut path)
    }

    fn build_node(
        registry: &TagRegistry,
        record: &ComponentRecord,
        path: &mut Vec<ComponentId>,
    ) -> Result<Self> {
        path.push(record.id().clone());
        let mut children = Vec::new();
        for child_id in record.children_ids() {
            let child = registry
                .get(&child_id)
                .ok_or_else(|| Error::component_not_found(&child_id))?;
            if path.contains(&child_id) {
                children.push(ComponentTree {
                    info: child.info(),
                    cyclic: true,
                    children: Vec::new(),
                });
            } else {
                children.push(Self::build_node(registry, &child, path)?);
            }
        }
        path.pop();
        Ok(ComponentTree {
            info: record.info(),
            cyclic: false,
            children,
        })
    }

    /// Number of nodes in the tree, cyclic leaves included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ComponentTree::node_count).sum::<usize>()
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, prefix: &str, last: bool, root: bool) -> fmt::Result {
        let (branch, extension) = match (root, last) {
            (true, _) => ("", ""),
            (false, true) => ("└── ", "    "),
            (false, false) => ("├── ", "│   "),
        };
        write!(f, "{prefix}{branch}{} ({})", self.info.id, self.info.tag)?;
        if self.cyclic {
            f.write_str(" (cycle)")?;
        }
        writeln!(f)?;
        let child_prefix = format!("{prefix}{extension}");
        for (index, child) in self.children.iter().enumerate() {
            child.write_node(f, &child_prefix, index + 1 == self.children.len(), false)?;
        }
        Ok(())
    }
}

impl fmt::Display for ComponentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, "", true, true)
    }
}
