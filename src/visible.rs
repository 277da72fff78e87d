//! Collects the windows shown on the current workspace.
//!
//! The walk starts at the root, picks the output that reports an active
//! workspace and descends only into that workspace.  Every container that
//! holds a window is appended in depth-first document order, tiled
//! children before floating ones.  Containers without a window of their
//! own are layout splits and are descended into.

use crate::tree::{Node, NodeKind, TreeError};
use log::debug;

/// A window on the current workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    pub id: i64,
    pub focused: bool,
}

impl From<&Node> for VisibleWindow {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            focused: node.focused,
        }
    }
}

/// Build the ordered list of windows visible on the active workspace.
///
/// An empty list is not an error: it just means there is nothing to cycle
/// through (no output connected, empty workspace, …).
pub fn visible_windows(root: &Node) -> Result<Vec<VisibleWindow>, TreeError> {
    if root.kind != NodeKind::Root && root.nodes.is_empty() {
        return Err(TreeError::Invalid);
    }

    let mut visibles = Vec::new();

    if let Some((output, workspace)) = root
        .nodes
        .iter()
        .find_map(|output| output.active_workspace().map(|ws| (output, ws)))
    {
        debug!("current workspace {:?} on output {:?}", workspace, output.name());
        collect(output.nodes.iter(), workspace, &mut visibles);
    }

    Ok(visibles)
}

fn collect<'a>(
    nodes: impl Iterator<Item = &'a Node>,
    workspace: &str,
    visibles: &mut Vec<VisibleWindow>,
) {
    for node in nodes {
        match node.kind {
            NodeKind::Workspace => {
                if node.name() == workspace {
                    collect(node.children(), workspace, visibles);
                    // Only one workspace per output can be current.
                    return;
                }
            }
            // Workspaces are the first layer below an output, so a window
            // container is always inside the current workspace here.
            NodeKind::Con | NodeKind::FloatingCon if node.has_window() => {
                visibles.push(VisibleWindow::from(node));
            }
            _ => collect(node.children(), workspace, visibles),
        }
    }
}
