//! The sway scene graph as returned by a `GET_TREE` request.
//!
//! Only the fields needed to find the visible windows are decoded; sway
//! sends many more, which serde silently ignores.
//!
//! ```json
//! {
//!   "id": 1, "type": "root", "name": "root",
//!   "nodes": [{
//!     "id": 3, "type": "output", "name": "eDP-1", "current_workspace": "1",
//!     "nodes": [{
//!       "id": 4, "type": "workspace", "name": "1",
//!       "nodes": [{ "id": 10, "type": "con", "app_id": "foot", "focused": true }],
//!       "floating_nodes": []
//!     }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Errors produced while turning a payload into a usable tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The payload is not a valid JSON tree.
    #[error("failed to decode tree: {0}")]
    Decode(#[from] serde_json::Error),
    /// The root is not a root node and has no children.
    #[error("invalid or empty tree")]
    Invalid,
}

/// Structural role of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "root")]
    Root,
    #[serde(rename = "output")]
    Output,
    #[serde(rename = "workspace")]
    Workspace,
    #[serde(rename = "con")]
    Con,
    #[serde(rename = "floating_con")]
    FloatingCon,
}

/// One element of the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Container id, used as the target of `[con_id=…]` criteria.
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Workspace number / label, output name or window title.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub floating_nodes: Vec<Node>,
    #[serde(default)]
    pub focused: bool,
    /// X11 window id (XWayland windows).
    #[serde(default)]
    pub window: Option<i64>,
    /// Wayland application id (native windows).
    #[serde(default)]
    pub app_id: Option<String>,
    /// Name of the active workspace, set on output nodes only.
    #[serde(default)]
    pub current_workspace: Option<String>,
}

impl Node {
    /// Decode a tree from the raw JSON payload.
    pub fn from_json(payload: &[u8]) -> Result<Self, TreeError> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// The node name, or `""` when sway reported none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Name of the workspace this output currently shows, if any.
    pub fn active_workspace(&self) -> Option<&str> {
        self.current_workspace.as_deref().filter(|ws| !ws.is_empty())
    }

    /// Whether this node carries a window handle or an app id.
    pub fn has_window(&self) -> bool {
        self.window.is_some_and(|w| w != 0) || self.app_id.as_deref().is_some_and(|a| !a.is_empty())
    }

    /// Whether this node is a container holding an actual window.
    pub fn is_window(&self) -> bool {
        match self.kind {
            NodeKind::Con | NodeKind::FloatingCon => self.has_window(),
            NodeKind::Root | NodeKind::Output | NodeKind::Workspace => false,
        }
    }

    /// Tiled children followed by floating children.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().chain(self.floating_nodes.iter())
    }
}
