//! The orchestrator that ties the tree walk, the selector and the window
//! manager together.
//!
//! [`FocusSwitcher`] fetches the tree once, resolves the visible windows,
//! picks the neighbour of the focused one and asks the
//! [`WindowManager`] to focus it.

use crate::command::{focus_command, Direction};
use crate::selector;
use crate::traits::WindowManager;
use crate::tree::TreeError;
use crate::visible::visible_windows;
use log::{debug, info};

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Sway refused the focus command.
    #[error("sway rejected command: {0}")]
    CommandRejected(String),
}

/// Computes and applies focus changes.
///
/// The switcher is generic over any [`WindowManager`] implementation, so it
/// does not care whether the tree came from the IPC socket or `swaymsg`.
///
/// # Typical usage
///
/// ```ignore
/// let wm = SwayIpc::connect()?;
/// let mut switcher = FocusSwitcher::new(wm);
/// switcher.cycle(Direction::Next, false)?;
/// ```
pub struct FocusSwitcher<W: WindowManager> {
    wm: W,
    dump_tree: bool,
}

impl<W: WindowManager> FocusSwitcher<W> {
    /// Create a new switcher.
    pub fn new(wm: W) -> Self {
        Self {
            wm,
            dump_tree: false,
        }
    }

    /// Log the whole decoded tree at debug level before walking it.
    pub fn set_dump_tree(&mut self, dump: bool) {
        self.dump_tree = dump;
    }

    /// Consume the switcher, returning the window manager.
    pub fn into_inner(self) -> W {
        self.wm
    }

    /// Id of the window to focus when cycling in `direction`.
    ///
    /// `None` when the workspace has no windows or none of them is
    /// focused.
    pub fn target(&mut self, direction: Direction) -> Result<Option<i64>, SwitcherError> {
        let tree = self
            .wm
            .tree()
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
        if self.dump_tree {
            debug!("processed sway tree: {:#?}", tree);
        }

        let visibles = visible_windows(&tree)?;
        debug!("visible windows: {:?}", visibles);

        let target = selector::find(&visibles, direction);
        debug!("{} window: {:?}", direction, target);
        Ok(target)
    }

    /// Focus the container `con_id`.
    pub fn switch_focus(&mut self, con_id: i64) -> Result<(), SwitcherError> {
        let outcomes = self
            .wm
            .run_command(&focus_command(con_id))
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;

        match outcomes.first() {
            Some(outcome) if outcome.success => {
                info!("switched focus to con_id {}", con_id);
                Ok(())
            }
            Some(outcome) => Err(SwitcherError::CommandRejected(outcome.error_text().to_string())),
            None => Err(SwitcherError::CommandRejected("empty reply".into())),
        }
    }

    /// Find the target in `direction` and, unless `dry_run`, focus it.
    ///
    /// Returns the chosen id, if any.
    pub fn cycle(&mut self, direction: Direction, dry_run: bool) -> Result<Option<i64>, SwitcherError> {
        let Some(id) = self.target(direction)? else {
            debug!("nothing to switch to");
            return Ok(None);
        };

        if dry_run {
            info!("not switching to con_id {} (dry run)", id);
        } else {
            self.switch_focus(id)?;
        }
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandOutcome;
    use crate::tree::Node;

    /// Record-keeping mock window manager serving a fixed tree.
    #[derive(Debug)]
    struct RecorderWm {
        tree: String,
        reply: Vec<CommandOutcome>,
        commands: Vec<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    impl RecorderWm {
        fn new(tree: &str) -> Self {
            Self {
                tree: tree.to_string(),
                reply: vec![CommandOutcome {
                    success: true,
                    ..Default::default()
                }],
                commands: Vec::new(),
            }
        }
    }

    impl WindowManager for RecorderWm {
        type Error = RecorderErr;

        fn tree(&mut self) -> Result<Node, RecorderErr> {
            Node::from_json(self.tree.as_bytes()).map_err(|_| RecorderErr)
        }

        fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>, RecorderErr> {
            self.commands.push(command.to_string());
            Ok(self.reply.clone())
        }
    }

    /// Window manager whose transport always fails.
    struct BrokenWm;

    impl WindowManager for BrokenWm {
        type Error = RecorderErr;

        fn tree(&mut self) -> Result<Node, RecorderErr> {
            Err(RecorderErr)
        }

        fn run_command(&mut self, _: &str) -> Result<Vec<CommandOutcome>, RecorderErr> {
            Err(RecorderErr)
        }
    }

    /// One output, workspace "1" holding containers 10, 11, 12.
    fn workspace(focused: Option<i64>) -> String {
        let con = |id: i64| {
            format!(
                r#"{{"id":{},"type":"con","app_id":"foot","focused":{}}}"#,
                id,
                Some(id) == focused
            )
        };
        format!(
            r#"{{"id":1,"type":"root","nodes":[
                {{"id":2,"type":"output","current_workspace":"1","nodes":[
                    {{"id":3,"type":"workspace","name":"1","nodes":[{},{},{}]}}]}}]}}"#,
            con(10),
            con(11),
            con(12)
        )
    }

    fn make_switcher(focused: Option<i64>) -> FocusSwitcher<RecorderWm> {
        FocusSwitcher::new(RecorderWm::new(&workspace(focused)))
    }

    #[test]
    fn focus_in_middle() {
        let mut s = make_switcher(Some(11));
        assert_eq!(s.target(Direction::Next).unwrap(), Some(12));
        assert_eq!(s.target(Direction::Prev).unwrap(), Some(10));
    }

    #[test]
    fn focus_on_last_wraps() {
        let mut s = make_switcher(Some(12));
        assert_eq!(s.target(Direction::Next).unwrap(), Some(10));
        assert_eq!(s.target(Direction::Prev).unwrap(), Some(11));
    }

    #[test]
    fn no_focus_means_no_switch() {
        let mut s = make_switcher(None);
        assert_eq!(s.cycle(Direction::Next, false).unwrap(), None);
        assert_eq!(s.cycle(Direction::Prev, false).unwrap(), None);
        assert!(s.into_inner().commands.is_empty());
    }

    #[test]
    fn empty_workspace_means_no_switch() {
        let wm = RecorderWm::new(
            r#"{"id":1,"type":"root","nodes":[
                {"id":2,"type":"output","current_workspace":"1","nodes":[
                    {"id":3,"type":"workspace","name":"1","nodes":[]}]}]}"#,
        );
        let mut s = FocusSwitcher::new(wm);
        assert_eq!(s.cycle(Direction::Next, false).unwrap(), None);
        assert!(s.into_inner().commands.is_empty());
    }

    #[test]
    fn cycle_sends_focus_command() {
        let mut s = make_switcher(Some(11));
        assert_eq!(s.cycle(Direction::Next, false).unwrap(), Some(12));
        assert_eq!(s.into_inner().commands, vec!["[con_id=12] focus".to_string()]);
    }

    #[test]
    fn dry_run_does_not_switch() {
        let mut s = make_switcher(Some(11));
        s.set_dump_tree(true);
        assert_eq!(s.cycle(Direction::Prev, true).unwrap(), Some(10));
        assert!(s.into_inner().commands.is_empty());
    }

    #[test]
    fn rejected_command_surfaces_sway_error() {
        let mut wm = RecorderWm::new(&workspace(Some(11)));
        wm.reply = vec![CommandOutcome {
            success: false,
            parse_error: false,
            error: Some("No matching node.".into()),
        }];
        let mut s = FocusSwitcher::new(wm);
        match s.cycle(Direction::Next, false) {
            Err(SwitcherError::CommandRejected(msg)) => assert_eq!(msg, "No matching node."),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_reply_is_rejected() {
        let mut wm = RecorderWm::new(&workspace(Some(11)));
        wm.reply.clear();
        let mut s = FocusSwitcher::new(wm);
        assert!(matches!(
            s.switch_focus(12),
            Err(SwitcherError::CommandRejected(_))
        ));
    }

    #[test]
    fn invalid_tree_is_reported() {
        let mut s = FocusSwitcher::new(RecorderWm::new(r#"{"id":1,"type":"con"}"#));
        assert!(matches!(
            s.target(Direction::Next),
            Err(SwitcherError::Tree(TreeError::Invalid))
        ));
    }

    #[test]
    fn transport_failure_is_reported() {
        let mut s = FocusSwitcher::new(BrokenWm);
        assert!(matches!(
            s.target(Direction::Next),
            Err(SwitcherError::WindowManager(_))
        ));
        assert!(matches!(
            s.switch_focus(1),
            Err(SwitcherError::WindowManager(_))
        ));
    }
}
