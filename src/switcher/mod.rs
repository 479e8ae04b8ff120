//! The switch flow: record the current project, enumerate candidates, rank
//! them, pick, record, open.
//!
//! Everything here is generic over the host, the store, and the picker so
//! the whole flow runs under test with fakes; the CLI wires in the real
//! collaborators.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::config::{Settings, resolve_projects_root};
use crate::host::{FocusEvents, Subscription, WorkspaceHost};
use crate::mru::MruTracker;
use crate::projects::{ProjectEntry, enumerate_projects};
use crate::storage::KvStore;
use crate::utils::project_id_for;

/// Message shown when the switch command is invoked with no folder open
pub const NO_WORKSPACE_MESSAGE: &str =
    "Project Switcher requires at least one folder to be open.";

/// How a switch invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// No folder open; nothing was recorded
    NoWorkspace,
    /// The picker was dismissed without a choice
    Dismissed,
    /// The chosen project was recorded and opened
    Opened(ProjectEntry),
}

/// Record the current project whenever the window gains focus
///
/// Subscribing returns the cancellation token; the handler stays live for
/// the token's lifetime. Record failures inside the handler are reported on
/// stderr rather than unwinding through the event source.
pub fn wire_focus_recording<S: KvStore + 'static>(
    events: &FocusEvents,
    tracker: Rc<RefCell<MruTracker<S>>>,
    current_project: String,
) -> Subscription {
    events.subscribe(move |focused| {
        if focused
            && let Err(e) = tracker.borrow_mut().record_access(&current_project)
        {
            eprintln!("Warning: failed to record focused project: {e:#}");
        }
    })
}

/// Run the full switch flow
///
/// The startup focus event records the current project before the picker is
/// shown (an invoked command line is a focused window). Enumeration errors
/// are fatal and propagate; a dismissed picker is normal termination.
pub fn run_switch<H, S, P>(
    host: &H,
    store: S,
    settings: &Settings,
    directory_override: Option<&str>,
    pick: P,
    new_window: bool,
) -> Result<SwitchOutcome>
where
    H: WorkspaceHost,
    S: KvStore + 'static,
    P: FnOnce(Vec<String>) -> Result<Option<String>>,
{
    let Some(current_root) = host.current_root() else {
        return Ok(SwitchOutcome::NoWorkspace);
    };

    let projects_root = resolve_projects_root(settings, directory_override, &current_root)?;
    let current_project = project_id_for(&projects_root, &current_root);

    let tracker = Rc::new(RefCell::new(MruTracker::new(store)));
    let focus = FocusEvents::new();
    let _focus_sub = wire_focus_recording(&focus, Rc::clone(&tracker), current_project);

    // The invoking window is focused at startup
    focus.emit(true);

    switch_project(host, &tracker, &projects_root, pick, new_window)
}

/// Enumerate, rank, pick, record, open
pub fn switch_project<H, S, P>(
    host: &H,
    tracker: &RefCell<MruTracker<S>>,
    projects_root: &Path,
    pick: P,
    new_window: bool,
) -> Result<SwitchOutcome>
where
    H: WorkspaceHost,
    S: KvStore,
    P: FnOnce(Vec<String>) -> Result<Option<String>>,
{
    let projects = enumerate_projects(projects_root)?;
    let candidates: Vec<String> = projects.iter().map(|p| p.id.clone()).collect();
    let ranked = tracker.borrow().merge(&candidates);

    let Some(choice) = pick(ranked)? else {
        return Ok(SwitchOutcome::Dismissed);
    };

    // A stale choice (picker returned a label that no longer enumerates)
    // ends the flow like a dismissal
    let Some(entry) = projects.iter().find(|p| p.id == choice) else {
        return Ok(SwitchOutcome::Dismissed);
    };

    tracker.borrow_mut().record_access(&choice)?;
    host.open(&entry.path, new_window)?;

    Ok(SwitchOutcome::Opened(entry.clone()))
}
