//! Page Chrome Context
//!
//! Shared top bar / sidebar state provided via the Leptos Context API.
//! Pages own it explicitly: set on entry, reset on exit (`on_cleanup`),
//! never left behind as ambient global state.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Greeting shown when no page has claimed the top bar
pub const DEFAULT_TITLE: &str = "Welcome to Tierboard!";

/// How long a failure message stays in the status banner
const STATUS_DISMISS_MS: u64 = 5000;

/// One page-provided top bar action button
#[derive(Clone)]
pub struct TopbarAction {
    pub label: String,
    pub on_click: Callback<()>,
}

/// Page-provided sidebar content (the tier editor on board pages)
pub type SidebarView = Callback<(), AnyView>;

/// Chrome signals provided via context
#[derive(Clone, Copy)]
pub struct PageChrome {
    /// Center title of the top bar - read
    pub title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    /// Page action buttons on the right of the top bar - read
    pub actions: ReadSignal<Vec<TopbarAction>>,
    set_actions: WriteSignal<Vec<TopbarAction>>,
    /// Current failure banner text - read
    pub status: ReadSignal<Option<String>>,
    set_status: WriteSignal<Option<String>>,
    status_seq: StoredValue<u32>,
    /// Sidebar overlay visible - read
    pub sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
    /// Page-provided sidebar content (None = settings panel) - read
    pub sidebar_view: ReadSignal<Option<SidebarView>>,
    set_sidebar_view: WriteSignal<Option<SidebarView>>,
}

impl PageChrome {
    pub fn new() -> Self {
        let (title, set_title) = signal(DEFAULT_TITLE.to_string());
        let (actions, set_actions) = signal(Vec::<TopbarAction>::new());
        let (status, set_status) = signal(None::<String>);
        let (sidebar_open, set_sidebar_open) = signal(false);
        let (sidebar_view, set_sidebar_view) = signal(None::<SidebarView>);
        Self {
            title,
            set_title,
            actions,
            set_actions,
            status,
            set_status,
            status_seq: StoredValue::new(0),
            sidebar_open,
            set_sidebar_open,
            sidebar_view,
            set_sidebar_view,
        }
    }

    pub fn set_title(&self, title: String) {
        self.set_title.set(title);
    }

    pub fn set_actions(&self, actions: Vec<TopbarAction>) {
        self.set_actions.set(actions);
    }

    pub fn set_sidebar_view(&self, view: Option<SidebarView>) {
        self.set_sidebar_view.set(view);
    }

    /// Reset everything a page may have claimed. Called from `on_cleanup`.
    pub fn leave_page(&self) {
        self.set_title.set(DEFAULT_TITLE.to_string());
        self.set_actions.set(Vec::new());
        self.set_sidebar_view.set(None);
        self.set_sidebar_open.set(false);
    }

    pub fn open_sidebar(&self) {
        self.set_sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar_open.set(false);
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar_open.update(|open| *open = !*open);
    }

    /// Surface a failed mutation in the status banner. Auto-dismisses
    /// unless a newer failure has replaced it in the meantime.
    pub fn report_error(&self, message: String) {
        log::warn!("{message}");
        let seq = self.status_seq.with_value(|s| s + 1);
        self.status_seq.set_value(seq);
        self.set_status.set(Some(message));

        let set_status = self.set_status;
        let status_seq = self.status_seq;
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(STATUS_DISMISS_MS)).await;
            if status_seq.with_value(|s| *s) == seq {
                set_status.set(None);
            }
        });
    }

    pub fn dismiss_status(&self) {
        self.set_status.set(None);
    }
}

impl Default for PageChrome {
    fn default() -> Self {
        Self::new()
    }
}

/// The app binds document-level drop listeners exactly once; the board
/// page plugs its handler into this slot on entry and pulls it on exit,
/// so stale listeners never touch disposed page state.
#[derive(Clone, Copy)]
pub struct DropSlot {
    pub handler: ReadSignal<Option<Callback<(u32, leptos_dragdrop::DropBucket)>>>,
    set_handler: WriteSignal<Option<Callback<(u32, leptos_dragdrop::DropBucket)>>>,
}

impl DropSlot {
    pub fn new() -> Self {
        let (handler, set_handler) = signal(None);
        Self { handler, set_handler }
    }

    pub fn install(&self, handler: Callback<(u32, leptos_dragdrop::DropBucket)>) {
        self.set_handler.set(Some(handler));
    }

    pub fn clear(&self) {
        self.set_handler.set(None);
    }
}

impl Default for DropSlot {
    fn default() -> Self {
        Self::new()
    }
}
