//! Application Context
//!
//! Per-page-load state provided via the Leptos Context API: the resolved
//! view mode and a transient user notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::Session;
use crate::view_mode::ViewMode;

/// How long a notice stays on screen
const NOTICE_MS: u32 = 4000;

/// App-wide context provided at the root
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendering mode, fixed for this page load
    pub view_mode: ViewMode,
    notice: RwSignal<Option<String>>,
    /// Bumped per notice so a stale dismiss timer cannot clear a newer one
    notice_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
        }
    }

    /// Reactive read of the current notice
    pub fn notice(&self) -> Option<String> {
        self.notice.get()
    }

    /// Show a transient notice, replacing any current one
    pub fn notify(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);

        let notice = self.notice;
        let notice_seq = self.notice_seq;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            if notice_seq.get_untracked() == seq {
                notice.set(None);
            }
        });
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}

/// Whether mutation affordances render: the page is not in customer view
/// and the session is authenticated.
pub fn use_edit_mode() -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    let ctx = expect_context::<AppContext>();
    let session = expect_context::<Session>();
    move || !ctx.view_mode.read_only && session.is_authenticated()
}
