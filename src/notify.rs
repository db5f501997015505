use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen before it is removed.
pub const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient, non-blocking message shown in the corner of the page.
/// Soft failures from the platform actions surface here instead of
/// interrupting the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        }
    }
}

/// Append a notice and schedule its removal by id once the TTL elapses.
/// Fire-and-forget: nothing waits on the timer.
pub fn push(set_notices: WriteSignal<Vec<Notice>>, notice: Notice) {
    let id = notice.id.clone();
    set_notices.update(|all| all.push(notice));

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        set_notices.update(|all| all.retain(|n| n.id != id));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_constructor_sets_kind_and_message() {
        let notice = Notice::info("Image URL copied to clipboard");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, "Image URL copied to clipboard");
    }

    #[test]
    fn error_constructor_sets_kind_and_message() {
        let notice = Notice::error("Failed to copy image URL");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to copy image URL");
    }

    #[test]
    fn each_notice_gets_a_distinct_id() {
        let a = Notice::info("same text");
        let b = Notice::info("same text");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }
}
