use leptos::ev;
use leptos::prelude::*;

use crate::components::{GalleryGrid, LightboxModal, NoticeStack};
use crate::lightbox::Lightbox;
use crate::notify::Notice;
use crate::state::GalleryConfig;

/// Shared handles for the page: the immutable gallery configuration plus
/// the lightbox and notice state. Provided once by [`App`], consumed by the
/// components through `use_context`.
#[derive(Clone, Copy)]
pub struct GalleryCtx {
    pub config: StoredValue<GalleryConfig>,
    pub lightbox: ReadSignal<Lightbox>,
    pub set_lightbox: WriteSignal<Lightbox>,
    pub notices: ReadSignal<Vec<Notice>>,
    pub set_notices: WriteSignal<Vec<Notice>>,
}

#[component]
pub fn App() -> impl IntoView {
    let (lightbox, set_lightbox) = signal(Lightbox::new());
    let (notices, set_notices) = signal::<Vec<Notice>>(Vec::new());
    let config = StoredValue::new(GalleryConfig::default());

    provide_context(GalleryCtx {
        config,
        lightbox,
        set_lightbox,
        notices,
        set_notices,
    });

    // Cancel key, guarded so a stray Escape while closed never registers a
    // transition. Window-level because the overlay itself is not focusable.
    window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && lightbox.with_untracked(|l| l.is_open()) {
            set_lightbox.update(|l| l.close());
        }
    });

    view! {
        <div style="min-height: 100vh; background: #101014; color: #e8e8ee; \
                    font-family: system-ui, sans-serif; padding: 24px; box-sizing: border-box;">
            <h1 style="margin: 0 0 20px; font-size: 22px; font-weight: 600;">
                "Cat Gallery"
            </h1>
            <GalleryGrid />
            <LightboxModal />
            <NoticeStack />
        </div>
    }
}
