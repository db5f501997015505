use leptos::prelude::*;

use crate::app::GalleryCtx;
use crate::notify::NoticeKind;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().unwrap();

    view! {
        <div
            style="position: fixed; bottom: 16px; right: 16px; z-index: 1100; \
                   display: flex; flex-direction: column; gap: 8px; align-items: flex-end;"
        >
            {move || {
                ctx.notices
                    .get()
                    .into_iter()
                    .map(|notice| {
                        let background = match notice.kind {
                            NoticeKind::Info => "#2f5d3a",
                            NoticeKind::Error => "#6b2430",
                        };
                        view! {
                            <div style=format!(
                                "background: {}; color: #f2f2f5; padding: 10px 14px; \
                                 border-radius: 6px; font-size: 13px; \
                                 box-shadow: 0 2px 10px rgba(0,0,0,0.4);",
                                background
                            )>
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
