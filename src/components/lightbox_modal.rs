use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::GalleryCtx;
use crate::notify::{self, Notice};
use crate::platform::{self, ActionError, ShareOutcome};

#[component]
pub fn LightboxModal() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().unwrap();

    move || {
        let image_url = ctx.lightbox.with(|l| l.displayed().map(str::to_string));

        image_url.map(|image_url| {
            let set_lightbox = ctx.set_lightbox;
            let set_notices = ctx.set_notices;

            let url_for_download = image_url.clone();
            let on_download = move |_| {
                if let Err(err) = platform::trigger_download(&url_for_download) {
                    logging::error!("download failed: {err}");
                    notify::push(set_notices, Notice::error("Could not start the download"));
                }
            };

            let url_for_copy = image_url.clone();
            let on_copy = move |_| {
                let url = url_for_copy.clone();
                spawn_local(async move {
                    match platform::copy_text(&url).await {
                        Ok(()) => {
                            notify::push(set_notices, Notice::info("Image URL copied to clipboard"));
                        }
                        Err(err) => {
                            logging::error!("clipboard write rejected: {err}");
                            notify::push(set_notices, Notice::error("Failed to copy image URL"));
                        }
                    }
                });
            };

            let url_for_share = image_url.clone();
            let on_share = move |_| {
                let url = url_for_share.clone();
                spawn_local(async move {
                    match platform::share_url(&url).await {
                        Ok(ShareOutcome::Shared) => logging::log!("shared {url}"),
                        // Dismissing the share sheet is not a failure; log only.
                        Ok(ShareOutcome::Cancelled) => logging::warn!("share dismissed by user"),
                        Err(err @ ActionError::Unsupported) => {
                            notify::push(set_notices, Notice::error(err.to_string()));
                        }
                        Err(ActionError::Failed(detail)) => {
                            logging::error!("share failed: {detail}");
                            notify::push(set_notices, Notice::error("Sharing failed"));
                        }
                    }
                });
            };

            view! {
                <div
                    style="position: fixed; inset: 0; background: rgba(0,0,0,0.9); \
                           display: flex; align-items: center; justify-content: center; \
                           z-index: 1000;"
                    // Identity, not containment: only a click on the backdrop
                    // itself closes; clicks on the image or buttons bubble here
                    // with a different target and are ignored.
                    on:click=move |ev: web_sys::MouseEvent| {
                        if ev.target() == ev.current_target() {
                            set_lightbox.update(|l| l.close());
                        }
                    }
                >
                    <button
                        style="position: absolute; top: 16px; right: 20px; \
                               background: transparent; color: #e8e8ee; border: none; \
                               font-size: 32px; line-height: 1; cursor: pointer;"
                        aria-label="Close"
                        on:click=move |_| set_lightbox.update(|l| l.close())
                    >
                        "\u{00d7}"
                    </button>
                    <div style="display: flex; flex-direction: column; align-items: center; \
                                gap: 16px; max-width: 90vw; max-height: 90vh;">
                        <img
                            src=image_url
                            alt="Expanded view of selected cat image"
                            style="max-width: 90vw; max-height: 75vh; object-fit: contain; \
                                   border-radius: 4px; box-shadow: 0 0 40px rgba(0,0,0,0.6);"
                        />
                        <div style="display: flex; gap: 8px;">
                            <button
                                style="background: #2a2a33; color: #e8e8ee; border: 1px solid #44444f; \
                                       padding: 8px 16px; border-radius: 4px; cursor: pointer; \
                                       font-size: 13px;"
                                on:click=on_download
                            >
                                "Download Image"
                            </button>
                            <button
                                style="background: #2a2a33; color: #e8e8ee; border: 1px solid #44444f; \
                                       padding: 8px 16px; border-radius: 4px; cursor: pointer; \
                                       font-size: 13px;"
                                on:click=on_copy
                            >
                                "Copy Image URL"
                            </button>
                            <button
                                style="background: #2a2a33; color: #e8e8ee; border: 1px solid #44444f; \
                                       padding: 8px 16px; border-radius: 4px; cursor: pointer; \
                                       font-size: 13px;"
                                on:click=on_share
                            >
                                "Share Image"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
