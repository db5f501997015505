use leptos::prelude::*;

use crate::app::GalleryCtx;

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().unwrap();
    let images = ctx.config.with_value(|config| config.images());

    view! {
        <div
            id="gallery"
            style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); \
                   gap: 12px;"
        >
            {images
                .into_iter()
                .map(|image| {
                    let set_lightbox = ctx.set_lightbox;
                    let path = image.path.clone();
                    view! {
                        <div
                            style="cursor: pointer; overflow: hidden; border-radius: 6px; \
                                   background: #1a1a22;"
                            on:click=move |_| {
                                let path = path.clone();
                                set_lightbox.update(|l| l.open(path));
                            }
                        >
                            <img
                                src=image.path
                                alt=image.label
                                loading="lazy"
                                style="display: block; width: 100%; height: 180px; object-fit: cover;"
                            />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
