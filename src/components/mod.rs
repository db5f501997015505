mod gallery_grid;
mod lightbox_modal;
mod notice_stack;

pub use gallery_grid::GalleryGrid;
pub use lightbox_modal::LightboxModal;
pub use notice_stack::NoticeStack;
