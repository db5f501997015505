pub const DEFAULT_IMAGE_FOLDER: &str = "images/";
pub const DEFAULT_IMAGE_COUNT: u32 = 30;

/// Fixed gallery configuration: an asset folder and the number of images
/// in the `cat{n}.jpg` series hosted there. Never mutated after startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub folder: String,
    pub count: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            folder: DEFAULT_IMAGE_FOLDER.to_string(),
            count: DEFAULT_IMAGE_COUNT,
        }
    }
}

impl GalleryConfig {
    pub fn new(folder: impl Into<String>, count: u32) -> Self {
        Self {
            folder: folder.into(),
            count,
        }
    }

    /// Path of image `n` in the series. Identifiers are 1-indexed and
    /// contiguous; callers outside `images()` are expected to stay in
    /// `[1, count]`.
    pub fn image_path(&self, n: u32) -> String {
        format!("{}cat{}.jpg", self.folder, n)
    }

    pub fn image_label(&self, n: u32) -> String {
        format!("Cat {}", n)
    }

    /// Enumerate every image in the series, in DOM order. A zero count
    /// yields an empty gallery rather than an error.
    pub fn images(&self) -> Vec<GalleryImage> {
        (1..=self.count)
            .map(|n| GalleryImage {
                index: n,
                path: self.image_path(n),
                label: self.image_label(n),
            })
            .collect()
    }
}

/// One thumbnail entry produced by the naming convention. The lightbox only
/// ever displays paths originating here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub index: u32,
    pub path: String,
    pub label: String,
}
