use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, ShareData};

pub const SHARE_TITLE: &str = "Check out this cat image!";
pub const SHARE_TEXT: &str = "I found this awesome cat image.";

/// Failures from the optional browser capabilities. All of them are soft:
/// callers post a notice and leave the lightbox state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The platform lacks the capability entirely.
    #[error("Share feature is not supported in your browser")]
    Unsupported,

    /// The capability exists but the call was rejected or could not be set up.
    #[error("{0}")]
    Failed(String),
}

/// Terminal outcomes of a share invocation that reached the platform.
/// Dismissing the share sheet is a user decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
}

/// File name a saved image should get: the last path segment of its
/// reference, as in `images/cat3.jpg → cat3.jpg`.
pub fn download_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Synthesize a download of `url` through a transient anchor element.
/// The anchor is appended, clicked, and removed before returning, so no
/// stray elements remain in the document.
pub fn trigger_download(url: &str) -> Result<(), ActionError> {
    let window = web_sys::window().ok_or_else(|| failed("no window"))?;
    let document = window.document().ok_or_else(|| failed("no document"))?;
    let body = document.body().ok_or_else(|| failed("no document body"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| failed("could not create download link"))?
        .dyn_into()
        .map_err(|_| failed("could not create download link"))?;
    anchor.set_href(url);
    anchor.set_download(download_name(url));

    body.append_child(&anchor)
        .map_err(|_| failed("could not attach download link"))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|_| failed("could not detach download link"))?;

    Ok(())
}

/// Write `text` to the system clipboard. Resolves once the platform
/// confirms or rejects the write.
pub async fn copy_text(text: &str) -> Result<(), ActionError> {
    let window = web_sys::window().ok_or_else(|| failed("no window"))?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ActionError::Failed(describe_js_error(&err)))
}

/// Probe for `navigator.share` before generating a call to it: the binding
/// itself throws on platforms where the property is absent.
pub fn share_supported() -> bool {
    web_sys::window()
        .and_then(|w| {
            let navigator = w.navigator();
            js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("share")).ok()
        })
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Invoke the native share sheet with the fixed title/text and `url` as the
/// payload. Returns `Unsupported` without touching the platform when the
/// capability is absent.
pub async fn share_url(url: &str) -> Result<ShareOutcome, ActionError> {
    if !share_supported() {
        return Err(ActionError::Unsupported);
    }

    let window = web_sys::window().ok_or_else(|| failed("no window"))?;
    let data = ShareData::new();
    data.set_title(SHARE_TITLE);
    data.set_text(SHARE_TEXT);
    data.set_url(url);

    match JsFuture::from(window.navigator().share_with_data(&data)).await {
        Ok(_) => Ok(ShareOutcome::Shared),
        Err(err) => {
            let name = err
                .dyn_ref::<web_sys::DomException>()
                .map(|exception| exception.name());
            classify_rejection(name.as_deref(), describe_js_error(&err))
        }
    }
}

/// Map a share rejection onto its outcome. The share sheet rejects with an
/// `AbortError` when the user dismisses it; everything else is genuine.
fn classify_rejection(name: Option<&str>, detail: String) -> Result<ShareOutcome, ActionError> {
    match name {
        Some("AbortError") => Ok(ShareOutcome::Cancelled),
        _ => Err(ActionError::Failed(detail)),
    }
}

fn failed(detail: &str) -> ActionError {
    ActionError::Failed(detail.to_string())
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        format!("{}: {}", exception.name(), exception.message())
    } else {
        err.as_string()
            .unwrap_or_else(|| "unknown platform error".to_string())
    }
}
