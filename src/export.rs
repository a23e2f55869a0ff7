use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use crate::error::ExportError;
use crate::renderer::paint_scene;
use crate::state::SceneModel;
use crate::surface::RasterSurface;

pub const PNG_MIME: &str = "image/png";

/// How long a download's blob URL stays alive after the click, in milliseconds
pub const REVOKE_DELAY_MS: i32 = 1_000;

/// Rasterize the scene exactly as the canvas currently shows it.
pub fn render_to_image(scene: &SceneModel) -> RgbaImage {
    let size = scene.canvas_size();
    let mut surface = RasterSurface::new(size.width, size.height);
    paint_scene(scene, &mut surface);
    surface.into_image()
}

/// Render the scene and encode it as PNG bytes
pub fn export_png(scene: &SceneModel) -> Result<Vec<u8>, ExportError> {
    let image = render_to_image(scene);
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "Encoded {}x{} PNG ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// File name offered for a download made at `timestamp` (seconds since the UNIX epoch)
pub fn export_file_name(timestamp: u64) -> String {
    format!("sketch-{timestamp}.png")
}

/// Write exported bytes into `dir`, returning the path written.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(
    bytes: &[u8],
    dir: &std::path::Path,
    file_name: &str,
) -> Result<std::path::PathBuf, ExportError> {
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Saved drawing to {}", path.display());
    Ok(path)
}

/// Hand exported bytes to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_png(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let browser_err = |err: wasm_bindgen::JsValue| ExportError::Browser(format!("{err:?}"));

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(PNG_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser_err)?;

    let window =
        web_sys::window().ok_or_else(|| ExportError::Browser("no window available".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document available".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(browser_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("failed to create download link".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // The blob is fetched after click() returns, so the URL must outlive this call
    let revoke = wasm_bindgen::closure::Closure::once_into_js(move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke download URL: {err:?}");
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            REVOKE_DELAY_MS,
        )
        .map_err(browser_err)?;
    log::info!("Started download of {file_name}");
    Ok(())
}
