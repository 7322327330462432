//! Save a binary payload as a browser download.
//!
//! Wraps the bytes in a `Blob`, mints an object URL, clicks a synthetic
//! anchor carrying the `download` attribute, then revokes the URL. The
//! anchor never navigates the page. Requires a browser environment; the
//! native build is a no-op.

/// Trigger a download of `bytes` under `filename`.
///
/// # Errors
///
/// Returns a human-readable message when the DOM refuses any step.
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no document body")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob creation failed: {e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("object url failed: {e:?}"))?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| format!("anchor creation failed: {e:?}"))?
            .dyn_into()
            .map_err(|_| "anchor has unexpected element type".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor)
            .map_err(|e| format!("anchor attach failed: {e:?}"))?;
        anchor.click();
        anchor.remove();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, filename, mime);
        Ok(())
    }
}
