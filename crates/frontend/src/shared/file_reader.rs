//! Reading user-selected files from an `<input type="file">`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// First file selected in the input that fired `ev`, if any.
pub fn selected_file(ev: &web_sys::Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Reset the input so that picking the same file again fires `change`.
pub fn reset_input(ev: &web_sys::Event) {
    if let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

/// Read the whole file as UTF-8 text.
pub async fn read_file_as_text(file: &File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Impossibile leggere il file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "Il file non contiene testo".to_string())
}
