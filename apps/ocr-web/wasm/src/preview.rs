//! File previews rendered from data URLs.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlImageElement};

use ocr_types::DocumentKind;

use crate::dom;

/// Load the single-slot preview image (`preview-img-{slot}`).
pub fn show_single(kind: DocumentKind, file: &File) -> Result<(), JsValue> {
    let img: HtmlImageElement = dom::element(&format!("preview-img-{}", kind.slot_id()))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Preview target is not an image element"))?;

    read_as_data_url(file, move |url| img.set_src(&url))
}

/// Rebuild the page grid (`preview-grid-ld`), one item per file in order.
pub fn show_grid(files: &[File]) -> Result<(), JsValue> {
    let document = dom::document()?;
    let grid = dom::element("preview-grid-ld")?;
    grid.set_inner_html("");

    for (index, file) in files.iter().enumerate() {
        let item = document.create_element("div")?;
        item.set_class_name("preview-item");

        let img: HtmlImageElement = document
            .create_element("img")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("Failed to create preview image"))?;
        img.set_alt(&format!("Page {}", index + 1));

        let caption = document.create_element("div")?;
        caption.set_class_name("preview-item-number");
        caption.set_text_content(Some(&format!("Page {}", index + 1)));

        item.append_child(&img)?;
        item.append_child(&caption)?;
        grid.append_child(&item)?;

        read_as_data_url(file, move |url| img.set_src(&url))?;
    }
    Ok(())
}

/// Read a file as a data URL and hand the result to `on_load`.
fn read_as_data_url(
    file: &File,
    on_load: impl FnOnce(String) + 'static,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_for_load = reader.clone();

    let onload = Closure::once(Box::new(move |_event: web_sys::ProgressEvent| {
        if let Ok(result) = reader_for_load.result() {
            if let Some(url) = result.as_string() {
                on_load(url);
            }
        }
    }) as Box<dyn FnOnce(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    reader.read_as_data_url(file)?;
    Ok(())
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_grid_builds_one_item_per_file() {
        let document = crate::dom::document().unwrap();
        let grid = document.create_element("div").unwrap();
        grid.set_id("preview-grid-ld");
        document.body().unwrap().append_child(&grid).unwrap();

        let parts = js_sys::Array::of1(&JsValue::from_str("fake image bytes"));
        let a = File::new_with_str_sequence(parts.as_ref(), "p1.jpg").unwrap();
        let b = File::new_with_str_sequence(parts.as_ref(), "p2.jpg").unwrap();

        show_grid(&[a, b]).unwrap();

        let items = document.query_selector_all(".preview-item").unwrap();
        assert_eq!(items.length(), 2);

        let captions = document.query_selector_all(".preview-item-number").unwrap();
        assert_eq!(
            captions.item(0).unwrap().text_content().unwrap(),
            "Page 1"
        );
        assert_eq!(
            captions.item(1).unwrap().text_content().unwrap(),
            "Page 2"
        );
    }
}
