//! Page wiring and the submit flow.
//!
//! `App::bootstrap` installs every event handler (tabs, the three upload
//! areas, the remove and submit buttons); the handlers share one
//! `Rc<App>`. Only UI event callbacks touch the slot state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, File, FileList};

use ocr_types::{validate_selection, DocumentKind, FileMeta, SelectionError};

use crate::config::AppConfig;
use crate::slots::Slots;
use crate::{api, banner, dom, preview, render};

pub struct App {
    config: AppConfig,
    slots: RefCell<Slots<File>>,
}

impl App {
    /// Wire the whole page. The returned handle may be dropped; the event
    /// closures keep their own clones.
    pub fn bootstrap(config: AppConfig) -> Result<Rc<Self>, JsValue> {
        let app = Rc::new(Self {
            config,
            slots: RefCell::new(Slots::new()),
        });

        dom::init_tabs()?;
        for kind in DocumentKind::ALL {
            wire_slot(&app, kind)?;
        }

        web_sys::console::log_1(&"OCR intake page ready".into());
        Ok(app)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

fn wire_slot(app: &Rc<App>, kind: DocumentKind) -> Result<(), JsValue> {
    let slot = kind.slot_id();
    let area = dom::html_element(&format!("upload-area-{}", slot))?;
    let input = dom::input(&format!("file-input-{}", slot))?;

    // <input type=file> change
    {
        let app = Rc::clone(app);
        let input_el = input.clone();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let files = input_el.files().map(|l| file_list_to_vec(&l)).unwrap_or_default();
            handle_selection(&app, kind, files);
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // dragover highlights the area
    {
        let area_el = area.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::DragEvent| {
            event.prevent_default();
            let _ = area_el.class_list().add_1("dragover");
        }) as Box<dyn FnMut(_)>);
        area.add_event_listener_with_callback("dragover", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // dragleave clears the highlight
    {
        let area_el = area.clone();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::DragEvent| {
            let _ = area_el.class_list().remove_1("dragover");
        }) as Box<dyn FnMut(_)>);
        area.add_event_listener_with_callback("dragleave", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // drop feeds the selection handler
    {
        let app = Rc::clone(app);
        let area_el = area.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::DragEvent| {
            event.prevent_default();
            let _ = area_el.class_list().remove_1("dragover");
            let files = event
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|l| file_list_to_vec(&l))
                .unwrap_or_default();
            handle_selection(&app, kind, files);
        }) as Box<dyn FnMut(_)>);
        area.add_event_listener_with_callback("drop", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // clicking the area opens the picker, unless the browse button was hit
    // (its own click handler already does that)
    {
        let input_el = input.clone();
        let handler = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let on_browse_button = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.class_list().contains("browse-btn"))
                .unwrap_or(false);
            if !on_browse_button {
                input_el.click();
            }
        }) as Box<dyn FnMut(_)>);
        area.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // remove button
    {
        let app = Rc::clone(app);
        let button = dom::element(&format!("remove-btn-{}", slot))?;
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Err(e) = remove_file(&app, kind) {
                web_sys::console::error_1(&e);
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // submit button
    {
        let app = Rc::clone(app);
        let button = dom::element(&format!("submit-btn-{}", slot))?;
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let app = Rc::clone(&app);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = submit_document(&app, kind).await {
                    web_sys::console::error_1(&e);
                }
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(())
}

fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size() as u64)
}

fn handle_selection(app: &Rc<App>, kind: DocumentKind, files: Vec<File>) {
    // Cancelled picker dialogs fire change events with no files.
    if files.is_empty() {
        return;
    }
    if let Err(e) = accept_selection(app, kind, files) {
        web_sys::console::error_1(&e);
    }
}

fn accept_selection(app: &Rc<App>, kind: DocumentKind, files: Vec<File>) -> Result<(), JsValue> {
    let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();
    if let Err(violation) = validate_selection(&metas, kind, app.config.limits()) {
        return banner::show_error(&violation.to_string(), app.config.auto_hide_error_ms());
    }

    if kind.accepts_multiple() {
        preview::show_grid(&files)?;
    } else {
        preview::show_single(kind, &files[0])?;
    }
    app.slots.borrow_mut().get_mut(kind).select(files);

    let slot = kind.slot_id();
    dom::hide(&format!("upload-area-{}", slot))?;
    dom::show(&format!("preview-{}", slot))?;
    dom::hide(&format!("results-{}", slot))?;
    Ok(())
}

fn remove_file(app: &Rc<App>, kind: DocumentKind) -> Result<(), JsValue> {
    app.slots.borrow_mut().get_mut(kind).clear();

    let slot = kind.slot_id();
    dom::show(&format!("upload-area-{}", slot))?;
    dom::hide(&format!("preview-{}", slot))?;
    dom::hide(&format!("results-{}", slot))?;
    dom::input(&format!("file-input-{}", slot))?.set_value("");
    Ok(())
}

async fn submit_document(app: &Rc<App>, kind: DocumentKind) -> Result<(), JsValue> {
    // Take a snapshot of the selection; the RefCell borrow must not live
    // across the await.
    let files: Vec<File> = {
        let mut slots = app.slots.borrow_mut();
        let slot = slots.get_mut(kind);
        if slot.is_busy() {
            return Ok(());
        }
        if slot.is_empty() {
            Vec::new()
        } else {
            slot.set_busy(true);
            slot.files().to_vec()
        }
    };

    if files.is_empty() {
        return banner::show_error(
            &SelectionError::EmptySelection.to_string(),
            app.config.auto_hide_error_ms(),
        );
    }

    // The flag must come back down on every exit path, including DOM
    // failures mid-flight; a stuck flag would ignore all later submits.
    let result = run_submission(app, kind, &files).await;
    app.slots.borrow_mut().get_mut(kind).set_busy(false);
    result
}

async fn run_submission(app: &Rc<App>, kind: DocumentKind, files: &[File]) -> Result<(), JsValue> {
    banner::show_loading(true)?;
    let outcome = api::submit(&app.config, kind, files).await;
    banner::show_loading(false)?;

    match outcome {
        Ok(body) => {
            render::render_results(kind, &body)?;
            dom::show(&format!("results-{}", kind.slot_id()))?;
        }
        Err(message) => {
            banner::show_error(&message, app.config.auto_hide_error_ms())?;
        }
    }
    Ok(())
}
