mod component;
mod error;
mod submission;
mod submission_window;
mod utils;

use crate::component::alert::alert_on_error;
use crate::component::tab_group::init_tab_groups;
use crate::submission::{SUBMISSION_FORM_ID, init_submission_form};
use crate::submission_window::{DATES_FORM_ID, init_submission_window_editor};
use crate::utils::get_document;
use wasm_bindgen::prelude::*;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    alert_on_error(init_page());
}

/// Bind every component present in the current page.
fn init_page() -> Result<()> {
    let document = get_document()?;

    if document.get_element_by_id(DATES_FORM_ID).is_some() {
        init_submission_window_editor(&document)?;
    }
    if document.get_element_by_id(SUBMISSION_FORM_ID).is_some() {
        init_submission_form(&document)?;
    }
    init_tab_groups(&document)?;

    Ok(())
}
