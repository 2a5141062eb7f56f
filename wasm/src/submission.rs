use crate::Result;
use crate::component::alert::alert_on_error;
use crate::error::Error;
use crate::utils::{
    add_class, add_event_listener, create_element, get_element_by_id, get_element_by_id_dyn,
    query_selector_all, query_selector_single_element, remove_class,
};
use documents_manager::text_limit::TextLimit;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

pub const SUBMISSION_FORM_ID: &str = "submission_form";
const SUBMIT_BUTTON_ID: &str = "sub_button";
const TEXT_FIELD_SELECTOR: &str = ".text_area_form";
const INVALID_CLASS: &str = "is-invalid";
const NOTE_CLASS: &str = "text-danger";

/// Check the texts of the submission form before letting it be sent.
pub fn init_submission_form(document: &Document) -> Result<()> {
    let button = get_element_by_id(document, SUBMIT_BUTTON_ID)?;
    let document = document.clone();
    add_event_listener(&button, "click", move |event| {
        event.prevent_default();
        alert_on_error(submit_if_valid(&document));
    })
}

fn submit_if_valid(document: &Document) -> Result<()> {
    let form = get_element_by_id_dyn::<HtmlFormElement>(document, SUBMISSION_FORM_ID)?;
    let texts_valid = check_text_fields(document, &form)?;

    // Browser checks run even when a text is invalid so every problem is shown at once.
    let fields_valid = form.report_validity();
    if texts_valid && fields_valid {
        form.submit()?;
    }

    Ok(())
}

/// Mark every text outside its limits, returning whether all of them are valid.
pub fn check_text_fields(document: &Document, form: &Element) -> Result<bool> {
    for note in query_selector_all(form, &format!("{TEXT_FIELD_SELECTOR} small.{NOTE_CLASS}"))? {
        note.remove();
    }

    let mut all_valid = true;
    for text_field in query_selector_all(form, TEXT_FIELD_SELECTOR)? {
        all_valid &= check_text_field(document, &text_field)?;
    }

    Ok(all_valid)
}

fn check_text_field(document: &Document, text_field: &Element) -> Result<bool> {
    let limit = read_limit(text_field)?;
    let text_area = query_selector_single_element(text_field, "textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    remove_class(&text_area, INVALID_CLASS);

    match limit.check(&text_area.value()) {
        Ok(()) => Ok(true),
        Err(violation) => {
            log::debug!("Text is out of its limits [violation: {violation:?}]");
            add_class(&text_area, INVALID_CLASS);

            let note = create_element(document, "small")?;
            add_class(&note, NOTE_CLASS);
            note.set_text_content(Some(&violation.to_string()));
            text_area.insert_adjacent_element("afterend", &note)?;

            Ok(false)
        }
    }
}

fn read_limit(text_field: &Element) -> Result<TextLimit> {
    let value_of = |selector: &str| -> Result<String> {
        Ok(query_selector_single_element(text_field, selector)?
            .dyn_into::<HtmlInputElement>()?
            .value())
    };

    TextLimit::parse(&value_of(".measure")?, &value_of(".min")?, &value_of(".max")?)
        .map_err(|error| Error::from_parent("The submission form is misconfigured.", error.into()))
}
