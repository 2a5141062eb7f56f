use crate::Result;
use crate::component::template::get_template;
use crate::utils::{get_body, get_document, get_window, query_selector_single_element};

const ALERT_ID: &str = "alert";

pub enum AlertLevel {
    Info,
    Error,
}

impl AlertLevel {
    fn template_id(&self) -> &'static str {
        match self {
            AlertLevel::Info => "alert-info",
            AlertLevel::Error => "alert-error",
        }
    }
}

/// Show `text` in an alert built from the page's alert template.
/// Pages without such a template fall back to the browser's own alert.
pub fn create_alert(text: &str, level: AlertLevel) {
    if let Err(error) = try_create_alert(text, &level) {
        log::warn!("Can't display alert from template, falling back to window alert: {error:?}");
        if let Err(error) = get_window().and_then(|window| Ok(window.alert_with_message(text)?)) {
            log::error!("Can't display alert: {error:?}");
        }
    }
}

fn try_create_alert(text: &str, level: &AlertLevel) -> Result<()> {
    let document = get_document()?;
    if let Some(previous_alert) = document.get_element_by_id(ALERT_ID) {
        previous_alert.remove();
    }

    let alert = get_template(&document, level.template_id())?;
    let content_container = query_selector_single_element(&alert, ".alert-content")?;
    content_container.set_text_content(Some(text));

    get_body()?.append_child(&alert)?;
    Ok(())
}

/// Log the technical details of an error, then tell the user about it.
pub fn alert_on_error(result: Result<()>) {
    if let Err(error) = result {
        log::error!("{error:?}");
        create_alert(&error.to_string(), AlertLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ALERT_TEMPLATES: &str = r#"
        <template id="alert-info"><div id="alert" class="alert-info"><p class="alert-content"></p></div></template>
        <template id="alert-error"><div id="alert" class="alert-error"><p class="alert-content"></p></div></template>
    "#;

    #[wasm_bindgen_test]
    fn should_display_single_alert() {
        let body = get_body().unwrap();
        body.set_inner_html(ALERT_TEMPLATES);

        create_alert("First", AlertLevel::Info);
        create_alert("Second", AlertLevel::Error);

        let alerts = body.query_selector_all("#alert").unwrap();
        assert_eq!(1, alerts.length());
        let alert = get_document().unwrap().get_element_by_id(ALERT_ID).unwrap();
        assert_eq!("alert-error", alert.class_name());
        assert_eq!(Some("Second".to_owned()), alert.text_content());
    }

    #[wasm_bindgen_test]
    fn should_alert_user_message_on_error() {
        let body = get_body().unwrap();
        body.set_inner_html(ALERT_TEMPLATES);

        alert_on_error(Err(Error::new("Dates can't be edited.", "technical")));

        let alert = get_document().unwrap().get_element_by_id(ALERT_ID).unwrap();
        assert_eq!(Some("Dates can't be edited.".to_owned()), alert.text_content());
    }
}
