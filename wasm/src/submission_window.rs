use crate::Result;
use crate::component::alert::alert_on_error;
use crate::error::Error;
use crate::utils::{
    add_event_listener, get_element_by_id, get_element_by_id_dyn, query_selector_single_element,
    set_attribute, set_visible,
};
use documents_manager::submission_window::config::{ConfirmationPolicy, EditorConfig};
use documents_manager::submission_window::editor::{EditorEvent, EditorState};
use documents_manager::submission_window::view::EditorView;
use documents_manager::submission_window::{EventStart, ProposedWindow};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

pub const DATES_FORM_ID: &str = "dates_form";
const CONFIG_ATTRIBUTE: &str = "data-config";
const EVENT_START_ID: &str = "eb_event_start";

/// Elements displaying the outcome of a validation.
pub enum ConfirmationElements {
    Panel {
        warning_panel: Element,
        warning_text: Element,
        proceed_button: Element,
        warning_back_button: Element,
        error_panel: Element,
        error_text: Element,
        error_back_button: Element,
    },
    Modal {
        dialog: Element,
        dialog_text: Element,
        proceed_button: Element,
        back_button: Element,
    },
}

impl ConfirmationElements {
    fn from_document(document: &Document, policy: &ConfirmationPolicy) -> Result<Self> {
        let elements = match policy {
            ConfirmationPolicy::Panel => {
                let warning_panel = get_element_by_id(document, "warning_div")?;
                let error_panel = get_element_by_id(document, "error_div")?;
                ConfirmationElements::Panel {
                    warning_text: query_selector_single_element(&warning_panel, ".alert")?,
                    proceed_button: get_element_by_id(document, "confirm_edit_warning")?,
                    warning_back_button: get_element_by_id(document, "cancel_update_warning")?,
                    error_text: query_selector_single_element(&error_panel, ".alert")?,
                    error_back_button: get_element_by_id(document, "cancel_update_error")?,
                    warning_panel,
                    error_panel,
                }
            }
            ConfirmationPolicy::Modal => ConfirmationElements::Modal {
                dialog: get_element_by_id(document, "warning_modal")?,
                dialog_text: get_element_by_id(document, "modal-body-warning")?,
                proceed_button: get_element_by_id(document, "confirm_edit_modal")?,
                back_button: get_element_by_id(document, "cancel_update_modal")?,
            },
        };

        Ok(elements)
    }

    fn proceed_button(&self) -> &Element {
        match self {
            ConfirmationElements::Panel { proceed_button, .. }
            | ConfirmationElements::Modal { proceed_button, .. } => proceed_button,
        }
    }

    fn back_buttons(&self) -> Vec<&Element> {
        match self {
            ConfirmationElements::Panel {
                warning_back_button,
                error_back_button,
                ..
            } => vec![warning_back_button, error_back_button],
            ConfirmationElements::Modal { back_button, .. } => vec![back_button],
        }
    }

    fn render(&self, view: &EditorView) {
        match self {
            ConfirmationElements::Panel {
                warning_panel,
                warning_text,
                proceed_button,
                error_panel,
                error_text,
                ..
            } => {
                render_message(warning_panel, warning_text, *view.warning_panel_visible(), view);
                render_message(error_panel, error_text, *view.error_panel_visible(), view);
                set_visible(proceed_button, *view.proceed_visible());
            }
            ConfirmationElements::Modal {
                dialog,
                dialog_text,
                proceed_button,
                ..
            } => {
                render_message(dialog, dialog_text, *view.dialog_visible(), view);
                set_visible(proceed_button, *view.proceed_visible());
            }
        }
    }
}

/// A shown container without a message keeps whatever text it had.
fn render_message(
    container: &Element,
    text_container: &Element,
    visible: bool,
    view: &EditorView,
) {
    if let (true, Some(message)) = (visible, view.message()) {
        text_container.set_text_content(Some(message));
    }
    set_visible(container, visible);
}

/// Every element the editor reads or updates, looked up once.
pub struct EditorElements {
    form: HtmlFormElement,
    read_only: Element,
    edition: Element,
    init_input: HtmlInputElement,
    end_input: HtmlInputElement,
    allow_edit_button: Element,
    confirm_button: Element,
    cancel_button: Element,
    confirmation: ConfirmationElements,
}

impl EditorElements {
    pub fn from_document(document: &Document, policy: &ConfirmationPolicy) -> Result<Self> {
        Ok(Self {
            form: get_element_by_id_dyn(document, DATES_FORM_ID)?,
            read_only: get_element_by_id(document, "allow_edit_div")?,
            edition: get_element_by_id(document, "confirm_edit_div")?,
            init_input: get_element_by_id_dyn(document, "id_init_submission")?,
            end_input: get_element_by_id_dyn(document, "id_end_submission")?,
            allow_edit_button: get_element_by_id(document, "allow_edit")?,
            confirm_button: get_element_by_id(document, "confirm_edit")?,
            cancel_button: get_element_by_id(document, "cancel_update")?,
            confirmation: ConfirmationElements::from_document(document, policy)?,
        })
    }
}

pub struct SubmissionWindowEditor {
    elements: EditorElements,
    config: EditorConfig,
    event_start: EventStart,
    state: Cell<EditorState>,
}

impl SubmissionWindowEditor {
    pub fn new(elements: EditorElements, config: EditorConfig, event_start: EventStart) -> Self {
        Self {
            elements,
            config,
            event_start,
            state: Cell::new(EditorState::default()),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state.get()
    }

    /// The dates are read from the inputs every time, as the user may have changed them.
    fn read_window(&self) -> ProposedWindow {
        ProposedWindow::parse(
            &self.elements.init_input.value(),
            &self.elements.end_input.value(),
        )
    }

    pub fn dispatch(&self, event: EditorEvent) -> Result<()> {
        let state = self.state.get().transition(event, &self.event_start);
        self.state.set(state);
        self.render()?;

        if state.is_terminal() {
            log::info!("Submitting submission dates");
            self.elements.form.submit()?;
        }

        Ok(())
    }

    pub fn render(&self) -> Result<()> {
        let view = EditorView::render(&self.state.get(), &self.config);
        let elements = &self.elements;

        set_visible(&elements.read_only, *view.read_only_visible());
        set_visible(&elements.edition, *view.edition_visible());
        set_visible(&elements.confirm_button, *view.edit_buttons_visible());
        set_visible(&elements.cancel_button, *view.edit_buttons_visible());
        elements.init_input.set_disabled(*view.inputs_disabled());
        elements.end_input.set_disabled(*view.inputs_disabled());
        if *view.sync_end_minimum() {
            self.sync_end_minimum()?;
        }
        elements.confirmation.render(&view);

        Ok(())
    }

    /// Keep the end input from offering dates before the init date.
    fn sync_end_minimum(&self) -> Result<()> {
        let init_submission = self.elements.init_input.value();
        set_attribute(&self.elements.end_input, "min", &init_submission)
    }

    /// Wire every control of the editor to the matching event.
    pub fn bind(self: &Rc<Self>) -> Result<()> {
        let elements = &self.elements;
        self.bind_click(&elements.allow_edit_button, |_| EditorEvent::AllowEdit)?;
        self.bind_click(&elements.confirm_button, |editor| {
            EditorEvent::Confirm(editor.read_window())
        })?;
        self.bind_click(&elements.cancel_button, |_| EditorEvent::Cancel)?;
        self.bind_click(elements.confirmation.proceed_button(), |_| {
            EditorEvent::Proceed
        })?;
        for back_button in elements.confirmation.back_buttons() {
            self.bind_click(back_button, |_| EditorEvent::Back)?;
        }

        let editor = Rc::clone(self);
        add_event_listener(&elements.init_input, "input", move |_| {
            if editor.state() == EditorState::Editing {
                alert_on_error(editor.sync_end_minimum());
            }
        })
    }

    fn bind_click<F>(self: &Rc<Self>, element: &Element, to_event: F) -> Result<()>
    where
        F: Fn(&SubmissionWindowEditor) -> EditorEvent + 'static,
    {
        let editor = Rc::clone(self);
        add_event_listener(element, "click", move |event| {
            event.prevent_default();
            alert_on_error(editor.dispatch(to_event(&editor)));
        })
    }
}

fn read_config(form: &Element) -> Result<EditorConfig> {
    match form.get_attribute(CONFIG_ATTRIBUTE) {
        None => Ok(EditorConfig::default()),
        Some(config) => serde_json_wasm::from_str(&config).map_err(|error| {
            Error::from_parent("The page is misconfigured.", Error::from(error))
        }),
    }
}

fn read_event_start(document: &Document) -> Result<EventStart> {
    let input = get_element_by_id_dyn::<HtmlInputElement>(document, EVENT_START_ID)?;
    let event_start = EventStart::parse(&input.value());
    if event_start.instant().is_none() {
        log::warn!("Event start can't be read [value: {}]", input.value());
    }
    Ok(event_start)
}

pub fn init_submission_window_editor(document: &Document) -> Result<Rc<SubmissionWindowEditor>> {
    let config = read_config(&get_element_by_id(document, DATES_FORM_ID)?)?;
    let elements = EditorElements::from_document(document, config.policy())?;
    let event_start = read_event_start(document)?;

    let editor = Rc::new(SubmissionWindowEditor::new(elements, config, event_start));
    editor.render()?;
    editor.bind()?;

    Ok(editor)
}
