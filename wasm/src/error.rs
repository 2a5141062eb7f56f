use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

pub const DEFAULT_ERROR_MESSAGE: &str =
    "An error has occurred. Please reload the page and try again.";

pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
        }
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::from(parent)),
        }
    }

    pub fn missing_element(selector: &str) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("`{selector}` element does not exist"),
        )
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &value
                .as_string()
                .unwrap_or_else(|| format!("Unknown error has happened: {value:?}")),
        )
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("A cast has failed for element: {element:?}"),
        )
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("A cast has failed for node: {node:?}"),
        )
    }
}

impl From<documents_manager::Error> for Error {
    fn from(error: documents_manager::Error) -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE, &error.to_string())
    }
}

impl From<serde_json_wasm::de::Error> for Error {
    fn from(error: serde_json_wasm::de::Error) -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE, &error.to_string())
    }
}
