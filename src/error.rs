use thiserror::Error;

/// Page wiring failures. The animation engine itself cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },
    #[error("2d context not supported on #{0}")]
    NoContext(String),
}

impl From<SetupError> for wasm_bindgen::JsValue {
    fn from(err: SetupError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            SetupError::MissingElement("particle-canvas").to_string(),
            "element #particle-canvas not found"
        );
        assert_eq!(
            SetupError::WrongElement {
                id: "video",
                expected: "HtmlVideoElement"
            }
            .to_string(),
            "element #video is not a HtmlVideoElement"
        );
    }
}
