//! Input Field Components
//!
//! Labelled text input whose look comes from the variant table:
//! - Default: outlined
//! - Filled: tinted background
//! - Invalid: error border, paired with an error message

use dioxus::prelude::*;

use crate::variant::{StyleAttrs, Variant, VariantTable};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputVariant {
    #[default]
    Default,
    Filled,
    Invalid,
}

static INPUT_VARIANTS: VariantTable<InputVariant> = VariantTable::new(
    "input-field",
    &[
        ("default", InputVariant::Default, StyleAttrs::class("")),
        ("filled", InputVariant::Filled, StyleAttrs::class("input-filled")),
        ("invalid", InputVariant::Invalid, StyleAttrs::class("input-invalid")),
    ],
);

impl Variant for InputVariant {
    fn table() -> &'static VariantTable<Self> {
        &INPUT_VARIANTS
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub variant: InputVariant,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Error text shown under the field
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// ID for label association
    pub id: String,
}

/// Text input with optional label and error line.
///
/// An `error` forces the invalid variant.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "login-email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let variant = if props.error.is_some() {
        InputVariant::Invalid
    } else {
        props.variant
    };
    let resolved = variant.resolve(None);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{resolved.class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}
