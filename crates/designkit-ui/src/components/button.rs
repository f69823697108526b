//! Button Components
//!
//! Button styles come from the shared variant table:
//! - Primary: main call to action
//! - Secondary: outlined, neutral
//! - Ghost: text-only, for toolbars
//! - Danger: destructive actions
//! - Link: renders like an inline link

use dioxus::prelude::*;

use crate::variant::{StyleAttrs, Variant, VariantTable};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
    Link,
}

static BUTTON_VARIANTS: VariantTable<ButtonVariant> = VariantTable::new(
    "btn",
    &[
        ("primary", ButtonVariant::Primary, StyleAttrs::class("btn-primary")),
        ("secondary", ButtonVariant::Secondary, StyleAttrs::class("btn-secondary")),
        ("ghost", ButtonVariant::Ghost, StyleAttrs::class("btn-ghost")),
        ("danger", ButtonVariant::Danger, StyleAttrs::class("btn-danger")),
        (
            "link",
            ButtonVariant::Link,
            StyleAttrs::with_style("btn-link", "padding: 0; border: none;"),
        ),
    ],
);

impl Variant for ButtonVariant {
    fn table() -> &'static VariantTable<Self> {
        &BUTTON_VARIANTS
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         onclick: move |_| clear_history(),
///         "Clear history"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let resolved = props.variant.resolve(props.class.as_deref());

    rsx! {
        button {
            class: "{resolved.class}",
            style: "{resolved.style}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
