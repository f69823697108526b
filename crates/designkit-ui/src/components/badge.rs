//! Badge Component
//!
//! Small status label. Used for permission levels, groups and categories.

use dioxus::prelude::*;

use crate::variant::{StyleAttrs, Variant, VariantTable};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

static BADGE_VARIANTS: VariantTable<BadgeVariant> = VariantTable::new(
    "badge",
    &[
        ("neutral", BadgeVariant::Neutral, StyleAttrs::class("badge-neutral")),
        ("info", BadgeVariant::Info, StyleAttrs::class("badge-info")),
        ("success", BadgeVariant::Success, StyleAttrs::class("badge-success")),
        ("warning", BadgeVariant::Warning, StyleAttrs::class("badge-warning")),
        ("danger", BadgeVariant::Danger, StyleAttrs::class("badge-danger")),
    ],
);

impl Variant for BadgeVariant {
    fn table() -> &'static VariantTable<Self> {
        &BADGE_VARIANTS
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let resolved = variant.resolve(class.as_deref());

    rsx! {
        span { class: "{resolved.class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(BadgeVariant::default().resolve(None).class, "badge badge-neutral");
        assert_eq!(BadgeVariant::Warning.resolve(None).class, "badge badge-warning");
    }
}
