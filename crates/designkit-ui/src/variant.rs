//! Style-variant adapter.
//!
//! Every styled control maps a small variant enum to style attributes
//! through one [`VariantTable`], instead of hand-writing a wrapper per
//! control. A table row is `(name, variant, attrs)`; the name is what
//! callers use when picking a variant from strings (configuration, CLI).

/// Style attributes applied for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAttrs {
    pub class: &'static str,
    pub style: Option<&'static str>,
}

impl StyleAttrs {
    pub const fn class(class: &'static str) -> Self {
        Self { class, style: None }
    }

    pub const fn with_style(class: &'static str, style: &'static str) -> Self {
        Self {
            class,
            style: Some(style),
        }
    }
}

/// Final attributes for an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    pub class: String,
    pub style: String,
}

/// Variant name → style attributes for one control.
#[derive(Debug)]
pub struct VariantTable<V: 'static> {
    base: &'static str,
    rows: &'static [(&'static str, V, StyleAttrs)],
}

impl<V: Copy + PartialEq + 'static> VariantTable<V> {
    pub const fn new(base: &'static str, rows: &'static [(&'static str, V, StyleAttrs)]) -> Self {
        Self { base, rows }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn attrs(&self, variant: V) -> Option<StyleAttrs> {
        self.rows
            .iter()
            .find(|(_, v, _)| *v == variant)
            .map(|(_, _, attrs)| *attrs)
    }

    pub fn name(&self, variant: V) -> Option<&'static str> {
        self.rows
            .iter()
            .find(|(_, v, _)| *v == variant)
            .map(|(name, _, _)| *name)
    }

    /// Case-insensitive lookup by variant name.
    pub fn by_name(&self, name: &str) -> Option<V> {
        self.rows
            .iter()
            .find(|(n, _, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(_, v, _)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|(name, _, _)| *name)
    }

    /// Base class, variant class, then any extra classes.
    pub fn resolve(&self, variant: V, extra_class: Option<&str>) -> ResolvedStyle {
        let mut classes = vec![self.base];
        let mut style = String::new();
        if let Some(attrs) = self.attrs(variant) {
            if !attrs.class.is_empty() {
                classes.push(attrs.class);
            }
            if let Some(s) = attrs.style {
                style.push_str(s);
            }
        }
        let mut class = classes.join(" ");
        if let Some(extra) = extra_class.map(str::trim).filter(|e| !e.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }
        ResolvedStyle { class, style }
    }
}

/// A variant enum backed by a static table.
pub trait Variant: Copy + PartialEq + 'static {
    fn table() -> &'static VariantTable<Self>;

    fn resolve(self, extra_class: Option<&str>) -> ResolvedStyle {
        Self::table().resolve(self, extra_class)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::table().by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tone {
        Calm,
        Loud,
        Bare,
    }

    static TONES: VariantTable<Tone> = VariantTable::new(
        "tone",
        &[
            ("calm", Tone::Calm, StyleAttrs::class("tone-calm")),
            ("loud", Tone::Loud, StyleAttrs::with_style("tone-loud", "font-weight: 700;")),
        ],
    );

    impl Variant for Tone {
        fn table() -> &'static VariantTable<Self> {
            &TONES
        }
    }

    #[test]
    fn resolve_joins_base_variant_and_extra() {
        let resolved = Tone::Calm.resolve(Some("  wide "));
        assert_eq!(resolved.class, "tone tone-calm wide");
        assert_eq!(resolved.style, "");
    }

    #[test]
    fn resolve_carries_inline_style() {
        let resolved = Tone::Loud.resolve(None);
        assert_eq!(resolved.class, "tone tone-loud");
        assert_eq!(resolved.style, "font-weight: 700;");
    }

    #[test]
    fn unknown_variant_falls_back_to_base() {
        assert_eq!(Tone::Bare.resolve(Some("")).class, "tone");
        assert_eq!(TONES.name(Tone::Bare), None);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Tone::from_name("LOUD"), Some(Tone::Loud));
        assert_eq!(Tone::from_name("quiet"), None);
        assert_eq!(TONES.names().collect::<Vec<_>>(), vec!["calm", "loud"]);
    }
}
