use leptos::prelude::*;

/// Closed set of button styles used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Gaming,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
        ButtonVariant::Gaming,
    ];

    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Gaming => "btn-gaming",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 5] = [
        ButtonSize::Sm,
        ButtonSize::Md,
        ButtonSize::Lg,
        ButtonSize::Xl,
        ButtonSize::Icon,
    ];

    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    glow: bool,
    extra: Option<&'static str>,
) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if glow {
        class.push_str(" btn-glow");
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Interactive button, or an anchor when `href` is given. `external` anchors
/// open a new browsing context. While `loading` is true the button is
/// disabled and shows a spinner glyph in place of any action.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] href: Option<&'static str>,
    #[prop(optional)] external: bool,
    #[prop(optional)] glow: bool,
    #[prop(optional, into)] loading: Option<Signal<bool>>,
    #[prop(optional, into)] class: Option<&'static str>,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, glow, class);
    let is_loading = move || loading.map(|sig| sig.get()).unwrap_or(false);

    match href {
        Some(url) => view! {
            <a
                class=class
                href=url
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                class=class
                disabled=is_loading
                on:click=move |_| {
                    if !is_loading() {
                        if let Some(cb) = on_press {
                            cb.run(());
                        }
                    }
                }
            >
                <Show when=is_loading>
                    <span class="btn-spinner" aria-hidden="true"></span>
                </Show>
                {children()}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn variant_classes_are_distinct() {
        let classes: HashSet<_> = ButtonVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(classes.len(), ButtonVariant::ALL.len());
    }

    #[test]
    fn size_classes_are_distinct() {
        let classes: HashSet<_> = ButtonSize::ALL.iter().map(|s| s.class()).collect();
        assert_eq!(classes.len(), ButtonSize::ALL.len());
    }

    #[test]
    fn class_composition() {
        assert_eq!(
            button_class(ButtonVariant::Gaming, ButtonSize::Xl, true, None),
            "btn btn-gaming btn-xl btn-glow"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Md, false, Some("wide")),
            "btn btn-primary btn-md wide"
        );
    }

    #[test]
    fn defaults_are_primary_medium() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }
}
