use leptos::prelude::*;

use crate::stats::SERVER_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerVariant {
    #[default]
    Default,
    Gaming,
    Server,
}

impl SpinnerVariant {
    pub const ALL: [SpinnerVariant; 3] =
        [SpinnerVariant::Default, SpinnerVariant::Gaming, SpinnerVariant::Server];

    fn class(self) -> &'static str {
        match self {
            SpinnerVariant::Default => "spinner-default",
            SpinnerVariant::Gaming => "spinner-gaming",
            SpinnerVariant::Server => "spinner-server",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SpinnerSize {
    pub const ALL: [SpinnerSize; 4] =
        [SpinnerSize::Sm, SpinnerSize::Md, SpinnerSize::Lg, SpinnerSize::Xl];

    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Sm => "spinner-sm",
            SpinnerSize::Md => "spinner-md",
            SpinnerSize::Lg => "spinner-lg",
            SpinnerSize::Xl => "spinner-xl",
        }
    }
}

/// Loading indicator. In `full_screen` mode it covers the page and is used
/// as the suspense fallback while section content is being fetched.
#[component]
pub fn LoadingSpinner(
    #[prop(optional)] variant: SpinnerVariant,
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] text: Option<&'static str>,
    #[prop(optional)] full_screen: bool,
) -> impl IntoView {
    let spinner = view! {
        <div class="spinner-stack">
            <div class=format!("spinner {} {}", variant.class(), size.class()) aria-hidden="true"></div>
            {text.map(|t| view! { <p class="spinner-text">{t}</p> })}
        </div>
    };

    if full_screen {
        view! {
            <div class="spinner-overlay">
                <div class="spinner-overlay-inner">
                    {spinner}
                    <div class="spinner-dots" aria-hidden="true">
                        <span class="spinner-dot"></span>
                        <span class="spinner-dot"></span>
                        <span class="spinner-dot"></span>
                    </div>
                    <div class="spinner-caption">
                        {format!("Connecting to {SERVER_NAME}...")}
                    </div>
                </div>
            </div>
        }
        .into_any()
    } else {
        spinner.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn variant_and_size_classes_are_distinct() {
        let variants: HashSet<_> = SpinnerVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(variants.len(), SpinnerVariant::ALL.len());
        let sizes: HashSet<_> = SpinnerSize::ALL.iter().map(|s| s.class()).collect();
        assert_eq!(sizes.len(), SpinnerSize::ALL.len());
    }
}
