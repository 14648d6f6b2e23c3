use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
    Info,
    Online,
    Offline,
    Gaming,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 11] = [
        BadgeVariant::Default,
        BadgeVariant::Primary,
        BadgeVariant::Secondary,
        BadgeVariant::Destructive,
        BadgeVariant::Outline,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Info,
        BadgeVariant::Online,
        BadgeVariant::Offline,
        BadgeVariant::Gaming,
    ];

    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Destructive => "badge-destructive",
            BadgeVariant::Outline => "badge-outline",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Info => "badge-info",
            BadgeVariant::Online => "badge-online",
            BadgeVariant::Offline => "badge-offline",
            BadgeVariant::Gaming => "badge-gaming",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    fn class(self) -> &'static str {
        match self {
            BadgeSize::Sm => "badge-sm",
            BadgeSize::Md => "badge-md",
            BadgeSize::Lg => "badge-lg",
        }
    }
}

fn badge_class(
    variant: BadgeVariant,
    size: BadgeSize,
    pulse: bool,
    extra: Option<&'static str>,
) -> String {
    let mut class = format!("badge {} {}", variant.class(), size.class());
    if pulse {
        class.push_str(" badge-pulse");
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Status pill with an optional leading glyph.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional, into)] icon: Option<&'static str>,
    #[prop(optional)] pulse: bool,
    #[prop(optional, into)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, size, pulse, class)>
            {icon.map(|glyph| view! { <span class="badge-icon" aria-hidden="true">{glyph}</span> })}
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn variant_classes_are_distinct() {
        let classes: HashSet<_> = BadgeVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(classes.len(), BadgeVariant::ALL.len());
    }

    #[test]
    fn class_composition() {
        assert_eq!(
            badge_class(BadgeVariant::Online, BadgeSize::Sm, true, None),
            "badge badge-online badge-sm badge-pulse"
        );
        assert_eq!(
            badge_class(BadgeVariant::Default, BadgeSize::Md, false, Some("wide")),
            "badge badge-default badge-md wide"
        );
    }
}
