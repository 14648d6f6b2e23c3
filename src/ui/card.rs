use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Feature,
    Testimonial,
    Stats,
    Glass,
}

impl CardVariant {
    pub const ALL: [CardVariant; 5] = [
        CardVariant::Default,
        CardVariant::Feature,
        CardVariant::Testimonial,
        CardVariant::Stats,
        CardVariant::Glass,
    ];

    fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "card-default",
            CardVariant::Feature => "card-feature",
            CardVariant::Testimonial => "card-testimonial",
            CardVariant::Stats => "card-stats",
            CardVariant::Glass => "card-glass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl CardSize {
    pub const ALL: [CardSize; 4] = [CardSize::Sm, CardSize::Md, CardSize::Lg, CardSize::Xl];

    fn class(self) -> &'static str {
        match self {
            CardSize::Sm => "card-sm",
            CardSize::Md => "card-md",
            CardSize::Lg => "card-lg",
            CardSize::Xl => "card-xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHover {
    #[default]
    None,
    Lift,
    Glow,
    Scale,
}

impl CardHover {
    pub const ALL: [CardHover; 4] =
        [CardHover::None, CardHover::Lift, CardHover::Glow, CardHover::Scale];

    fn class(self) -> Option<&'static str> {
        match self {
            CardHover::None => None,
            CardHover::Lift => Some("hover-lift"),
            CardHover::Glow => Some("hover-glow"),
            CardHover::Scale => Some("hover-scale"),
        }
    }
}

fn card_class(
    variant: CardVariant,
    size: CardSize,
    hover: CardHover,
    extra: Option<&'static str>,
) -> String {
    let mut class = format!("card {} {}", variant.class(), size.class());
    if let Some(hover) = hover.class() {
        class.push(' ');
        class.push_str(hover);
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] size: CardSize,
    #[prop(optional)] hover: CardHover,
    #[prop(optional, into)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article class=card_class(variant, size, hover, class)>
            {children()}
        </article>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: Option<&'static str>, children: Children) -> impl IntoView {
    let class = class.map_or_else(|| "card-header".to_owned(), |c| format!("card-header {c}"));
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: Option<&'static str>, children: Children) -> impl IntoView {
    let class = class.map_or_else(|| "card-title".to_owned(), |c| format!("card-title {c}"));
    view! { <h3 class=class>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    #[prop(optional, into)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = class.map_or_else(|| "card-description".to_owned(), |c| format!("card-description {c}"));
    view! { <p class=class>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: Option<&'static str>, children: Children) -> impl IntoView {
    let class = class.map_or_else(|| "card-content".to_owned(), |c| format!("card-content {c}"));
    view! { <div class=class>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_composition() {
        assert_eq!(
            card_class(CardVariant::Glass, CardSize::Sm, CardHover::Lift, None),
            "card card-glass card-sm hover-lift"
        );
        assert_eq!(
            card_class(CardVariant::Default, CardSize::Md, CardHover::None, Some("x")),
            "card card-default card-md x"
        );
    }

    #[test]
    fn hover_none_adds_nothing() {
        assert_eq!(CardHover::None.class(), None);
        assert_eq!(CardHover::Scale.class(), Some("hover-scale"));
    }

    #[test]
    fn variant_and_size_classes_are_distinct() {
        use std::collections::HashSet;
        let variants: HashSet<_> = CardVariant::ALL.iter().map(|v| v.class()).collect();
        assert_eq!(variants.len(), CardVariant::ALL.len());
        let sizes: HashSet<_> = CardSize::ALL.iter().map(|s| s.class()).collect();
        assert_eq!(sizes.len(), CardSize::ALL.len());
        let hovers: HashSet<_> = CardHover::ALL.iter().map(|h| h.class()).collect();
        assert_eq!(hovers.len(), CardHover::ALL.len());
    }
}
