use leptos::prelude::*;

use crate::stats::DISCORD_INVITE;
use crate::ui::animations::stagger_style;
use crate::ui::{
    Badge, BadgeSize, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardHover,
    CardTitle, CardVariant, Motion,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Roleplay,
    Community,
    Technical,
}

impl Category {
    const ALL: [Category; 3] = [Category::Roleplay, Category::Community, Category::Technical];

    fn label(self) -> &'static str {
        match self {
            Category::Roleplay => "Roleplay Systems",
            Category::Community => "Community Features",
            Category::Technical => "Technical Excellence",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Category::Roleplay => "category-roleplay",
            Category::Community => "category-community",
            Category::Technical => "category-technical",
        }
    }
}

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    category: Category,
    benefits: &'static [&'static str],
    highlight: bool,
}

static FEATURES: [Feature; 9] = [
    Feature {
        title: "Custom Jobs & Careers",
        description: "Dive into realistic roleplay with our extensive job system featuring \
                      unique mechanics and progression.",
        icon: "⚒",
        category: Category::Roleplay,
        benefits: &["50+ Unique Jobs", "Skill Progression", "Realistic Mechanics", "Custom Missions"],
        highlight: true,
    },
    Feature {
        title: "Dynamic Economy",
        description: "Experience a living economy with player-driven markets, businesses, and \
                      financial systems.",
        icon: "$",
        category: Category::Roleplay,
        benefits: &["Player Businesses", "Stock Market", "Banking System", "Investments"],
        highlight: false,
    },
    Feature {
        title: "Property Ownership",
        description: "Own and customize your dream home, business, or warehouse with our \
                      advanced property system.",
        icon: "⌂",
        category: Category::Roleplay,
        benefits: &["Custom Interiors", "Security Systems", "Rental Income", "Property Trading"],
        highlight: false,
    },
    Feature {
        title: "Regular Events",
        description: "Join exciting server-wide events, competitions, and community gatherings \
                      every week.",
        icon: "▣",
        category: Category::Community,
        benefits: &["Weekly Races", "RP Events", "Competitions", "Community Meetings"],
        highlight: true,
    },
    Feature {
        title: "Professional Staff",
        description: "Our experienced and fair staff team ensures a quality roleplay \
                      environment for everyone.",
        icon: "⛨",
        category: Category::Community,
        benefits: &["24/7 Support", "Fair Moderation", "Quick Response", "Experienced Team"],
        highlight: false,
    },
    Feature {
        title: "Active Community",
        description: "Join thousands of active players in our welcoming and diverse gaming \
                      community.",
        icon: "⚇",
        category: Category::Community,
        benefits: &["5000+ Members", "Global Players", "Friendly Environment", "Discord Community"],
        highlight: false,
    },
    Feature {
        title: "Optimized Performance",
        description: "Enjoy lag-free gameplay with our high-performance servers and optimized \
                      scripts.",
        icon: "⚡",
        category: Category::Technical,
        benefits: &["99.9% Uptime", "Low Latency", "Optimized Scripts", "Regular Updates"],
        highlight: true,
    },
    Feature {
        title: "Custom Modifications",
        description: "Experience unique gameplay with our custom scripts, vehicles, and game \
                      mechanics.",
        icon: "⚙",
        category: Category::Technical,
        benefits: &["Custom Vehicles", "Unique Scripts", "Enhanced Graphics", "Quality Mods"],
        highlight: false,
    },
    Feature {
        title: "Anti-Cheat Protection",
        description: "Play fair with our advanced anti-cheat system protecting the integrity \
                      of roleplay.",
        icon: "♜",
        category: Category::Technical,
        benefits: &["Advanced Detection", "Fair Play", "Instant Bans", "Regular Monitoring"],
        highlight: false,
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <Badge variant=BadgeVariant::Outline size=BadgeSize::Lg class="section-eyebrow">
                        "Server Features"
                    </Badge>
                    <h2 class=Motion::FadeInUp.with("section-title")>
                        <span class="title-accent">"Why Choose"</span>
                        <span class="title-main">"RNM SERVER?"</span>
                    </h2>
                    <p class="section-description">
                        "Experience the most advanced and immersive GTA 5 roleplay server with \
                         cutting-edge features, an active community, and professional management."
                    </p>
                </div>

                <div class="feature-categories">
                    {Category::ALL
                        .iter()
                        .map(|&category| {
                            view! {
                                <div class="feature-category">
                                    <div class="category-header">
                                        <h3 class="category-title">{category.label()}</h3>
                                        <div class="category-rule" aria-hidden="true"></div>
                                    </div>
                                    <div class="features-grid">
                                        {FEATURES
                                            .iter()
                                            .filter(|f| f.category == category)
                                            .enumerate()
                                            .map(|(index, feature)| {
                                                view! { <FeatureCard feature=feature index=index /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="features-cta">
                    <h3 class="cta-title">"Ready to Start Your Story?"</h3>
                    <p class="cta-text">
                        "Join thousands of players in the most immersive GTA 5 roleplay \
                         experience. Your adventure awaits!"
                    </p>
                    <a
                        href=DISCORD_INVITE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-link"
                    >
                        "Join Our Community"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, index: usize) -> impl IntoView {
    view! {
        <div class=Motion::FadeInUp.with("feature-slot") style=stagger_style(index)>
            <Card
                variant=CardVariant::Feature
                hover=CardHover::Scale
                class=if feature.highlight { "feature-card is-highlighted" } else { "feature-card" }
            >
                {feature.highlight.then(|| view! {
                    <div class="feature-flag">
                        <Badge variant=BadgeVariant::Primary size=BadgeSize::Sm>"Popular"</Badge>
                    </div>
                })}
                <CardHeader>
                    <div class="feature-heading">
                        <span
                            class=format!("feature-icon {}", feature.category.class())
                            aria-hidden="true"
                        >
                            {feature.icon}
                        </span>
                        <Badge
                            variant=BadgeVariant::Outline
                            size=BadgeSize::Sm
                            class=feature.category.class()
                        >
                            {feature.category.label()}
                        </Badge>
                    </div>
                    <CardTitle>{feature.title}</CardTitle>
                    <CardDescription>{feature.description}</CardDescription>
                </CardHeader>
                <CardContent>
                    <ul class="feature-benefits">
                        {feature
                            .benefits
                            .iter()
                            .map(|&benefit| {
                                view! {
                                    <li class="feature-benefit">
                                        <span class="benefit-dot" aria-hidden="true"></span>
                                        {benefit}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </CardContent>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_category_has_three_features() {
        for category in Category::ALL {
            let count = FEATURES.iter().filter(|f| f.category == category).count();
            assert_eq!(count, 3, "{} is unbalanced", category.label());
        }
    }

    #[test]
    fn one_highlight_per_category() {
        for category in Category::ALL {
            let highlighted = FEATURES
                .iter()
                .filter(|f| f.category == category && f.highlight)
                .count();
            assert_eq!(highlighted, 1, "{}", category.label());
        }
    }

    #[test]
    fn every_feature_lists_benefits() {
        for feature in &FEATURES {
            assert_eq!(feature.benefits.len(), 4, "{}", feature.title);
        }
    }
}
