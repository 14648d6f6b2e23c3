use std::time::Duration;

use leptos::prelude::*;

use crate::stats::{DISCORD_INVITE, DiscordStats, STAT_REFRESH_SECS};
use crate::dom;
use crate::ui::animations::stagger_style;
use crate::ui::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, CardHover, CardVariant, Motion,
};

struct Testimonial {
    player_name: &'static str,
    character_name: &'static str,
    quote: &'static str,
    rating: u8,
    avatar: &'static str,
    verified: bool,
    date: &'static str,
}

static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        player_name: "Alex_Rodriguez",
        character_name: "Detective Martinez",
        quote: "RNM Server has the most immersive roleplay I've ever experienced. The custom \
                jobs and realistic economy make every interaction meaningful.",
        rating: 5,
        avatar: "👮",
        verified: true,
        date: "Dec 15, 2024",
    },
    Testimonial {
        player_name: "Sarah_Johnson",
        character_name: "Dr. Emily Chen",
        quote: "The medical roleplay here is incredibly detailed. The staff support is amazing \
                and the community is so welcoming to new players.",
        rating: 5,
        avatar: "⚕",
        verified: true,
        date: "Dec 10, 2024",
    },
    Testimonial {
        player_name: "Mike_Wilson",
        character_name: "Tony \"The Wrench\" Moretti",
        quote: "Best mechanic job system I've seen in any GTA RP server. The custom vehicles \
                and realistic repair mechanics are top-notch!",
        rating: 5,
        avatar: "🔧",
        verified: true,
        date: "Dec 8, 2024",
    },
    Testimonial {
        player_name: "Jessica_Park",
        character_name: "Luna Nightshade",
        quote: "The events and community activities keep the server fresh and exciting. \
                There's always something happening!",
        rating: 5,
        avatar: "🎭",
        verified: true,
        date: "Dec 5, 2024",
    },
];

struct CommunityEvent {
    title: &'static str,
    date: &'static str,
    kind: &'static str,
    participants: u32,
    capacity: u32,
}

impl CommunityEvent {
    fn fill_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.participants) / f64::from(self.capacity) * 100.0).round() as u32
    }
}

static UPCOMING_EVENTS: [CommunityEvent; 3] = [
    CommunityEvent {
        title: "Grand Prix Racing Championship",
        date: "Monday, December 30",
        kind: "racing",
        participants: 47,
        capacity: 64,
    },
    CommunityEvent {
        title: "New Year's Eve Fireworks & Party",
        date: "Tuesday, December 31",
        kind: "community",
        participants: 156,
        capacity: 200,
    },
    CommunityEvent {
        title: "Police vs Criminals Heist Event",
        date: "Sunday, January 5",
        kind: "roleplay",
        participants: 89,
        capacity: 128,
    },
];

#[component]
pub fn Community() -> impl IntoView {
    let (discord, set_discord) = signal(DiscordStats::seed());

    if let Ok(handle) = set_interval_with_handle(
        move || {
            let mut rng = js_sys::Math::random;
            set_discord.update(|s| s.resample(&mut rng));
        },
        Duration::from_secs(STAT_REFRESH_SECS),
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section id="community" class="community">
            <div class="container">
                <div class="section-header">
                    <Badge variant=BadgeVariant::Outline size=BadgeSize::Lg class="section-eyebrow">
                        "Our Community"
                    </Badge>
                    <h2 class=Motion::FadeInUp.with("section-title")>
                        <span class="title-accent">"Join Thousands"</span>
                        <span class="title-main">"OF PLAYERS"</span>
                    </h2>
                    <p class="section-description">
                        "Be part of a thriving community where friendships are formed, stories \
                         are shared, and epic adventures unfold every day."
                    </p>
                </div>

                <div class="community-grid">
                    <div class="community-side">
                        <DiscordWidget stats=discord />
                        <CommunityStatsCard />
                    </div>
                    <div class="testimonials-grid">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(index, testimonial)| {
                                view! { <TestimonialCard testimonial=testimonial index=index /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="events">
                    <div class="category-header">
                        <h3 class="category-title">"Upcoming Events"</h3>
                        <div class="category-rule" aria-hidden="true"></div>
                    </div>
                    <div class="events-grid">
                        {UPCOMING_EVENTS
                            .iter()
                            .enumerate()
                            .map(|(index, event)| view! { <EventCard event=event index=index /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="community-cta">
                    <h3 class="cta-title">"Ready to Make Friends?"</h3>
                    <p class="cta-text">
                        "Join our Discord community and connect with players from around the \
                         world. Share stories, find crews, and stay updated on the latest \
                         server news."
                    </p>
                    <div class="cta-actions">
                        <Button
                            variant=ButtonVariant::Gaming
                            size=ButtonSize::Lg
                            href=DISCORD_INVITE
                            external=true
                            glow=true
                        >
                            "Join Discord"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Lg
                            on_press=Callback::new(move |_| dom::scroll_to_anchor("#features"))
                        >
                            "Learn More"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, index: usize) -> impl IntoView {
    let stars = "★".repeat(usize::from(testimonial.rating));

    view! {
        <div class=Motion::FadeInUp.with("testimonial-slot") style=stagger_style(index)>
            <Card variant=CardVariant::Testimonial hover=CardHover::Lift class="testimonial-card">
                <CardHeader>
                    <div class="testimonial-heading">
                        <span class="testimonial-avatar" aria-hidden="true">
                            {testimonial.avatar}
                        </span>
                        <div class="testimonial-names">
                            <div class="testimonial-player">
                                {testimonial.player_name}
                                {testimonial.verified.then(|| view! {
                                    <Badge variant=BadgeVariant::Success size=BadgeSize::Sm>
                                        "Verified"
                                    </Badge>
                                })}
                            </div>
                            <div class="testimonial-character">{testimonial.character_name}</div>
                        </div>
                        <span class="testimonial-stars" aria-label=format!("{} stars", testimonial.rating)>
                            {stars}
                        </span>
                    </div>
                </CardHeader>
                <CardContent>
                    <p class="testimonial-quote">{testimonial.quote}</p>
                    <div class="testimonial-date">{testimonial.date}</div>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn DiscordWidget(stats: ReadSignal<DiscordStats>) -> impl IntoView {
    view! {
        <Card variant=CardVariant::Glass class="discord-widget">
            <CardHeader class="discord-header">
                <div class="discord-brand">
                    <span class="discord-glyph" aria-hidden="true">"✉"</span>
                    <div>
                        <h3 class="discord-title">"Discord Community"</h3>
                        <p class="discord-subtitle">"Join the conversation"</p>
                    </div>
                </div>
                <Badge variant=BadgeVariant::Online>"Live"</Badge>
            </CardHeader>
            <CardContent>
                <div class="discord-counters">
                    <div class="discord-counter">
                        <div class="discord-counter-value accent-purple">
                            {move || stats.with(|s| group_thousands(s.member_count))}
                        </div>
                        <div class="discord-counter-label">"Members"</div>
                    </div>
                    <div class="discord-counter">
                        <div class="discord-counter-value accent-green">
                            {move || stats.with(|s| group_thousands(s.online_count))}
                        </div>
                        <div class="discord-counter-label">"Online"</div>
                    </div>
                </div>
                <div class="discord-activity">
                    <div class="discord-activity-title">"Recent Activity"</div>
                    {move || {
                        stats
                            .with(|s| s.recent_messages)
                            .iter()
                            .map(|message| {
                                view! {
                                    <div class="discord-message">
                                        <div class="discord-message-author">
                                            {message.author}
                                            <span class="discord-message-time">{message.timestamp}</span>
                                        </div>
                                        <div class="discord-message-content">{message.content}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Button
                    variant=ButtonVariant::Gaming
                    href=DISCORD_INVITE
                    external=true
                    class="wide"
                >
                    "Join Discord"
                </Button>
            </CardContent>
        </Card>
    }
}

#[component]
fn CommunityStatsCard() -> impl IntoView {
    const PANELS: [(&str, &str); 4] = [
        ("24/7", "Active Support"),
        ("99.8%", "Server Uptime"),
        ("50+", "Unique Jobs"),
        ("500+", "Daily Players"),
    ];

    view! {
        <Card variant=CardVariant::Stats class="community-stats">
            <CardContent>
                <h3 class="community-stats-title">"Community Stats"</h3>
                <div class="community-stats-grid">
                    {PANELS
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <div class="community-stat">
                                    <div class="community-stat-value">{value}</div>
                                    <div class="community-stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn EventCard(event: &'static CommunityEvent, index: usize) -> impl IntoView {
    view! {
        <div class=Motion::FadeInUp.with("event-slot") style=stagger_style(index)>
            <Card variant=CardVariant::Feature hover=CardHover::Scale class="event-card">
                <CardContent>
                    <div class="event-heading">
                        <span class="event-glyph" aria-hidden="true">"▣"</span>
                        <Badge variant=BadgeVariant::Outline size=BadgeSize::Sm>
                            {event.kind}
                        </Badge>
                    </div>
                    <h4 class="event-title">{event.title}</h4>
                    <p class="event-date">{event.date}</p>
                    <div class="event-footer">
                        <span class="event-attendance">
                            {format!("{}/{}", event.participants, event.capacity)}
                        </span>
                        <Badge variant=BadgeVariant::Success size=BadgeSize::Sm>
                            {format!("{}% Full", event.fill_percent())}
                        </Badge>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

/// `5247` -> `"5,247"`, matching the locale formatting of the counters.
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fill_percent_rounds_to_whole_numbers() {
        assert_eq!(UPCOMING_EVENTS[0].fill_percent(), 73); // 47/64
        assert_eq!(UPCOMING_EVENTS[1].fill_percent(), 78); // 156/200
        assert_eq!(UPCOMING_EVENTS[2].fill_percent(), 70); // 89/128
    }

    #[test]
    fn fill_percent_handles_empty_capacity() {
        let event = CommunityEvent {
            title: "t",
            date: "d",
            kind: "k",
            participants: 10,
            capacity: 0,
        };
        assert_eq!(event.fill_percent(), 0);
    }

    #[test]
    fn events_never_overbook() {
        for event in &UPCOMING_EVENTS {
            assert!(event.participants <= event.capacity, "{}", event.title);
        }
    }

    #[test]
    fn testimonials_are_verified_five_star_fixtures() {
        for testimonial in &TESTIMONIALS {
            assert!(testimonial.verified);
            assert!((1..=5).contains(&testimonial.rating));
        }
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(892), "892");
        assert_eq!(group_thousands(5247), "5,247");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
