use std::time::Duration;

use leptos::prelude::*;

use crate::dom;
use crate::stats::{DISCORD_INVITE, STAT_REFRESH_SECS, ServerStats};
use crate::ui::animations::stagger_style;
use crate::ui::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardSize, CardVariant,
    Motion,
};

const HIGHLIGHTS: [&str; 6] = [
    "Custom Jobs & Economy",
    "Active Community",
    "Professional Staff",
    "Regular Events",
    "Fair Rules",
    "24/7 Support",
];

#[component]
pub fn Hero() -> impl IntoView {
    let (stats, set_stats) = signal(ServerStats::seed());

    if let Ok(handle) = set_interval_with_handle(
        move || {
            let mut rng = js_sys::Math::random;
            set_stats.update(|s| s.resample_hero(&mut rng));
        },
        Duration::from_secs(STAT_REFRESH_SECS),
    ) {
        on_cleanup(move || handle.clear());
    }

    let join_server = move |_| {
        dom::open_external(DISCORD_INVITE);
    };
    // Scrolls to the gallery when it exists; today it does not, and the
    // button is deliberately a quiet no-op in that case.
    let watch_trailer = move |_| {
        dom::scroll_to_anchor("#gallery");
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-orb hero-orb-right"></div>
                <div class="hero-orb hero-orb-left"></div>
            </div>

            <div class="container hero-content">
                <div class=Motion::Floating.with("hero-logo")>
                    <span class="hero-logo-mark" aria-hidden="true">"RNM"</span>
                </div>

                <h1 class=Motion::FadeInUp.with("hero-title")>
                    <span class="hero-title-accent">"Enter the Ultimate"</span>
                    <span class="hero-title-main">"GTA 5 ROLEPLAY"</span>
                    <span class="hero-title-accent">"Experience"</span>
                </h1>

                <p class=Motion::FadeInUp.with("hero-subtitle")>
                    "Join "
                    <span class="hero-subtitle-brand">"RNM Server"</span>
                    " - Where every story matters, every character counts, \
                     and every moment is unforgettable."
                </p>

                <div class=Motion::FadeInUp.with("hero-status")>
                    {move || {
                        let online = stats.with(|s| s.online);
                        view! {
                            <Badge
                                variant=if online { BadgeVariant::Online } else { BadgeVariant::Offline }
                                size=BadgeSize::Lg
                            >
                                <span class="status-dot" aria-hidden="true"></span>
                                {if online { "Server Online" } else { "Server Offline" }}
                            </Badge>
                        }
                    }}
                </div>

                <div class=Motion::FadeInUp.with("hero-actions")>
                    <Button
                        variant=ButtonVariant::Gaming
                        size=ButtonSize::Xl
                        glow=true
                        on_press=Callback::new(join_server)
                    >
                        "Join Our Discord"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Xl
                        on_press=Callback::new(watch_trailer)
                    >
                        "Watch Trailer"
                    </Button>
                </div>

                <HeroStats stats=stats />

                <div class=Motion::FadeInUp.with("hero-highlights")>
                    {HIGHLIGHTS
                        .iter()
                        .map(|&highlight| {
                            view! {
                                <Badge variant=BadgeVariant::Outline class="highlight-badge">
                                    {highlight}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span class="scroll-indicator-label">"Scroll to explore"</span>
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-thumb"></div>
                </div>
            </div>
        </section>
    }
}

/// The three live-looking stat cards under the call-to-action row.
#[component]
fn HeroStats(stats: ReadSignal<ServerStats>) -> impl IntoView {
    let items = [
        (
            "Players Online",
            "stat-success",
            Signal::derive(move || {
                stats.with(|s| format!("{}/{}", s.player_count, s.max_players))
            }),
        ),
        (
            "Uptime",
            "stat-info",
            Signal::derive(move || stats.with(|s| s.uptime.to_owned())),
        ),
        (
            "Ping",
            "stat-warning",
            Signal::derive(move || stats.with(|s| format!("{}ms", s.ping_ms))),
        ),
    ];

    view! {
        <div class="hero-stats">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, (label, tone, value))| {
                    view! {
                        <div class=Motion::FadeInUp.with("hero-stat") style=stagger_style(index)>
                            <Card variant=CardVariant::Glass size=CardSize::Sm class="hero-stat-card">
                                <span class="hero-stat-label">{label}</span>
                                <span class=format!("hero-stat-value {tone}")>{value}</span>
                            </Card>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
