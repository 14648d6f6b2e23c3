use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use crate::dom;
use crate::stats::{DISCORD_INVITE, STAT_REFRESH_SECS, ServerStats};
use crate::ui::animations::stagger_style;
use crate::ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

/// Scroll offset after which the bar switches to its solid style.
const SCROLL_THRESHOLD_PX: f64 = 50.0;

const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("Features", "#features"),
    ("Community", "#community"),
    ("Gallery", "#gallery"),
    ("Rules", "#rules"),
    ("Contact", "#contact"),
];

/// Fixed page chrome: brand, nav links, mocked live badges, mobile drawer.
///
/// Owns three scoped resources released on teardown: the window scroll
/// listener, the stat refresh interval, and the body scroll lock.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);
    let (stats, set_stats) = signal(ServerStats::seed());

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(dom::scroll_offset_y() > SCROLL_THRESHOLD_PX);
    });
    on_cleanup(move || scroll_handle.remove());

    if let Ok(handle) = set_interval_with_handle(
        move || {
            let mut rng = js_sys::Math::random;
            set_stats.update(|s| s.resample_header(&mut rng));
        },
        Duration::from_secs(STAT_REFRESH_SECS),
    ) {
        on_cleanup(move || handle.clear());
    }

    // The menu owns the body scroll lock for exactly as long as it is open.
    Effect::new(move |_| {
        if let Err(err) = dom::set_body_scroll_locked(menu_open.get()) {
            web_sys::console::warn_1(&err.to_string().into());
        }
    });
    on_cleanup(move || {
        let _ = dom::set_body_scroll_locked(false);
    });

    // Closing on navigation keeps the drawer and the lock in step; a missing
    // anchor target still closes the menu and scrolls nowhere.
    let navigate = move |href: &'static str| {
        set_menu_open.set(false);
        dom::scroll_to_anchor(href);
    };

    let status_badges = move || {
        let s = stats.get();
        view! {
            <Badge
                variant=if s.online { BadgeVariant::Online } else { BadgeVariant::Offline }
                icon="⌁"
            >
                {if s.online { "Online" } else { "Offline" }}
            </Badge>
            <Badge variant=BadgeVariant::Outline icon="⛊">
                {format!("{}/{}", s.player_count, s.max_players)}
            </Badge>
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "site-header anim-fade-in-down is-scrolled"
            } else {
                "site-header anim-fade-in-down"
            }
        }>
            <div class="header-inner">
                <button class="brand" on:click=move |_| navigate("#home")>
                    <span class="brand-mark" aria-hidden="true">"RNM"</span>
                    <span class="brand-text">
                        <span class="brand-title">"RNM"</span>
                        <span class="brand-subtitle">"GTA 5 Server"</span>
                    </span>
                </button>

                <nav class="header-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, href)| {
                            view! {
                                <button class="nav-link" on:click=move |_| navigate(href)>
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-status">
                    {status_badges}
                    <Button variant=ButtonVariant::Gaming href=DISCORD_INVITE external=true glow=true>
                        "Join Discord"
                    </Button>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
            <div class="mobile-menu">
                <div class="mobile-menu-header">
                    <span class="brand-title">"RNM"</span>
                    <button
                        class="menu-close"
                        aria-label="Close menu"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <nav class="mobile-menu-nav">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, &(name, href))| {
                            view! {
                                <button
                                    class="mobile-nav-link anim-fade-in"
                                    style=stagger_style(index)
                                    on:click=move |_| navigate(href)
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="mobile-menu-footer">
                    <div class="mobile-menu-badges">{status_badges}</div>
                    <Button
                        variant=ButtonVariant::Gaming
                        size=ButtonSize::Lg
                        href=DISCORD_INVITE
                        external=true
                        glow=true
                        class="wide"
                    >
                        "Join Discord"
                    </Button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::anchor_target;
    use pretty_assertions::assert_eq;

    /// Pure model of the menu/scroll-lock pairing: the body is locked iff
    /// the menu is open after any sequence of actions.
    #[derive(Debug, Clone, Copy)]
    enum MenuAction {
        Toggle,
        Close,
        Backdrop,
        NavLink,
    }

    fn apply(open: bool, action: MenuAction) -> bool {
        match action {
            MenuAction::Toggle => !open,
            MenuAction::Close | MenuAction::Backdrop | MenuAction::NavLink => false,
        }
    }

    #[test]
    fn scroll_lock_tracks_menu_over_any_sequence() {
        use MenuAction::*;
        let cases: [(&[MenuAction], bool); 5] = [
            (&[Toggle], true),
            (&[Toggle, Toggle], false),
            (&[Toggle, NavLink, Toggle, Backdrop], false),
            (&[Close, Close, Toggle, Close], false),
            (&[Toggle, Toggle, Toggle, NavLink, Toggle], true),
        ];
        for (sequence, expected_open) in cases {
            let mut open = false;
            let mut locked = false;
            for &action in sequence {
                open = apply(open, action);
                // The effect mirrors the menu state into the body lock after
                // every action, so the two can never diverge.
                locked = open;
            }
            assert_eq!(open, expected_open, "sequence {sequence:?}");
            assert_eq!(locked, open, "lock diverged for {sequence:?}");
        }
    }

    #[test]
    fn every_nav_link_is_a_same_page_anchor() {
        for (name, href) in NAV_LINKS {
            assert!(
                anchor_target(href).is_some(),
                "{name} must point at an in-page anchor, got {href}"
            );
        }
    }
}
