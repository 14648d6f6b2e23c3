use leptos::prelude::*;

use crate::dom;
use crate::stats::{DISCORD_INVITE, MAX_PLAYERS, SUPPORT_EMAIL, UPTIME_LABEL};
use crate::ui::{Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant};

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Discord", DISCORD_INVITE),
    ("YouTube", "https://youtube.com/@rnm-server"),
    ("Twitter", "https://twitter.com/rnm_server"),
    ("Twitch", "https://twitch.tv/rnm-server"),
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Server Rules", "#rules"),
    ("How to Join", "#join"),
    ("Server Info", "#info"),
    ("Contact Us", "#contact"),
];

const LEGAL_LINKS: [(&str, &str); 4] = [
    ("Terms of Service", "/terms"),
    ("Privacy Policy", "/privacy"),
    ("Community Guidelines", "/guidelines"),
    ("DMCA Policy", "/dmca"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <span class="brand-mark" aria-hidden="true">"RNM"</span>
                            <span class="brand-text">
                                <span class="brand-title">"RNM Server"</span>
                                <span class="brand-subtitle">"GTA 5 Roleplay"</span>
                            </span>
                        </div>
                        <p class="footer-blurb">
                            "Experience the ultimate GTA 5 roleplay server with immersive \
                             gameplay, professional staff, and an amazing community."
                        </p>
                        <div class="footer-badges">
                            <Badge variant=BadgeVariant::Online size=BadgeSize::Sm>
                                "Server Online"
                            </Badge>
                            <Badge variant=BadgeVariant::Outline size=BadgeSize::Sm>
                                {format!("127/{MAX_PLAYERS} Players")}
                            </Badge>
                        </div>
                        <Button
                            variant=ButtonVariant::Gaming
                            size=ButtonSize::Sm
                            href=DISCORD_INVITE
                            external=true
                            class="wide"
                        >
                            "Join Now"
                        </Button>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-list">
                            {QUICK_LINKS
                                .iter()
                                .map(|&(name, href)| {
                                    view! {
                                        <li>
                                            <button
                                                class="footer-link"
                                                on:click=move |_| dom::scroll_to_anchor(href)
                                            >
                                                {name}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"Connect With Us"</h4>
                        <ul class="footer-list">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(name, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="footer-link"
                                            >
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="footer-discord-note">
                            <div class="footer-discord-title">"Discord Community"</div>
                            <p class="footer-discord-count">"5,247+ members online"</p>
                            <Badge variant=BadgeVariant::Success size=BadgeSize::Sm>
                                "Very Active"
                            </Badge>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"Server Information"</h4>
                        <div class="footer-info">
                            <div class="footer-info-block">
                                <div class="footer-info-label">"Server Address"</div>
                                <code class="footer-info-code">"connect rnm-server.com"</code>
                            </div>
                            <div class="footer-info-block">
                                <div class="footer-info-label">"Support Email"</div>
                                <a class="footer-link" href=format!("mailto:{SUPPORT_EMAIL}")>
                                    {SUPPORT_EMAIL}
                                </a>
                            </div>
                            <div class="footer-info-block">
                                <div class="footer-info-label">"Server Uptime"</div>
                                <div class="footer-uptime">
                                    <span class="status-dot" aria-hidden="true"></span>
                                    {format!("{UPTIME_LABEL} (30 days)")}
                                </div>
                            </div>
                        </div>
                        <div class="footer-secure">
                            <div class="footer-secure-title">"Secure & Protected"</div>
                            <p class="footer-secure-text">
                                "Advanced anti-cheat and professional moderation"
                            </p>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">
                        <p>{format!("© {current_year} RNM Server. All rights reserved.")}</p>
                        <p class="footer-credit">"Built with ♥ by the RNM Team"</p>
                    </div>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|&(name, href)| {
                                view! { <a href=href class="footer-link">{name}</a> }
                            })
                            .collect_view()}
                    </div>
                    <div class="footer-disclaimer">
                        <p>"Not affiliated with Rockstar Games"</p>
                        <p class="footer-credit">"FiveM Community Server"</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
