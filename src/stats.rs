//! Mocked "live" server metrics.
//!
//! Nothing here talks to a real backend: values are seeded on mount and
//! resampled on a fixed interval to keep the page looking alive. Samplers are
//! injected so the bounds stay checkable without a browser; production passes
//! `js_sys::Math::random`.

pub const SERVER_NAME: &str = "RNM Server";
pub const MAX_PLAYERS: u32 = 128;
pub const UPTIME_LABEL: &str = "99.8%";

pub const DISCORD_INVITE: &str = "https://discord.gg/rnm-server";
pub const SUPPORT_EMAIL: &str = "support@rnm-server.com";

/// Refresh period shared by all mock updaters. The timers are independent;
/// each replaces its own state wholesale, so ordering between them is moot.
pub const STAT_REFRESH_SECS: u64 = 30;

/// `base + floor(r * span)` for a uniform `r` in [0, 1).
fn sample(rng: &mut impl FnMut() -> f64, base: u32, span: u32) -> u32 {
    base + ((rng() * f64::from(span)).floor() as u32).min(span.saturating_sub(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStats {
    pub online: bool,
    pub player_count: u32,
    pub max_players: u32,
    pub uptime: &'static str,
    pub ping_ms: u32,
}

impl ServerStats {
    pub fn seed() -> Self {
        Self {
            online: true,
            player_count: 127,
            max_players: MAX_PLAYERS,
            uptime: UPTIME_LABEL,
            ping_ms: 45,
        }
    }

    /// Hero resample: players in [120, 127], ping in [35, 54].
    /// Replacement, not accumulation: repeated calls cannot drift.
    pub fn resample_hero(&mut self, rng: &mut impl FnMut() -> f64) {
        self.player_count = sample(rng, 120, 8);
        self.ping_ms = sample(rng, 35, 20);
    }

    /// Header resample keeps the count near capacity: players in [124, 128].
    pub fn resample_header(&mut self, rng: &mut impl FnMut() -> f64) {
        self.player_count = sample(rng, 124, 5);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordMessage {
    pub author: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
}

pub static RECENT_MESSAGES: [DiscordMessage; 3] = [
    DiscordMessage {
        author: "PlayerOne",
        content: "Anyone want to start a racing crew? Looking for experienced drivers!",
        timestamp: "just now",
    },
    DiscordMessage {
        author: "StaffMember",
        content: "New update just went live! Check out the new medical system.",
        timestamp: "2m ago",
    },
    DiscordMessage {
        author: "CommunityManager",
        content: "Don't forget about tonight's community event at 8PM EST!",
        timestamp: "5m ago",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordStats {
    pub member_count: u32,
    pub online_count: u32,
    pub recent_messages: &'static [DiscordMessage],
}

impl DiscordStats {
    pub fn seed() -> Self {
        Self {
            member_count: 5247,
            online_count: 892,
            recent_messages: &RECENT_MESSAGES,
        }
    }

    /// Perturbs the live counters: online moves by [-5, +4], members grow by
    /// [0, 2]. Online never goes below zero.
    pub fn resample(&mut self, rng: &mut impl FnMut() -> f64) {
        let step = i64::from(sample(rng, 0, 10)) - 5;
        self.online_count = u32::try_from(i64::from(self.online_count) + step).unwrap_or(0);
        self.member_count += sample(rng, 0, 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Deterministic sweep over the sampler's input space.
    fn sweep() -> impl Iterator<Item = f64> {
        (0..1000).map(|n| f64::from(n) / 1000.0)
    }

    #[test]
    fn hero_players_and_ping_stay_in_bounds() {
        let mut stats = ServerStats::seed();
        for r in sweep() {
            let mut rng = move || r;
            stats.resample_hero(&mut rng);
            assert!(
                (120..=128).contains(&stats.player_count),
                "player count {} out of range",
                stats.player_count
            );
            assert!(
                (35..=55).contains(&stats.ping_ms),
                "ping {} out of range",
                stats.ping_ms
            );
        }
    }

    #[test]
    fn header_players_stay_in_bounds() {
        let mut stats = ServerStats::seed();
        for r in sweep() {
            let mut rng = move || r;
            stats.resample_header(&mut rng);
            assert!((124..=128).contains(&stats.player_count));
        }
    }

    #[test]
    fn resample_replaces_instead_of_accumulating() {
        let mut stats = ServerStats::seed();
        let mut high = || 0.999;
        for _ in 0..10_000 {
            stats.resample_hero(&mut high);
        }
        // Last write wins: many max draws still land on the range ceiling.
        assert_eq!(stats.player_count, 127);
        assert_eq!(stats.ping_ms, 54);
    }

    #[test]
    fn resample_leaves_static_fields_alone() {
        let mut stats = ServerStats::seed();
        let mut rng = || 0.42;
        stats.resample_hero(&mut rng);
        assert!(stats.online);
        assert_eq!(stats.max_players, MAX_PLAYERS);
        assert_eq!(stats.uptime, UPTIME_LABEL);
    }

    #[test]
    fn discord_online_never_underflows() {
        let mut stats = DiscordStats::seed();
        stats.online_count = 2;
        let mut low = || 0.0; // always the largest downward step
        for _ in 0..100 {
            stats.resample(&mut low);
        }
        assert_eq!(stats.online_count, 0);
    }

    #[test]
    fn discord_steps_are_bounded() {
        let mut stats = DiscordStats::seed();
        for r in sweep() {
            let before = stats.clone();
            let mut rng = move || r;
            stats.resample(&mut rng);
            let online_step = i64::from(stats.online_count) - i64::from(before.online_count);
            assert!((-5..=4).contains(&online_step), "online step {online_step}");
            let member_step = stats.member_count - before.member_count;
            assert!(member_step <= 2, "member step {member_step}");
        }
    }

    #[test]
    fn fixtures_ship_three_recent_messages() {
        assert_eq!(DiscordStats::seed().recent_messages.len(), 3);
    }
}
