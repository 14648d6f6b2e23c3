//! Supervisory error boundary for the page.
//!
//! Wraps the section tree once near the root. A render failure anywhere below
//! swaps the subtree for a recovery card with a bounded number of in-place
//! retries; reload and navigate-home remain once those run out.

use leptos::children::{ChildrenFn, ViewFn};
use leptos::error::Errors;
use leptos::prelude::*;

use crate::diagnostics::{self, ErrorReport, FailureKind};
use crate::dom;
use crate::stats::DISCORD_INVITE;
use crate::ui::badge::{Badge, BadgeSize, BadgeVariant};
use crate::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::card::{Card, CardContent, CardHeader, CardTitle, CardVariant};

pub const MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub error_id: String,
    pub message: String,
    pub kind: FailureKind,
}

/// The boundary's bookkeeping, kept apart from the view so the transitions
/// stay checkable: Healthy -> Failed -> (retry while budget lasts) -> Healthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryState {
    failure: Option<Failure>,
    retry_count: u32,
    max_retries: u32,
}

impl BoundaryState {
    pub fn new(max_retries: u32) -> Self {
        Self {
            failure: None,
            retry_count: 0,
            max_retries,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn can_retry(&self) -> bool {
        self.retry_count < self.max_retries
    }

    /// Records a failure. Returns the fresh record only on the
    /// Healthy -> Failed edge; repeated reports of the same occurrence keep
    /// the first id and produce nothing.
    pub fn fail(&mut self, message: String, error_id: String) -> Option<Failure> {
        if self.failure.is_some() {
            return None;
        }
        let failure = Failure {
            error_id,
            kind: FailureKind::classify(&message),
            message,
        };
        self.failure = Some(failure.clone());
        Some(failure)
    }

    /// Clears the failure and spends one retry. A no-op once the budget is
    /// exhausted or while healthy.
    pub fn retry(&mut self) -> bool {
        if self.failure.is_none() || !self.can_retry() {
            return false;
        }
        self.retry_count += 1;
        self.failure = None;
        true
    }
}

/// Page-level boundary. Children are remounted on retry; a caller-supplied
/// `fallback` replaces the built-in recovery card but keeps the catch, log,
/// and retry-count bookkeeping.
#[component]
pub fn PageErrorBoundary(
    #[prop(optional)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(BoundaryState::new(MAX_RETRIES));
    // Bumping the epoch tears down and rebuilds the subtree under a fresh
    // framework boundary, which is what makes retry-in-place re-render.
    let epoch = RwSignal::new(0u32);

    view! {
        {move || {
            epoch.track();
            let children = children.clone();
            let fallback = fallback.clone();
            view! {
                <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
                    let fallback = fallback.clone();
                    Effect::new(move |_| {
                        let message = errors.with(|errs| {
                            errs.iter()
                                .next()
                                .map(|(_, err)| err.to_string())
                                .unwrap_or_else(|| "unknown render failure".to_owned())
                        });
                        let fresh = state
                            .try_update(|s| s.fail(message, diagnostics::new_error_id()))
                            .flatten();
                        if let Some(failure) = fresh {
                            let retries = state.with_untracked(BoundaryState::retry_count);
                            diagnostics::capture(&ErrorReport::from_failure(
                                &failure.error_id,
                                &failure.message,
                                retries,
                            ));
                        }
                    });
                    let on_retry = move |_| {
                        if state.try_update(BoundaryState::retry).unwrap_or(false) {
                            epoch.update(|n| *n += 1);
                        }
                    };
                    match fallback {
                        Some(custom) => custom.run(),
                        None => view! { <RecoveryCard state=state on_retry=on_retry /> }.into_any(),
                    }
                }}>
                    {children()}
                </ErrorBoundary>
            }
        }}
    }
}

#[component]
fn RecoveryCard(
    state: RwSignal<BoundaryState>,
    on_retry: impl Fn(()) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let error_id = move || {
        state.with(|s| {
            s.failure()
                .map(|f| f.error_id.clone())
                .unwrap_or_default()
        })
    };
    let kind = move || {
        state.with(|s| s.failure().map(|f| f.kind).unwrap_or(FailureKind::Generic))
    };
    let retry_count = move || state.with(BoundaryState::retry_count);
    let can_retry = move || state.with(BoundaryState::can_retry);

    let copy_details = move |_| {
        state.with_untracked(|s| {
            if let Some(failure) = s.failure() {
                let report = ErrorReport::from_failure(
                    &failure.error_id,
                    &failure.message,
                    s.retry_count(),
                );
                dom::copy_to_clipboard(&report.to_clipboard_text());
            }
        });
    };

    view! {
        <div class="boundary-screen">
            <Card variant=CardVariant::Default class="boundary-card">
                <CardHeader class="boundary-header">
                    <div class="boundary-glyph" aria-hidden="true">"!"</div>
                    <CardTitle class="boundary-title">"Oops! Something went wrong"</CardTitle>
                    <div class="boundary-badges">
                        <Badge variant=BadgeVariant::Destructive size=BadgeSize::Sm>
                            "Error ID: " {error_id}
                        </Badge>
                        <Show when=move || kind() == FailureKind::Network>
                            <Badge variant=BadgeVariant::Warning size=BadgeSize::Sm>
                                "Network Issue"
                            </Badge>
                        </Show>
                        <Show when=move || kind() == FailureKind::Load>
                            <Badge variant=BadgeVariant::Info size=BadgeSize::Sm>
                                "Loading Issue"
                            </Badge>
                        </Show>
                    </div>
                </CardHeader>
                <CardContent class="boundary-body">
                    <p class="boundary-guidance">{move || kind().guidance()}</p>
                    <Show when={move || retry_count() > 0}>
                        <p class="boundary-attempts">
                            "Retry attempts: " {retry_count} "/"
                            {move || state.with(BoundaryState::max_retries)}
                        </p>
                    </Show>
                    <div class="boundary-actions">
                        <Show when=can_retry>
                            <Button
                                variant=ButtonVariant::Primary
                                on_press=Callback::new(on_retry)
                            >
                                "Try Again"
                            </Button>
                        </Show>
                        <Button
                            variant=ButtonVariant::Secondary
                            on_press=Callback::new(move |_| dom::reload_page())
                        >
                            "Reload Page"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            on_press=Callback::new(move |_| dom::navigate_home())
                        >
                            "Go Home"
                        </Button>
                    </div>
                    <div class="boundary-support">
                        <p>"Still having issues? Get help from our support team:"</p>
                        <div class="boundary-support-actions">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                href=DISCORD_INVITE
                                external=true
                            >
                                "Discord Support"
                            </Button>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                on_press=Callback::new(copy_details)
                            >
                                "Copy Error Details"
                            </Button>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failed(state: &mut BoundaryState, msg: &str, id: &str) -> Option<Failure> {
        state.fail(msg.to_owned(), id.to_owned())
    }

    #[test]
    fn failure_transitions_exactly_once_per_occurrence() {
        let mut state = BoundaryState::new(MAX_RETRIES);
        let first = failed(&mut state, "boom", "ERR_1_a");
        assert!(first.is_some());
        // A second report of the same occurrence keeps the original id.
        let second = failed(&mut state, "boom again", "ERR_1_b");
        assert_eq!(second, None);
        assert_eq!(state.failure().unwrap().error_id, "ERR_1_a");
    }

    #[test]
    fn retry_budget_caps_at_three() {
        let mut state = BoundaryState::new(MAX_RETRIES);
        for n in 1..=MAX_RETRIES {
            failed(&mut state, "boom", &format!("ERR_{n}"));
            assert!(state.can_retry());
            assert!(state.retry());
            assert_eq!(state.retry_count(), n);
        }
        // Fourth failure: retry is a no-op, the state stays Failed.
        failed(&mut state, "boom", "ERR_4");
        assert!(!state.can_retry());
        assert!(!state.retry());
        assert!(state.failure().is_some());
        assert_eq!(state.retry_count(), MAX_RETRIES);
    }

    #[test]
    fn retry_while_healthy_is_a_no_op() {
        let mut state = BoundaryState::new(MAX_RETRIES);
        assert!(!state.retry());
        assert_eq!(state.retry_count(), 0);
    }

    #[test]
    fn each_occurrence_gets_its_own_id() {
        let mut state = BoundaryState::new(MAX_RETRIES);
        let a = failed(&mut state, "boom", "ERR_1").unwrap();
        state.retry();
        let b = failed(&mut state, "boom", "ERR_2").unwrap();
        assert_ne!(a.error_id, b.error_id);
    }

    #[test]
    fn failure_records_carry_classification() {
        let mut state = BoundaryState::new(MAX_RETRIES);
        let failure = failed(&mut state, "failed to fetch /api", "ERR_1").unwrap();
        assert_eq!(failure.kind, FailureKind::Network);
    }
}
