// RNM Server landing page

mod boundary;
mod diagnostics;
mod dom;
mod sections;
mod stats;
mod ui;

use leptos::prelude::*;

use boundary::PageErrorBoundary;
use sections::{Community, Features, Footer, Header, Hero};
use ui::LoadingSpinner;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <PageErrorBoundary>
            <div class="page">
                <Header />
                <main>
                    <Suspense fallback=|| {
                        view! { <LoadingSpinner full_screen=true text="Loading RNM Server..." /> }
                    }>
                        <Hero />
                        <Features />
                        <Community />
                    </Suspense>
                </main>
                <Footer />
            </div>
        </PageErrorBoundary>
    }
}
