//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! startup sequence that brings each page manager up in a fixed order.

use folio_core::filter::ProjectFilter;
use folio_core::form::ContactForm;
use folio_core::loading::LoadingGate;
use folio_core::nav::NavState;
use folio_core::notify::{NotificationKind, Notifications};
use folio_core::reveal::RevealTracker;
use folio_core::theme::ThemeManager;
use folio_core::{Appearance, SiteContent, TypingRegistry};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::effects::{AiModeOverlay, CursorTrail, MatrixRain};
use crate::components::{
    About, Contact, Experience, Footer, Hero, LoadingScreen, Navbar, NotificationStack,
    Projects, Skills, SkipLink,
};
use crate::config::{
    MAIN_ID, MAX_NOTIFICATIONS, MIN_LOADING_MS, NOTIFICATION_TIMEOUT_MS, SITE_CONTENT,
};
use crate::core::theme::LocalStore;
use crate::core::{accessibility, easter_eggs, loading, navigation, performance, theme};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// Each field is owned by exactly one manager; other components only read
/// it or go through the methods below.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parsed site content.
    pub content: StoredValue<SiteContent>,
    /// Minimum display time for the loading screen.
    pub loading_gate: LoadingGate,
    /// Set once the loading screen has been dismissed.
    pub loaded: RwSignal<bool>,
    /// Active section, scrolled navbar and mobile menu.
    pub nav: RwSignal<NavState>,
    /// Selected project category.
    pub filter: RwSignal<ProjectFilter>,
    /// Contact form draft, errors and submit state.
    pub contact: RwSignal<ContactForm>,
    /// Theme preference bound to localStorage.
    pub theme: RwSignal<ThemeManager<LocalStore>>,
    /// OS colour scheme (`prefers-color-scheme: dark`).
    pub prefers_dark: Signal<bool>,
    /// Decorative motion switched off (slow device or OS setting).
    pub reduce_motion: RwSignal<bool>,
    /// Toast notifications.
    pub notifications: RwSignal<Notifications>,
    /// Running typing animations.
    pub typing: StoredValue<TypingRegistry>,
    /// Scroll reveal bookkeeping.
    pub reveal: StoredValue<RevealTracker>,
    /// Matrix rain overlay running.
    pub matrix_active: RwSignal<bool>,
    /// AI-mode overlay shown.
    pub ai_mode: RwSignal<bool>,
}

impl AppContext {
    /// Creates the application state for the given content.
    ///
    /// Must be called inside a reactive owner (it subscribes to a media
    /// query).
    pub fn new(content: SiteContent) -> Self {
        let default_theme = content.default_theme;
        Self {
            content: StoredValue::new(content),
            loading_gate: LoadingGate::new(dom::now_ms(), MIN_LOADING_MS),
            loaded: RwSignal::new(false),
            nav: RwSignal::new(NavState::new()),
            filter: RwSignal::new(ProjectFilter::All),
            contact: RwSignal::new(ContactForm::new()),
            theme: RwSignal::new(theme::load(default_theme)),
            prefers_dark: use_media_query("(prefers-color-scheme: dark)"),
            reduce_motion: RwSignal::new(false),
            notifications: RwSignal::new(Notifications::new(MAX_NOTIFICATIONS)),
            typing: StoredValue::new(TypingRegistry::new()),
            reveal: StoredValue::new(RevealTracker::new()),
            matrix_active: RwSignal::new(false),
            ai_mode: RwSignal::new(false),
        }
    }

    /// Appearance currently rendered.
    pub fn appearance(&self) -> Appearance {
        let preference = self.theme.with(|t| t.preference());
        preference.resolve(self.prefers_dark.get())
    }

    /// Flip between light and dark and persist the choice.
    pub fn toggle_theme(&self) {
        let prefers_dark = self.prefers_dark.get_untracked();
        self.theme.update(|t| {
            if let Err(e) = t.toggle(prefers_dark) {
                dom::warn(&format!("theme not saved: {}", e));
            }
        });
    }

    pub fn toggle_menu(&self) {
        if let Some(toggle) = self.nav.try_update(|n| n.toggle_menu()) {
            dom::dispatch_menu_toggle(toggle);
        }
    }

    pub fn close_menu(&self) {
        if let Some(toggle) = self.nav.try_update(|n| n.close_menu()).flatten() {
            dom::dispatch_menu_toggle(toggle);
        }
    }

    /// Show a toast that dismisses itself after `NOTIFICATION_TIMEOUT_MS`.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.notifications.try_update(|n| n.push(kind, message)) else {
            return;
        };
        let notifications = self.notifications;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
            notifications.try_update(|n| n.dismiss(id));
        })
        .forget();
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Bring up page managers in order: loading, navigation, filter, contact
/// form, theme, performance, accessibility, then the decorative extras.
fn startup(ctx: AppContext) {
    loading::init(ctx);
    navigation::init(ctx);
    // Filter and contact form state start fresh from `AppContext::new`;
    // their handlers live on the components.
    theme::init(ctx);
    performance::init(ctx);
    accessibility::init(ctx);
    easter_eggs::init(ctx);
    dom::log("folio: page managers initialized");
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Parses the bundled site content
/// - Wraps the page in an ErrorBoundary for graceful error handling
/// - Renders the Portfolio page
#[component]
pub fn App() -> impl IntoView {
    let page =
        SiteContent::from_toml(SITE_CONTENT).map(|content| view! { <Portfolio content=content /> });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0b1020;
                    color: #e2e8f0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <ul style="text-align: left; color: #f87171; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #6366f1;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {page}
        </ErrorBoundary>
    }
}

/// The single-page portfolio.
#[component]
fn Portfolio(content: SiteContent) -> impl IntoView {
    let ctx = AppContext::new(content);
    provide_context(ctx);
    startup(ctx);

    view! {
        <SkipLink />
        <LoadingScreen />
        <Navbar />
        <main id=MAIN_ID tabindex="-1">
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Contact />
        </main>
        <Footer />
        <NotificationStack />
        <CursorTrail />
        <MatrixRain />
        <AiModeOverlay />
    }
}
