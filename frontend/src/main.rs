use log::{info, Level};
use wasm_bindgen_futures::spawn_local;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod background;
mod config;
mod counter;
mod motion;
mod raf;
mod scene;
mod scroll_lock;
mod spotlight;
mod spring;
mod tilt;
mod translate;

mod sections {
    pub mod community;
    pub mod footer;
    pub mod hero;
    pub mod steps;
}

use background::Background;
use motion::{
    entrance_style, use_reveal, RevealOptions, TransitionProfile, Variant, Variants, MENU_CONTENT,
};
use scroll_lock::use_scroll_lock;
use sections::community::CreatorsCommunities;
use sections::footer::Footer;
use sections::hero::Hero;
use sections::steps::{HowItWorks, StepOne, StepThree, StepTwo};
use spotlight::SpotlightButton;

const INITIAL_HEADLINE: &str = "Your Creative Work, Trading\non a Tokenized Market";
const INITIAL_SUBHEADLINE: &str = "Fund your passion project with an easy, transparent token launch.\nReward your supporters as you change lives—together.";

/// Navbar drop-in on page load.
static NAV_DROP: Variants = Variants {
    hidden: Variant::NEUTRAL.y(-50.0).opacity(0.0),
    visible: Variant::NEUTRAL,
    transition: TransitionProfile::spring(120.0, 14.0),
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavTab {
    Home,
    HowItWorks,
    WhoItsFor,
    JoinNow,
}

impl NavTab {
    const ALL: [NavTab; 4] = [
        NavTab::Home,
        NavTab::HowItWorks,
        NavTab::WhoItsFor,
        NavTab::JoinNow,
    ];

    fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::HowItWorks => "How It Works",
            NavTab::WhoItsFor => "Who It's For",
            NavTab::JoinNow => "Join Now",
        }
    }

    /// Section anchor, for the tabs that scroll somewhere.
    fn section_id(self) -> Option<&'static str> {
        match self {
            NavTab::Home => Some("home"),
            NavTab::HowItWorks => Some("how-it-works"),
            NavTab::WhoItsFor | NavTab::JoinNow => None,
        }
    }
}

fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Closed,
    Open,
    Closing,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_tab: NavTab,
    pub on_select: Callback<NavTab>,
    pub on_open_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let open_menu = {
        let on_open_menu = props.on_open_menu.clone();
        Callback::from(move |_: MouseEvent| on_open_menu.emit(()))
    };

    let go_home = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(NavTab::Home))
    };

    html! {
        <nav class="island-nav-rail">
            <div class="island-nav" style={entrance_style(&NAV_DROP, *mounted, 0)}>
                <div class="nav-logo" onclick={go_home}>
                    { "SPARK" }<span class="nav-logo-dim">{ "FUND" }</span>
                </div>

                <div class="nav-tabs">
                    {
                        for NavTab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            let active = props.active_tab == tab;
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(tab))
                            };
                            html! {
                                <button
                                    class={classes!("nav-tab", active.then_some("active"))}
                                    {onclick}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                </div>

                <div class="nav-actions">
                    <div class="nav-socials">
                        <button class="nav-icon-button">{ "✕" }</button>
                        <button class="nav-icon-button">{ "🎮" }</button>
                    </div>
                    <button class="nav-launch">{ "✦ Launch" }</button>
                    <button class="burger-button" onclick={open_menu}>{ "☰" }</button>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct BottomBarProps {
    visible: bool,
}

/// Floating action bar, only shown while the hero is on screen.
#[function_component(BottomBar)]
fn bottom_bar(props: &BottomBarProps) -> Html {
    let offset = if props.visible { 0.0 } else { 200.0 };
    let opacity = if props.visible { 1.0 } else { 0.0 };
    let style = format!(
        "transform: translate(-50%, {offset}px); opacity: {opacity}; transition: all 700ms cubic-bezier(0.22, 1, 0.36, 1);"
    );

    html! {
        <div class="bottom-bar" {style}>
            <div class="bottom-bar-tray">
                <SpotlightButton
                    class="bar-primary"
                    spotlight_color="rgba(255, 255, 255, 0.6)"
                >
                    { "✦ Launch Your Project" }
                </SpotlightButton>
                <SpotlightButton
                    class="bar-secondary"
                    spotlight_color="rgba(255, 255, 255, 0.15)"
                >
                    { "⚡ Explore Live Projects" }
                </SpotlightButton>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MobileMenuProps {
    state_open: bool,
    language: AttrValue,
    translating: bool,
    on_select: Callback<NavTab>,
    on_language: Callback<String>,
    on_close: Callback<()>,
}

#[function_component(MobileMenu)]
fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("menu-overlay", props.state_open.then_some("open"))}>
            <button class="menu-close" onclick={close}>{ "✕" }</button>
            <div
                class="menu-content"
                style={entrance_style(&MENU_CONTENT, props.state_open, 100)}
            >
                {
                    for NavTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(tab));
                        html! {
                            <a class="menu-link" {onclick}>{ tab.label() }</a>
                        }
                    })
                }

                <div class="language-row">
                    {
                        for translate::LANGUAGES.iter().map(|lang| {
                            let lang = *lang;
                            let selected = &*props.language == lang;
                            let on_language = props.on_language.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_language.emit(lang.to_string());
                            });
                            html! {
                                <button
                                    class={classes!("language-button", selected.then_some("selected"))}
                                    disabled={props.translating}
                                    {onclick}
                                >
                                    { lang }
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let headline = use_state(|| AttrValue::Static(INITIAL_HEADLINE));
    let subheadline = use_state(|| AttrValue::Static(INITIAL_SUBHEADLINE));
    let language = use_state(|| AttrValue::Static(translate::DEFAULT_LANGUAGE));
    let translating = use_state(|| false);
    let active_tab = use_state(|| NavTab::Home);
    let menu = use_state(|| MenuState::Closed);

    // the whole page stops scrolling behind the opened menu; the lock is
    // released on close and on teardown
    use_scroll_lock(*menu == MenuState::Open);

    let hero_ref = use_node_ref();
    let hero_in_view = use_reveal(
        hero_ref.clone(),
        RevealOptions {
            once: false,
            amount: 0.0,
            margin: "-40% 0px -40% 0px",
        },
    );

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            if *menu == MenuState::Open {
                menu.set(MenuState::Closing);
                let menu = menu.clone();
                gloo_timers::callback::Timeout::new(200, move || {
                    menu.set(MenuState::Closed);
                })
                .forget();
            }
        })
    };

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(MenuState::Open))
    };

    let select_tab = {
        let active_tab = active_tab.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |tab: NavTab| {
            active_tab.set(tab);
            if let Some(id) = tab.section_id() {
                scroll_to_section(id);
            }
            close_menu.emit(());
        })
    };

    let change_language = {
        let language = language.clone();
        let headline = headline.clone();
        let subheadline = subheadline.clone();
        let translating = translating.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |new_language: String| {
            close_menu.emit(());
            if *translating || new_language.as_str() == &**language {
                return;
            }
            language.set(AttrValue::from(new_language.clone()));

            if new_language == translate::DEFAULT_LANGUAGE {
                // identity reset: always exactly the source copy
                headline.set(AttrValue::Static(INITIAL_HEADLINE));
                subheadline.set(AttrValue::Static(INITIAL_SUBHEADLINE));
                return;
            }

            translating.set(true);
            let headline = headline.clone();
            let subheadline = subheadline.clone();
            let translating = translating.clone();
            spawn_local(async move {
                let pair =
                    translate::translate(INITIAL_HEADLINE, INITIAL_SUBHEADLINE, &new_language)
                        .await;
                // one struct in, both lines out: the pair replaces
                // atomically or not at all
                headline.set(AttrValue::from(pair.headline));
                subheadline.set(AttrValue::from(pair.subheadline));
                translating.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <Background />

            <Nav
                active_tab={*active_tab}
                on_select={select_tab.clone()}
                on_open_menu={open_menu}
            />

            <Hero
                headline={(*headline).clone()}
                subheadline={(*subheadline).clone()}
                translating={*translating}
                section_ref={hero_ref}
            />

            <HowItWorks />
            <StepOne />
            <StepTwo />
            <StepThree />
            <CreatorsCommunities />

            <BottomBar visible={hero_in_view} />

            <Footer />

            {
                if *menu != MenuState::Closed {
                    html! {
                        <MobileMenu
                            state_open={*menu == MenuState::Open}
                            language={(*language).clone()}
                            translating={*translating}
                            on_select={select_tab}
                            on_language={change_language}
                            on_close={close_menu}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting SparkFund landing page");
    yew::Renderer::<App>::new().render();
}
