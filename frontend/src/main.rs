mod api;

use chrono::{DateTime, Utc};
use shared::{load_dashboard, uptime_label, AppInfo, DashboardState, HealthStatus, HelloMessage};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <h1>{ "404 - Not Found" }</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[function_component(Home)]
fn home() -> Html {
    let state = use_state(DashboardState::default);

    // One fetch per mount; the result is final.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                state.set(load_dashboard(api::get).await.into());
            });
        });
    }

    if state.is_loading() {
        return html! {
            <div class="container">
                <div class="loading">{ "Loading..." }</div>
            </div>
        };
    }

    if let Some(message) = state.error() {
        return html! {
            <div class="container">
                <div class="error">{ format!("Error: {}", message) }</div>
            </div>
        };
    }

    let Some(dashboard) = state.dashboard() else {
        return Html::default();
    };

    html! {
        <div class="container">
            <header class="header">
                <h1>{ "Fullstack Status" }</h1>
                <p class="subtitle">{ "Cargo workspace + Trunk + Yew + Axum" }</p>
            </header>

            <main class="main">
                <HelloCard hello={dashboard.hello.clone()} />
                <HealthCard health={dashboard.health.clone()} />
                <InfoCard info={dashboard.info.clone()} />
            </main>

            <footer class="footer">
                <p>{ "Built as a Cargo workspace sharing types between server and browser" }</p>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HelloProps {
    hello: HelloMessage,
}

#[function_component(HelloCard)]
fn hello_card(props: &HelloProps) -> Html {
    html! {
        <section class="card">
            <h2>{ "Hello Message" }</h2>
            <div class="card-content">
                <p class="message">{ props.hello.message.clone() }</p>
            </div>
            <div class="card-content">
                <p class="message">{ "This is the Yew front end." }</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HealthProps {
    health: HealthStatus,
}

#[function_component(HealthCard)]
fn health_card(props: &HealthProps) -> Html {
    let checked = props
        .health
        .checked_at()
        .map(local_time)
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <section class="card">
            <h2>{ "Health Status" }</h2>
            <div class="card-content">
                <div class="status">
                    <span class="status-indicator"></span>
                    <span class="status-text">{ props.health.status.clone() }</span>
                </div>
                <p class="timestamp">{ format!("Last checked: {}", checked) }</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct InfoProps {
    info: AppInfo,
}

#[function_component(InfoCard)]
fn info_card(props: &InfoProps) -> Html {
    let info = &props.info;

    let rows = [
        ("App Name:", info.app_name.clone()),
        ("Framework:", info.framework.clone()),
        ("Deployed On:", info.deployed_on.clone()),
        ("Version:", info.node_version.clone()),
        ("Platform:", info.platform.clone()),
        ("Uptime:", uptime_label(info.uptime)),
    ];

    html! {
        <section class="card">
            <h2>{ "Application Info" }</h2>
            <div class="card-content">
                <div class="info-grid">
                    { for rows.into_iter().map(|(label, value)| html! {
                        <div class="info-item">
                            <span class="info-label">{ label }</span>
                            <span class="info-value">{ value }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

/// Render a UTC instant in the browser's locale.
fn local_time(at: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

fn main() {
    yew::Renderer::<App>::new().render();
}
