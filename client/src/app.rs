//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location is resolved through `RouteTable`; Leptos only supplies the
//! catch-all route and the location signals. The session store is created
//! here and handed to the tree as context, never as a global.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    body_map::BodyMapPage, landing::LandingPage, literature_list::LiteratureListPage, login::LoginPage,
    not_found::NotFoundPage, personel_list::PersonelListPage,
};
use crate::routes::{Page, Query, Resolution, RouteTable};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(identity) = crate::net::api::fetch_current_identity().await {
            crate::util::auth::apply_identity(session, identity);
        }
    });

    let body = match RouteTable::standard() {
        Ok(table) => {
            provide_context(table);
            view! {
                <Router>
                    <NavBar/>
                    <main class="page">
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=StaticSegment("") view=RoutedPage/>
                            <Route path=WildcardSegment("path") view=RoutedPage/>
                        </Routes>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("route table rejected: {e}");
            view! { <p class="config-error">{format!("Route configuration error: {e}")}</p> }.into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/bodymap.css"/>
        <Title text="BodyMap"/>
        {body}
    }
}

/// Renders whatever page the route table picks for the current location.
#[component]
fn RoutedPage() -> impl IntoView {
    let table = expect_context::<RouteTable>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let query = Query::parse(&location.search.get());
        render_page(table.resolve(&path, &query))
    }
}

fn render_page(resolution: Resolution) -> AnyView {
    let init_search = resolution.props.init_search;
    match resolution.page {
        Page::Landing => view! { <LandingPage/> }.into_any(),
        Page::BodyMap => view! { <BodyMapPage/> }.into_any(),
        Page::LiteratureList => view! { <LiteratureListPage init_search=init_search/> }.into_any(),
        Page::PersonelList => view! { <PersonelListPage init_search=init_search/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
