//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    AddPropertyPage, AdminDashboardPage, AgentDashboardPage, ContactPage, CustomerDashboardPage,
    HomePage, LoginPage, SignupPage,
};
use crate::session::Session;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/contact")]
    Contact,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/agent/dashboard")]
    AgentDashboard,
    #[at("/agent/add-property")]
    AddProperty,
    #[at("/customer/dashboard")]
    CustomerDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::AgentDashboard => html! { <AgentDashboardPage /> },
        Route::AddProperty => html! { <AddPropertyPage /> },
        Route::CustomerDashboard => html! { <CustomerDashboardPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main class="main-content">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

/// Top navigation bar.
///
/// Logged out: Login/Signup/Home/Contact links, hiding the link to the
/// page currently shown. Logged in: a single Logout button that clears
/// the session and returns home.
#[function_component(Navbar)]
fn navbar() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);

    let on_logout = Callback::from(move |_: MouseEvent| {
        Session::clear();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <nav class="navbar">
            <div class="navbar-left">
                <Link<Route> to={Route::Home} classes="logo">
                    {"Estate Hub"}
                </Link<Route>>
            </div>

            <div class="navbar-right">
                if Session::is_logged_in() {
                    <button class="nav-btn logout-btn" onclick={on_logout}>
                        {"Logout"}
                    </button>
                } else {
                    if route != Route::Login {
                        <Link<Route> to={Route::Login} classes="nav-btn login-btn">{"Login"}</Link<Route>>
                    }
                    if route != Route::Signup {
                        <Link<Route> to={Route::Signup} classes="nav-btn signup-btn">{"Signup"}</Link<Route>>
                    }
                    if route != Route::Home {
                        <Link<Route> to={Route::Home} classes="nav-btn home-btn">{"Home"}</Link<Route>>
                    }
                    if route != Route::Contact {
                        <Link<Route> to={Route::Contact} classes="nav-btn contact-btn">{"Contact"}</Link<Route>>
                    }
                }
            </div>
        </nav>
    }
}
