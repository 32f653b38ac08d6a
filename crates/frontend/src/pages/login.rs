//! Login page.

use estate_types::{LoginRequest, LoginResponse, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::session::Session;

/// Login page component.
///
/// On success the session is stored and the user is routed to exactly
/// one dashboard based on role; an unrecognized role surfaces an error
/// and stays on this page.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_json::<LoginResponse, _>("/auth/login", &request).await {
                    Ok(response) => {
                        Session::store(&response.user, &response.token);
                        let target = match response.user.role {
                            Role::Admin => Some(Route::AdminDashboard),
                            Role::Agent => Some(Route::AgentDashboard),
                            Role::Customer => Some(Route::CustomerDashboard),
                            Role::Unknown => None,
                        };
                        match target {
                            Some(route) => {
                                if let Some(navigator) = &navigator {
                                    navigator.push(&route);
                                }
                            }
                            None => error.set(Some("Unknown role".to_string())),
                        }
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="login-box">
                <h2 class="login-heading">{"Welcome Back"}</h2>
                <p class="login-subheading">{"Let's login to grab amazing deals"}</p>

                <form onsubmit={onsubmit} class="login-form">
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        required=true
                    />

                    <div class="password-wrapper">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required=true
                        />
                        <button
                            type="button"
                            class="show-password-toggle"
                            onclick={on_toggle_password}
                        >
                            { if *show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>

                    if let Some(message) = error.as_ref() {
                        <p class="error-message">{ message }</p>
                    }

                    <button type="submit" class="login-submit">{"Login"}</button>

                    <p class="signup-link">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Signup}>{"Sign Up"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
