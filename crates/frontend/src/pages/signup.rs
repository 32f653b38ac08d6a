//! Signup page.

use estate_types::{Role, SignupRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;

/// Signup page component. Agents and customers can register; a success
/// message is shown briefly before redirecting to login.
#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| Role::Agent);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let navigator = use_navigator();

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

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

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            role.set(match select.value().as_str() {
                "customer" => Role::Customer,
                _ => Role::Agent,
            });
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let error = error.clone();
        let success = success.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);

            let request = SignupRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                role: *role,
            };
            let error = error.clone();
            let success = success.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_json::<serde_json::Value, _>("/auth/register", &request).await {
                    Ok(_) => {
                        success.set(Some(
                            "Signup successful! Redirecting to login...".to_string(),
                        ));
                        gloo_timers::callback::Timeout::new(2_000, move || {
                            if let Some(navigator) = &navigator {
                                navigator.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        })
    };

    html! {
        <div class="signup-page">
            <div class="signup-box">
                <h2 class="signup-heading">{"Create an Account"}</h2>
                <p class="signup-subheading">{"Join as Agent or Customer"}</p>

                <form onsubmit={onsubmit} class="signup-form">
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        required=true
                    />

                    <input
                        type="email"
                        placeholder="Email Address"
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

                    <select class="role-select" onchange={on_role_change}>
                        <option value="agent" selected={*role == Role::Agent}>{"Agent"}</option>
                        <option value="customer" selected={*role == Role::Customer}>{"Customer"}</option>
                    </select>

                    if let Some(message) = error.as_ref() {
                        <p class="error-message">{ message }</p>
                    }
                    if let Some(message) = success.as_ref() {
                        <p class="success-message">{ message }</p>
                    }

                    <button type="submit" class="signup-submit">{"Sign Up"}</button>

                    <p class="login-link">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
