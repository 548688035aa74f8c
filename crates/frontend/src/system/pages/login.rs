use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match do_login(&set_auth_state, &email.get(), &password.get()) {
            Ok(()) => set_error_message.set(None),
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"MEL Dashboard"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@organization.org"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign In"
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo environment: any email and password will do."</p>
                </div>
            </div>
        </div>
    }
}
