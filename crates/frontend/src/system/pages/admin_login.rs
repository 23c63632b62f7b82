use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app_context;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let admin_auth = use_app_context().admin_auth;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let admin_auth = admin_auth.clone();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            if let Err(message) = admin_auth.login(username_val, password_val).await {
                error_message.set(Some(message));
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"NearHear"</h1>
                <h2>"Admin login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <Input value=username placeholder="admin" disabled=is_loading />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=is_loading
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
