//! 登录表单组件
//!
//! 纯粹的表单输入渲染，提交逻辑由 `LoginPage` 注入。

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

use super::draft::{LoginDraft, LoginField};

#[component]
pub fn LoginForm(
    draft: RwSignal<LoginDraft>,
    fail_message: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    on_submit: impl Fn(SubmitEvent) + 'static,
) -> impl IntoView {
    let on_input = move |field: LoginField| {
        move |ev: leptos::web_sys::Event| draft.update(|d| d.set_field(field, event_target_value(&ev)))
    };

    view! {
        <form class="flex flex-col gap-3" on:submit=on_submit>
            <div class="form-control">
                <label class="label" for="email">
                    <span class="label-text">"Email address"</span>
                </label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="off"
                    required
                    on:input=on_input(LoginField::Email)
                    prop:value=move || draft.with(|d| d.email.clone())
                    class="input input-bordered input-sm w-full"
                />
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="off"
                    required
                    on:input=on_input(LoginField::Password)
                    prop:value=move || draft.with(|d| d.password.clone())
                    class="input input-bordered input-sm w-full"
                />
            </div>

            {move || fail_message.get().map(|msg| view! {
                <div role="alert" class="alert alert-warning alert-outline text-sm py-2">
                    <span>{msg}</span>
                </div>
            })}

            <label class="label cursor-pointer justify-start gap-2 text-base-content/60">
                <input
                    type="checkbox"
                    class="checkbox checkbox-sm"
                    prop:checked=move || draft.with(|d| d.remember)
                    on:change=move |ev| draft.update(|d| d.remember = event_target_checked(&ev))
                />
                <span class="label-text">"Keep me signed in for the future"</span>
            </label>

            <button type="submit" class="btn btn-primary w-full my-5" disabled=move || pending.get()>
                {move || if pending.get() {
                    view! { <span class="loading loading-spinner"></span> "SIGNING IN" }.into_any()
                } else {
                    "SIGN IN".into_any()
                }}
            </button>

            <div class="divider">"or"</div>

            <p class="text-center text-base-content/60">
                "Are you new here ? "
                <button type="button" class="btn btn-link btn-sm">"Sign Up"</button>
            </p>
        </form>
    }
}
