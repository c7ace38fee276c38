//! 登录页
//!
//! 提交流程：置 pending -> 调用认证服务 -> 成功则回到首页，失败则显示提示
//! -> 无论结果如何清空密码并复位 pending。

mod draft;
mod form;

use crate::api::EcoHabitApi;
use crate::auth::{login, remember_email, remembered_email, use_auth};
use crate::config::use_config;
use crate::error::LoginError;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use draft::LoginDraft;
use form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let api = EcoHabitApi::browser(&use_config().api_base_url);

    let draft = RwSignal::new(LoginDraft::prefilled(remembered_email()));
    let (fail_message, set_fail_message) = signal(Option::<String>::None);
    let pending = Signal::derive(move || auth.is_pending());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if auth.state.with_untracked(|s| s.login_pending) {
            return;
        }

        let request = draft.with_untracked(LoginDraft::to_request);
        let remember = draft.with_untracked(|d| d.remember);
        let api = api.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match login(&auth, &api, &request).await {
                Ok(()) => {
                    set_fail_message.set(None);
                    remember_email(remember.then_some(request.email.as_str()));
                    navigate(AppRoute::Home.to_path());
                }
                Err(err) => {
                    match &err {
                        LoginError::Unexpected { .. } => log_error!("[Login] {}", err),
                        _ => log_info!("[Login] {}", err),
                    }
                    set_fail_message.set(Some(err.user_message().to_string()));
                }
            }
            draft.update(LoginDraft::clear_password);
        });
    };

    view! {
        <div class="flex flex-1 items-center justify-center p-10 min-h-[630px]">
            <div class="card w-full max-w-xl bg-base-100">
                <div class="card-body">
                    <h1 class="text-2xl font-bold">"Welcome back"</h1>
                    <p class="text-base-content/70">"Have you been staying green?"</p>
                    <LoginForm
                        draft=draft
                        fail_message=fail_message
                        pending=pending
                        on_submit=on_submit
                    />
                </div>
            </div>
        </div>
    }
}
