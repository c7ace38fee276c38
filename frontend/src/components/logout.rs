use crate::auth::{logout, use_auth};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 进入即注销，然后替换跳转到登录页
#[component]
pub fn Logout() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    Effect::new(move |_| {
        logout(&auth);
        log_info!("[Auth] signed out");
        router.redirect(AppRoute::Login);
    });

    view! {
        <div class="flex justify-center p-10">
            <span class="loading loading-spinner"></span>
        </div>
    }
}
