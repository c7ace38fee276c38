//! 受保护页面的渲染期守卫
//!
//! 与路由服务读取同一个认证标志；未认证时不渲染子组件，并替换跳转到登录页。

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let is_authenticated = use_auth().is_authenticated_signal();
    let router = use_router();

    Effect::new(move |_| {
        if !is_authenticated.get() {
            router.redirect(AppRoute::auth_failure_redirect());
        }
    });

    view! {
        <Show when=move || is_authenticated.get()>
            {children()}
        </Show>
    }
}
