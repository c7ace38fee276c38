//! EcoHabit 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫决策（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 认证服务客户端
//! - `components`: UI 组件层

#[macro_use]
mod logging;

mod api;
mod auth;
mod config;
mod error;
mod components {
    pub mod layout;
    pub mod login;
    pub mod logout;
    pub mod pages;
    pub mod private_route;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::auth::AuthContext;
use crate::components::layout::MainLayout;
use crate::components::login::LoginPage;
use crate::components::logout::Logout;
use crate::components::pages::{
    AboutPage, DemoPage, ErrorPage, GuidesPage, HomePage, LocationsPage, ProfilePage,
    TermsConditionPage,
};
use crate::components::private_route::PrivateRoute;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由对应的页面
fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home | AppRoute::Homepage => view! { <HomePage /> }.into_any(),
        AppRoute::Locations => view! { <LocationsPage /> }.into_any(),
        AppRoute::Guides => view! { <GuidesPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Logout => view! { <Logout /> }.into_any(),
        AppRoute::Terms => view! { <TermsConditionPage /> }.into_any(),
        AppRoute::Demo => view! { <DemoPage /> }.into_any(),
        AppRoute::NotFound => view! { <ErrorPage /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 所有页面共享 `MainLayout` 外壳。
/// 受保护页面额外包一层 `PrivateRoute`，渲染时再校验一次认证状态。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = if route.requires_auth() {
        view! { <PrivateRoute>{page_for(route)}</PrivateRoute> }.into_any()
    } else {
        page_for(route)
    };

    view! { <MainLayout>{page}</MainLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 运行时配置（API 地址）
    provide_context(AppConfig::load());

    // 2. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 3. 认证信号注入路由服务，守卫只依赖这一个标志
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
