//! 公共外壳：导航栏 + 内容 + 页脚

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let is_authenticated = use_auth().is_authenticated_signal();

    view! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <nav class="navbar bg-base-100 shadow-sm px-4 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"EcoHabit"</Link>
                <div class="flex-1 flex gap-1">
                    <Link to=AppRoute::Locations class="btn btn-ghost btn-sm">"Locations"</Link>
                    <Link to=AppRoute::Guides class="btn btn-ghost btn-sm">"Guides"</Link>
                    <Link to=AppRoute::About class="btn btn-ghost btn-sm">"About"</Link>
                </div>
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| view! {
                        <Link to=AppRoute::Login class="btn btn-primary btn-sm">"Sign In"</Link>
                    }
                >
                    <Link to=AppRoute::Profile class="btn btn-ghost btn-sm">"Profile"</Link>
                    <Link to=AppRoute::Logout class="btn btn-outline btn-sm">"Sign Out"</Link>
                </Show>
            </nav>

            <main class="flex-1 container mx-auto">{children()}</main>

            <footer class="footer footer-center p-4 bg-base-100 text-base-content/60">
                <Link to=AppRoute::Terms class="link link-hover">"Terms & Conditions"</Link>
            </footer>
        </div>
    }
}
