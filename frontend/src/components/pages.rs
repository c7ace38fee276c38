//! 页面组件
//!
//! 内容占位，布局与样式不在本仓库范围内。

use leptos::prelude::*;

#[component]
fn Page(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="p-8">
            <h1 class="text-3xl font-bold mb-4">{title}</h1>
            {children()}
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Page title="EcoHabit">
            <p>"Small habits, greener planet."</p>
        </Page>
    }
}

#[component]
pub fn LocationsPage() -> impl IntoView {
    view! {
        <Page title="Locations">
            <p>"Recycling and drop-off points near you."</p>
        </Page>
    }
}

#[component]
pub fn GuidesPage() -> impl IntoView {
    view! {
        <Page title="Guides">
            <p>"How to sort, reuse and reduce."</p>
        </Page>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Page title="About">
            <p>"About the EcoHabit project."</p>
        </Page>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Page title="Profile">
            <p>"Your account."</p>
        </Page>
    }
}

#[component]
pub fn TermsConditionPage() -> impl IntoView {
    view! {
        <Page title="Terms & Conditions">
            <p>"Terms of use."</p>
        </Page>
    }
}

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Page title="Demo">
            <p>"Component playground."</p>
        </Page>
    }
}

/// 未匹配的路径
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}
