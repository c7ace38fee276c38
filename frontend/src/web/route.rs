//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、它们的属性以及唯一的守卫决策函数。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 旧首页地址，已认证时转到 `/`
    Homepage,
    /// 回收点 (需要认证)
    Locations,
    /// 指南 (需要认证)
    Guides,
    About,
    /// 个人资料 (需要认证)
    Profile,
    Login,
    /// 注销后转到登录页
    Logout,
    Terms,
    Demo,
    /// 页面未找到
    NotFound,
}

/// 守卫决策结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// 最终应渲染的路由
    pub route: AppRoute,
    /// 是否偏离了请求的目标
    pub redirected: bool,
}

/// History 写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

impl Resolution {
    /// 被守卫改写的导航一律替换历史，后退时不会再撞上守卫
    pub fn history_mode(&self, use_push: bool) -> HistoryMode {
        if use_push && !self.redirected {
            HistoryMode::Push
        } else {
            HistoryMode::Replace
        }
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略大小写、结尾的 `/`、查询串和片段。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/').to_ascii_lowercase();

        match path.as_str() {
            "" => Self::Home,
            "/homepage" => Self::Homepage,
            "/locations" => Self::Locations,
            "/guides" => Self::Guides,
            "/about" => Self::About,
            "/profile" => Self::Profile,
            "/login" => Self::Login,
            "/logout" => Self::Logout,
            "/terms" => Self::Terms,
            "/demo" => Self::Demo,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Homepage => "/homepage",
            Self::Locations => "/locations",
            Self::Guides => "/guides",
            Self::About => "/about",
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Logout => "/logout",
            Self::Terms => "/terms",
            Self::Demo => "/demo",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Homepage | Self::Locations | Self::Guides | Self::Profile
        )
    }

    /// 定义已认证用户是否应该离开此路由
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Homepage)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取已认证用户离开登录页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }

    /// 守卫决策：给定认证状态，计算导航到 `self` 时实际应渲染的路由
    pub fn resolve(self, is_authenticated: bool) -> Resolution {
        let route = if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::auth_success_redirect()
        } else {
            self
        };

        Resolution {
            route,
            redirected: route != self,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
