//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! Token 只保存在内存中。

use std::fmt;

use crate::api::EcoHabitApi;
use crate::error::LoginError;
use crate::web::LocalStorage;
use crate::web::http::HttpTransport;
use ecohabit_shared::LoginRequest;
use leptos::prelude::*;

const STORAGE_EMAIL_KEY: &str = "ecohabit_email";

/// 会话令牌
///
/// `Debug` 输出不包含令牌内容。
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 登录成功后获得的令牌
    pub token: Option<SessionToken>,
    /// 登录请求是否在途
    pub login_pending: bool,
}

impl AuthState {
    /// 所有守卫唯一读取的认证标志
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn sign_in(&mut self, token: SessionToken) {
        self.token = Some(token);
    }

    fn sign_out(&mut self) {
        self.token = None;
        self.login_pending = false;
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::is_authenticated))
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|s| s.login_pending)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 上次勾选“保持登录”时记住的邮箱
pub fn remembered_email() -> Option<String> {
    LocalStorage::get(STORAGE_EMAIL_KEY)
}

/// 记住或忘记邮箱（从不保存密码和令牌）
pub fn remember_email(email: Option<&str>) {
    match email {
        Some(email) => LocalStorage::set(STORAGE_EMAIL_KEY, email),
        None => LocalStorage::delete(STORAGE_EMAIL_KEY),
    };
}

/// 登录并保存状态 (仅内存)
///
/// 期间 `login_pending` 为 true，无论成功与否结束时复位。
pub async fn login<T: HttpTransport>(
    ctx: &AuthContext,
    api: &EcoHabitApi<T>,
    request: &LoginRequest,
) -> Result<(), LoginError> {
    ctx.set_state.update(|state| state.login_pending = true);

    let result = api.login(request).await;

    ctx.set_state.update(|state| {
        if let Ok(token) = &result {
            state.sign_in(token.clone());
        }
        state.login_pending = false;
    });

    result.map(|_| ())
}

/// 注销并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(AuthState::sign_out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::{HttpError, HttpReply, HttpRequest};

    /// 固定回复的传输层
    struct FixedTransport(Result<(u16, &'static str), HttpError>);

    #[async_trait::async_trait(?Send)]
    impl HttpTransport for FixedTransport {
        async fn send(&self, _req: HttpRequest) -> Result<HttpReply, HttpError> {
            self.0.clone().map(|(status, body)| HttpReply {
                status,
                body: body.to_string(),
            })
        }
    }

    fn setup_ctx() -> (Owner, AuthContext) {
        let owner = Owner::new();
        owner.set();
        (owner, AuthContext::new())
    }

    async fn run_login(
        reply: Result<(u16, &'static str), HttpError>,
    ) -> (AuthState, Result<(), LoginError>) {
        let (_owner, ctx) = setup_ctx();
        let api = EcoHabitApi::new("/api", FixedTransport(reply));
        let request = LoginRequest::new("green@ecohabit.org", "hunter2");
        let result = login(&ctx, &api, &request).await;
        (ctx.state.get_untracked(), result)
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_clears_pending() {
        let (state, result) = run_login(Ok((200, r#"{"token":"t-1"}"#))).await;
        assert_eq!(result, Ok(()));
        assert!(state.is_authenticated());
        assert_eq!(state.token, Some(SessionToken::new("t-1")));
        assert!(!state.login_pending);
    }

    #[tokio::test]
    async fn rejected_login_stays_signed_out() {
        for (status, expected) in [
            (403, LoginError::UserNotFound),
            (500, LoginError::InvalidCredentials { status: 500 }),
        ] {
            let (state, result) = run_login(Ok((status, ""))).await;
            assert_eq!(result, Err(expected));
            assert!(!state.is_authenticated(), "{}", status);
            assert!(!state.login_pending, "{}", status);
        }
    }

    #[tokio::test]
    async fn transport_failure_stays_signed_out() {
        let (state, result) =
            run_login(Err(HttpError::NetworkError("Failed to fetch".into()))).await;
        assert!(matches!(result, Err(LoginError::Unexpected { .. })));
        assert!(!state.is_authenticated());
        assert!(!state.login_pending);
    }

    #[tokio::test]
    async fn pending_flag_is_reset_after_a_rejection() {
        let (_owner, ctx) = setup_ctx();
        ctx.set_state.update(|s| s.login_pending = true);
        let api = EcoHabitApi::new("/api", FixedTransport(Ok((401, ""))));
        let _ = login(&ctx, &api, &LoginRequest::new("a@b.org", "x")).await;
        assert!(!ctx.state.get_untracked().login_pending);
    }

    #[test]
    fn logout_drops_the_token() {
        let (_owner, ctx) = setup_ctx();
        ctx.set_state.update(|s| s.sign_in(SessionToken::new("t-1")));
        assert!(ctx.is_authenticated_signal().get_untracked());
        logout(&ctx);
        assert!(!ctx.state.get_untracked().is_authenticated());
    }

    #[test]
    fn default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.login_pending);
    }

    #[test]
    fn sign_in_and_out_toggle_the_flag() {
        let mut state = AuthState::default();
        state.sign_in(SessionToken::new("t-1"));
        assert!(state.is_authenticated());

        state.login_pending = true;
        state.sign_out();
        assert!(!state.is_authenticated());
        assert!(!state.login_pending);
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = SessionToken::new("very-secret");
        assert_eq!(format!("{:?}", token), "SessionToken(***)");
        assert_eq!(token.as_str(), "very-secret");
    }
}
