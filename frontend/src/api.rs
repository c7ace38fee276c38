//! 认证服务客户端

use crate::auth::SessionToken;
use crate::error::LoginError;
use crate::web::http::{FetchTransport, HttpError, HttpReply, HttpRequest, HttpTransport};
use ecohabit_shared::{
    ApiRequest, CONTENT_TYPE_JSON, HEADER_CONTENT_TYPE, LoginRequest, LoginResponse,
};

#[derive(Clone, Debug)]
pub struct EcoHabitApi<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl EcoHabitApi<FetchTransport> {
    pub fn browser(base_url: &str) -> Self {
        Self::new(base_url, FetchTransport)
    }
}

impl<T: HttpTransport> EcoHabitApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个类型化请求，返回原始状态码与响应体
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<HttpReply, HttpError> {
        let body = serde_json_wasm::to_string(request)
            .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;

        let req = HttpRequest::new(&self.url(R::PATH), R::METHOD)
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body);

        self.transport.send(req).await
    }

    /// 用凭据换取会话令牌
    ///
    /// 只有 200 视为成功；403 与其他状态码分别映射为不同的失败。
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionToken, LoginError> {
        let reply = self.send(request).await?;

        if let Some(err) = LoginError::from_status(reply.status) {
            return Err(err);
        }

        let data: LoginResponse = reply.json()?;
        if data.token.trim().is_empty() {
            return Err(LoginError::unexpected("login succeeded without a token"));
        }
        Ok(SessionToken::new(data.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecohabit_shared::HttpMethod;
    use std::cell::RefCell;

    struct MockTransport {
        reply: Result<(u16, String), HttpError>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok((status, body.to_string())),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: HttpError) -> Self {
            Self {
                reply: Err(err),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, req: HttpRequest) -> Result<HttpReply, HttpError> {
            self.requests.borrow_mut().push(req);
            self.reply
                .clone()
                .map(|(status, body)| HttpReply { status, body })
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest::new("green@ecohabit.org", "hunter2")
    }

    #[tokio::test]
    async fn posts_credentials_as_json() {
        let api = EcoHabitApi::new(
            "https://api.ecohabit.org/",
            MockTransport::replying(200, r#"{"token":"abc"}"#),
        );
        api.login(&credentials()).await.unwrap();

        let requests = api.transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.url, "https://api.ecohabit.org/auth/login");
        assert_eq!(req.method, HttpMethod::Post);
        assert!(
            req.headers
                .iter()
                .any(|(k, v)| k == "Content-Type" && v == "application/json")
        );
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"email":"green@ecohabit.org","password":"hunter2"}"#)
        );
    }

    #[tokio::test]
    async fn ok_returns_the_token() {
        let api = EcoHabitApi::new("/api", MockTransport::replying(200, r#"{"token":"abc"}"#));
        let token = api.login(&credentials()).await.unwrap();
        assert_eq!(token, SessionToken::new("abc"));
    }

    #[tokio::test]
    async fn forbidden_is_unknown_user() {
        let api = EcoHabitApi::new("/api", MockTransport::replying(403, "Forbidden"));
        let err = api.login(&credentials()).await.unwrap_err();
        assert_eq!(err, LoginError::UserNotFound);
    }

    #[tokio::test]
    async fn unauthorized_is_bad_credentials() {
        let api = EcoHabitApi::new("/api", MockTransport::replying(401, ""));
        let err = api.login(&credentials()).await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials { status: 401 });
        assert_eq!(err.user_message(), "Username or password is incorrect");
    }

    #[tokio::test]
    async fn network_failure_is_unexpected() {
        let api = EcoHabitApi::new(
            "/api",
            MockTransport::failing(HttpError::NetworkError("TypeError: Failed to fetch".into())),
        );
        let err = api.login(&credentials()).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "An unexpected error occurred - please try again later"
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_unexpected() {
        let api = EcoHabitApi::new("/api", MockTransport::replying(200, "<html>"));
        let err = api.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, LoginError::Unexpected { .. }));
    }

    #[tokio::test]
    async fn empty_token_is_unexpected() {
        let api = EcoHabitApi::new("/api", MockTransport::replying(200, r#"{"token":""}"#));
        let err = api.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, LoginError::Unexpected { .. }));
    }
}
