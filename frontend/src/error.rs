use std::fmt;

use crate::web::http::HttpError;

// =========================================================
// 登录错误
// =========================================================

pub const MSG_USER_NOT_FOUND: &str = "User does not exist";
pub const MSG_INVALID_CREDENTIALS: &str = "Username or password is incorrect";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred - please try again later";

/// 登录失败的三种结果
///
/// 每种结果对应一条面向用户的提示，`detail` 只用于日志。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// 403: 用户不存在
    UserNotFound,
    /// 其余非 200 状态码
    InvalidCredentials { status: u16 },
    /// 网络失败或响应无法解析
    Unexpected { detail: String },
}

impl LoginError {
    /// 根据状态码判断登录是否失败，200 返回 `None`
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            403 => Some(LoginError::UserNotFound),
            status => Some(LoginError::InvalidCredentials { status }),
        }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        LoginError::Unexpected {
            detail: detail.into(),
        }
    }

    /// 展示给用户的提示文本
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::UserNotFound => MSG_USER_NOT_FOUND,
            LoginError::InvalidCredentials { .. } => MSG_INVALID_CREDENTIALS,
            LoginError::Unexpected { .. } => MSG_UNEXPECTED,
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::UserNotFound => write!(f, "login rejected (403): user does not exist"),
            LoginError::InvalidCredentials { status } => {
                write!(f, "login rejected ({}): invalid credentials", status)
            }
            LoginError::Unexpected { detail } => write!(f, "login failed: {}", detail),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<HttpError> for LoginError {
    fn from(e: HttpError) -> Self {
        LoginError::unexpected(e.to_string())
    }
}
