//! 登录表单草稿
//!
//! 每次按键更新；提交结束后清空密码，保留邮箱。

use ecohabit_shared::LoginRequest;

/// 可编辑的输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    /// “保持登录”勾选状态，决定是否记住邮箱
    pub remember: bool,
}

impl LoginDraft {
    /// 用上次记住的邮箱预填草稿
    pub fn prefilled(email: Option<String>) -> Self {
        match email {
            Some(email) => Self {
                email,
                remember: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest::new(self.email.trim(), self.password.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_update_independently() {
        let mut draft = LoginDraft::default();
        draft.set_field(LoginField::Email, "a@b.org".into());
        draft.set_field(LoginField::Password, "pw".into());
        draft.set_field(LoginField::Email, "c@d.org".into());
        assert_eq!(draft.email, "c@d.org");
        assert_eq!(draft.password, "pw");
    }

    #[test]
    fn clearing_keeps_the_email() {
        let mut draft = LoginDraft::prefilled(Some("a@b.org".into()));
        draft.set_field(LoginField::Password, "pw".into());
        draft.clear_password();
        assert_eq!(draft.email, "a@b.org");
        assert!(draft.password.is_empty());
        assert!(draft.remember);
    }

    #[test]
    fn request_trims_email_but_not_password() {
        let mut draft = LoginDraft::default();
        draft.set_field(LoginField::Email, "  a@b.org ".into());
        draft.set_field(LoginField::Password, " pw ".into());
        let req = draft.to_request();
        assert_eq!(req.email, "a@b.org");
        assert_eq!(req.password, " pw ");
    }

    #[test]
    fn no_remembered_email_means_blank_draft() {
        assert_eq!(LoginDraft::prefilled(None), LoginDraft::default());
    }
}
