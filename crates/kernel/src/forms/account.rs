//! Sign-in, token and account maintenance payloads.

use serde::{Deserialize, Serialize};

use crate::validator::{EMAIL_RX, Validator, Verify};

const MIN_PASSWORD_LEN: usize = 6;

/// Credentials posted by the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

impl Verify for SignInRequest {
    fn verify(&self, v: &mut Validator) {
        let req = self.normalized();
        v.require("email", Some(req.email.as_str()), Some("邮箱不能为空"));
        let well_formed = v.matches(Some(req.email.as_str()), &EMAIL_RX);
        v.check(well_formed, "email", "邮箱地址格式不正确");
        v.require("password", Some(req.password.as_str()), Some("密码不能为空"));
        v.min_len(
            MIN_PASSWORD_LEN,
            "password",
            Some(req.password.as_str()),
            Some("密码长度必须>=6"),
        );
    }
}

/// Password change posted from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub id: i64,
    pub password: String,
    pub new_password: String,
    pub again_new_password: String,
}

impl ResetPasswordRequest {
    /// Copy with surrounding whitespace removed from every password field.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            password: self.password.trim().to_string(),
            new_password: self.new_password.trim().to_string(),
            again_new_password: self.again_new_password.trim().to_string(),
        }
    }
}

impl Verify for ResetPasswordRequest {
    fn verify(&self, v: &mut Validator) {
        let req = self.normalized();
        v.check(req.id >= 0, "id", "请提供用户id");
        v.require("password", Some(req.password.as_str()), Some("请输入旧密码"));
        v.require("newPassword", Some(req.new_password.as_str()), Some("请输入新密码"));
        // The confirmation shares the newPassword slot.
        v.require(
            "newPassword",
            Some(req.again_new_password.as_str()),
            Some("请输入确认密码"),
        );
        v.check(
            req.new_password == req.again_new_password,
            "newPassword",
            "两次密码不一致",
        );
        v.min_len(
            MIN_PASSWORD_LEN,
            "newPassword",
            Some(req.new_password.as_str()),
            Some("密码长度必须>=6"),
        );
    }
}

/// Profile fields editable by the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub nickname: String,
    pub avatar: String,
}

impl UpdateProfileRequest {
    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            nickname: self.nickname.trim().to_string(),
            avatar: self.avatar.trim().to_string(),
        }
    }
}

impl Verify for UpdateProfileRequest {
    fn verify(&self, v: &mut Validator) {
        let req = self.normalized();
        if req.nickname.is_empty() && req.avatar.is_empty() {
            v.add_error("nickname", "请填写用户昵称或头像地址");
        }
    }
}

/// Refresh token exchanged for a new access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenewAccessTokenRequest {
    pub refresh_token: String,
}

impl Verify for RenewAccessTokenRequest {
    fn verify(&self, v: &mut Validator) {
        v.check(!self.refresh_token.is_empty(), "refreshToken", "请提供令牌");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_accepts_trimmed_credentials() {
        let req = SignInRequest {
            email: "  admin@example.com ".to_string(),
            password: " secret1 ".to_string(),
        };
        assert!(Validator::do_verify(&req).is_valid());
    }

    #[test]
    fn sign_in_reports_first_error_per_field() {
        let req = SignInRequest {
            email: "   ".to_string(),
            password: "abc".to_string(),
        };
        let v = Validator::do_verify(&req);
        assert_eq!(v.error_by(Some("email")), "邮箱不能为空");
        assert_eq!(v.error_by(Some("password")), "密码长度必须>=6");
        assert_eq!(v.error_by(None), "邮箱不能为空");
    }

    #[test]
    fn sign_in_rejects_malformed_email() {
        let req = SignInRequest {
            email: "not-an-email".to_string(),
            password: "secret12".to_string(),
        };
        let v = Validator::do_verify(&req);
        assert_eq!(v.error_by(Some("email")), "邮箱地址格式不正确");
        assert_eq!(v.error_by(Some("password")), "");
    }

    #[test]
    fn reset_password_mismatch() {
        let req = ResetPasswordRequest {
            id: 1,
            password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            again_new_password: "other-secret".to_string(),
        };
        let v = Validator::do_verify(&req);
        assert_eq!(v.errors().count(), 1);
        assert_eq!(v.error_by(Some("newPassword")), "两次密码不一致");
    }

    #[test]
    fn reset_password_negative_id() {
        let req = ResetPasswordRequest {
            id: -1,
            password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            again_new_password: "new-secret".to_string(),
        };
        let v = Validator::do_verify(&req);
        assert_eq!(v.error_by(Some("id")), "请提供用户id");
    }

    #[test]
    fn update_profile_needs_one_field() {
        let v = Validator::do_verify(&UpdateProfileRequest::default());
        assert_eq!(v.error_by(Some("nickname")), "请填写用户昵称或头像地址");

        let req = UpdateProfileRequest {
            nickname: String::new(),
            avatar: "https://cdn.example.com/a.png".to_string(),
        };
        assert!(Validator::do_verify(&req).is_valid());
    }

    #[test]
    fn renew_access_token_requires_token() {
        let req: RenewAccessTokenRequest = serde_json::from_str("{}").unwrap();
        let v = Validator::do_verify(&req);
        assert_eq!(v.error_by(Some("refreshToken")), "请提供令牌");

        let req: RenewAccessTokenRequest =
            serde_json::from_str(r#"{"refreshToken": "eyJhbGciOi"}"#).unwrap();
        assert!(Validator::do_verify(&req).is_valid());
    }

    #[test]
    fn payloads_use_camel_case_keys() {
        let req: ResetPasswordRequest = serde_json::from_str(
            r#"{"id": 7, "password": "a", "newPassword": "b", "againNewPassword": "c"}"#,
        )
        .unwrap();
        assert_eq!(req.new_password, "b");
        assert_eq!(req.again_new_password, "c");
    }
}
