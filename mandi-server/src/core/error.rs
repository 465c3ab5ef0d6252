//! 统一错误处理
//!
//! 提供应用级错误类型：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResult`] - 统一结果别名
//!
//! Expected business failures (duplicate email, bad credentials,
//! insufficient stock) are error variants carrying the user-facing
//! message; nothing in this layer panics on a rule violation.

use crate::store::StoreError;

/// 应用错误枚举
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 凭证无效 |
/// | 业务逻辑错误 | 资源不存在、验证失败、规则冲突 |
/// | 系统错误 | 存储错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 ==========
    #[error("Invalid email or password")]
    /// 凭证无效（统一消息，防止枚举邮箱）
    InvalidCredentials,

    // ========== 业务逻辑错误 ==========
    #[error("{0}")]
    /// 资源不存在
    NotFound(String),

    #[error("{0}")]
    /// 资源冲突（如邮箱已注册）
    Conflict(String),

    #[error("{0}")]
    /// 字段验证失败
    Validation(String),

    #[error("{0}")]
    /// 业务规则违反（如库存不足）
    BusinessRule(String),

    // ========== 系统错误 ==========
    #[error("Storage error: {0}")]
    /// 存储层错误
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    /// 内部错误
    Internal(String),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an invalid credentials error with unified message
    /// Used to prevent email enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}
