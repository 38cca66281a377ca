//! Authentication Module
//!
//! JWT 令牌服务、登录口令哈希和认证中间件。

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
pub use middleware::{require_admin, require_auth};
pub use password::{hash_password, verify_password};
