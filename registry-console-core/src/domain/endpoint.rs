//! Backend route table.
//!
//! Every function returns the resource path for one route. The path doubles as the
//! endpoint key under which the loading tracker records in-flight calls.

use crate::domain::UserId;

/// Common prefix of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Session check (`GET`) and authentication (`POST`)
pub fn login() -> String {
    format!("{API_PREFIX}/login")
}

/// Package list
pub fn packages() -> String {
    format!("{API_PREFIX}/packages")
}

/// Package detail, owner change and package deletion
pub fn package(name: &str) -> String {
    format!("{API_PREFIX}/package/{name}/")
}

/// Version detail, hiding and version deletion
pub fn version(package: &str, version: &str) -> String {
    format!("{API_PREFIX}/package/{package}/{version}/")
}

/// User list and user creation
pub fn users() -> String {
    format!("{API_PREFIX}/users/")
}

/// User detail, modification and removal
pub fn user(id: UserId) -> String {
    format!("{API_PREFIX}/user/{id}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_routes() {
        assert_eq!(packages(), "/api/v1/packages");
        assert_eq!(package("foo"), "/api/v1/package/foo/");
        assert_eq!(version("foo", "1.0"), "/api/v1/package/foo/1.0/");
    }

    #[test]
    fn test_user_routes() {
        assert_eq!(users(), "/api/v1/users/");
        assert_eq!(user(42), "/api/v1/user/42/");
    }

    #[test]
    fn test_login_route() {
        assert_eq!(login(), "/api/v1/login");
    }
}
