use serde::{Deserialize, Serialize};

/// The identity the backend reports for the current session.
/// Returned by `POST /auth/login` and `GET /auth/me`; cached in
/// localStorage so a reload can render optimistically while the
/// session is re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_round_trips_backend_shape() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id": "1", "username": "admin"}"#).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.username, "admin");

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "admin");
    }
}
