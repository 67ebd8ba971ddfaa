use crate::models::Links;
use uuid::Uuid;

/// Hypermedia links for composite responses about one user.
pub fn for_user(user_id: Uuid) -> Links {
    let mut links = Links::new();
    links.insert("self".to_string(), format!("/user-preferences/{}", user_id));
    links.insert("user".to_string(), format!("/users/{}", user_id));
    links.insert(
        "preferences".to_string(),
        format!("/users/{}/preferences", user_id),
    );
    links
}

/// Entrypoint links advertised from the service root.
pub fn entrypoints() -> Links {
    let mut links = Links::new();
    links.insert("self".to_string(), "/".to_string());
    links.insert("user-preferences".to_string(), "/user-preferences".to_string());
    links.insert("health".to_string(), "/health".to_string());
    links
}
