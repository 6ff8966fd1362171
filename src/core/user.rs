use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::record::{Id, Record, provided};

pub const DEFAULT_NOMBRE: &str = "Usuario Desconocido";
pub const DEFAULT_EMAIL: &str = "sin-email@ejemplo.com";
pub const DEFAULT_STATUS: &str = "activado";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub nombre: String,
    pub email: String,
    pub status: String
}

impl Record for User {
    const COLLECTION: &'static str = "usuarios";

    fn id(&self) -> Id {
        self.id
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.nombre, self.email)
    }
}

/// Fields accepted when creating a user. Absent fields take their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct NewUser {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>
}

impl NewUser {
    pub fn into_user(self, id: Id) -> User {
        User {
            id,
            nombre: self.nombre.unwrap_or_else(|| DEFAULT_NOMBRE.to_owned()),
            email: self.email.unwrap_or_else(|| DEFAULT_EMAIL.to_owned()),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned())
        }
    }
}

/// Fields accepted when updating a user. Only `nombre` and `email` are mutable.
#[derive(Debug, Default, Deserialize)]
pub struct UserChanges {
    pub nombre: Option<String>,
    pub email: Option<String>
}

impl UserChanges {
    pub fn apply_to(self, user: &mut User) {
        if let Some(nombre) = provided(self.nombre) {
            user.nombre = nombre;
        }
        if let Some(email) = provided(self.email) {
            user.email = email;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{User, NewUser, UserChanges};

    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn ana() -> User {
        User {
            id: 3,
            nombre: "Ana".to_owned(),
            email: "ana@ejemplo.com".to_owned(),
            status: "activado".to_owned()
        }
    }

    #[test]
    fn defaults_fill_empty_payload() {
        let payload: NewUser = serde_json::from_value(json!({})).unwrap();
        let user = payload.into_user(1);
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({
            "id": 1,
            "nombre": "Usuario Desconocido",
            "email": "sin-email@ejemplo.com",
            "status": "activado"
        }));
    }

    #[test]
    fn submitted_fields_are_kept() {
        let payload: NewUser = serde_json::from_value(json!({
            "nombre": "Luis", "status": "desactivado", "extra": true
        })).unwrap();
        let user = payload.into_user(2);
        assert_eq!(user.nombre, "Luis");
        assert_eq!(user.email, "sin-email@ejemplo.com");
        assert_eq!(user.status, "desactivado");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let parsed = serde_json::from_value::<NewUser>(json!({"nombre": 5}));
        assert!(parsed.is_err());
    }

    #[rstest]
    fn update_replaces_given_fields(mut ana: User) {
        let changes: UserChanges = serde_json::from_value(json!({"email": "ana@nuevo.com"})).unwrap();
        changes.apply_to(&mut ana);
        assert_eq!(ana.nombre, "Ana");
        assert_eq!(ana.email, "ana@nuevo.com");
    }

    #[rstest]
    fn update_ignores_empty_strings(mut ana: User) {
        let original = ana.clone();
        let changes: UserChanges = serde_json::from_value(json!({"nombre": "", "email": null})).unwrap();
        changes.apply_to(&mut ana);
        assert_eq!(ana, original);
    }

    #[rstest]
    fn update_never_touches_status(mut ana: User) {
        let changes: UserChanges = serde_json::from_value(json!({"status": "desactivado"})).unwrap();
        changes.apply_to(&mut ana);
        assert_eq!(ana.status, "activado");
    }

    #[rstest]
    fn can_print(ana: User) {
        assert_eq!(ana.to_string(), "Ana <ana@ejemplo.com>");
    }
}
