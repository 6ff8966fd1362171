use serde::{Serialize, Deserialize};
use serde_json::Value;
use chrono::{DateTime, Utc};

use crate::core::record::{self, Id, Record, provided};
use crate::core::{CoreError, User};

pub const DEFAULT_CONTENIDO: &str = "Mensaje vacío";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: Id,
    #[serde(rename = "usuarioId")]
    pub usuario_id: Id,
    pub contenido: String,
    /// Creation time, never changed afterwards.
    #[serde(with = "timestamp")]
    pub fecha: DateTime<Utc>
}

impl Record for Message {
    const COLLECTION: &'static str = "mensajes";

    fn id(&self) -> Id {
        self.id
    }
}

/// Fields accepted when creating a message.
/// `usuarioId` is taken as any JSON value; anything that is not the number
/// of an existing user is refused by [`NewMessage::into_message`].
#[derive(Debug, Default, Deserialize)]
pub struct NewMessage {
    #[serde(rename = "usuarioId")]
    pub usuario_id: Option<Value>,
    pub contenido: Option<String>
}

impl NewMessage {
    /// Builds the message, provided its author is one of `users`.
    pub fn into_message(self, id: Id, users: &[User], fecha: DateTime<Utc>) -> Result<Message, CoreError> {
        let usuario_id = self.usuario_id
            .as_ref()
            .and_then(numeric_id)
            .filter(|usuario_id| record::find(users, *usuario_id).is_some())
            .ok_or(CoreError::InvalidUser)?;

        return Ok(Message {
            id,
            usuario_id,
            contenido: self.contenido.unwrap_or_else(|| DEFAULT_CONTENIDO.to_owned()),
            fecha
        });
    }
}

/// Integral JSON numbers only, so `1` and `1.0` name the same user but `"1"` names none.
fn numeric_id(value: &Value) -> Option<Id> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(id) = number.as_i64() {
        return Some(id);
    }
    let float = number.as_f64()?;
    if float.fract() == 0.0 && float >= Id::MIN as f64 && float < Id::MAX as f64 {
        return Some(float as Id);
    }
    return None;
}

/// Fields accepted when updating a message. Only `contenido` is mutable.
#[derive(Debug, Default, Deserialize)]
pub struct MessageChanges {
    pub contenido: Option<String>
}

impl MessageChanges {
    pub fn apply_to(self, message: &mut Message) {
        if let Some(contenido) = provided(self.contenido) {
            message.contenido = contenido;
        }
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(fecha: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&fecha.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|fecha| fecha.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::{Message, NewMessage, MessageChanges};
    use crate::core::{CoreError, User};

    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn users() -> Vec<User> {
        vec![User {
            id: 1,
            nombre: "Ana".to_owned(),
            email: "ana@ejemplo.com".to_owned(),
            status: "activado".to_owned()
        }]
    }

    #[fixture]
    fn fecha() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[rstest]
    fn create_for_known_user(users: Vec<User>, fecha: DateTime<Utc>) {
        let payload: NewMessage = serde_json::from_value(json!({"usuarioId": 1, "contenido": "hola"})).unwrap();
        let message = payload.into_message(1, &users, fecha).unwrap();
        assert_eq!(serde_json::to_value(&message).unwrap(), json!({
            "id": 1,
            "usuarioId": 1,
            "contenido": "hola",
            "fecha": "2024-05-01T10:00:00.000Z"
        }));
    }

    #[rstest]
    fn contenido_defaults(users: Vec<User>, fecha: DateTime<Utc>) {
        let payload: NewMessage = serde_json::from_value(json!({"usuarioId": 1})).unwrap();
        let message = payload.into_message(4, &users, fecha).unwrap();
        assert_eq!(message.contenido, "Mensaje vacío");
        assert_eq!(message.id, 4);
    }

    #[rstest]
    #[case(json!({"usuarioId": 1.0}))]
    #[case(json!({"usuarioId": 1}))]
    fn integral_numbers_name_the_user(users: Vec<User>, fecha: DateTime<Utc>, #[case] payload: serde_json::Value) {
        let payload: NewMessage = serde_json::from_value(payload).unwrap();
        let message = payload.into_message(1, &users, fecha).unwrap();
        assert_eq!(message.usuario_id, 1);
        assert_eq!(serde_json::to_value(&message).unwrap()["usuarioId"], json!(1));
    }

    #[rstest]
    #[case(json!({"usuarioId": 2}))]
    #[case(json!({"usuarioId": "1"}))]
    #[case(json!({"usuarioId": true}))]
    #[case(json!({"usuarioId": 1.5}))]
    #[case(json!({"usuarioId": null}))]
    #[case(json!({"contenido": "sin autor"}))]
    #[case(json!({}))]
    fn unknown_or_missing_user(users: Vec<User>, fecha: DateTime<Utc>, #[case] payload: serde_json::Value) {
        let payload: NewMessage = serde_json::from_value(payload).unwrap();
        let result = payload.into_message(1, &users, fecha);
        assert!(matches!(result, Err(CoreError::InvalidUser)));
    }

    #[rstest]
    fn update_ignores_empty_contenido(users: Vec<User>, fecha: DateTime<Utc>) {
        let payload = NewMessage { usuario_id: Some(json!(1)), contenido: Some("hola".to_owned()) };
        let mut message = payload.into_message(1, &users, fecha).unwrap();

        MessageChanges { contenido: Some(String::new()) }.apply_to(&mut message);
        assert_eq!(message.contenido, "hola");

        MessageChanges { contenido: Some("adiós".to_owned()) }.apply_to(&mut message);
        assert_eq!(message.contenido, "adiós");
        assert_eq!(message.fecha, fecha);
    }

    #[test]
    fn stored_timestamps_are_read_back() {
        let stored = json!({
            "id": 2, "usuarioId": 1, "contenido": "hola", "fecha": "2024-05-01T10:00:00.123Z"
        });
        let message: Message = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(message.fecha.timestamp_subsec_millis(), 123);
        assert_eq!(serde_json::to_value(&message).unwrap(), stored);
    }
}
