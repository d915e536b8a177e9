use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::num::TryFromIntError;

/// Server-assigned identifier of a [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u32);

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Ids arrive from the outside as signed integers; anything a `u32` cannot hold
/// names no client.
impl TryFrom<i64> for ClientId {
    type Error = TryFromIntError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw).map(Self)
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted client record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// Creation and update both take a [`ClientInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub age: i64,
    pub comment: String,
}

impl Client {
    /// Builds a client from an id and the write payload.
    pub fn new(id: ClientId, input: ClientInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            comment: input.comment,
        }
    }

    /// The client without its id, in the shape it was written.
    pub fn to_input(&self) -> ClientInput {
        ClientInput {
            name: self.name.clone(),
            age: self.age,
            comment: self.comment.clone(),
        }
    }
}

/// Unvalidated payload for creating or replacing a client.
///
/// Missing or `null` JSON fields fall back to empty values so that an absent
/// field is reported by validation rather than rejected by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ClientInput {
    pub fn new(name: impl Into<String>, age: i64, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            comment: comment.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_decode_as_empty() {
        let input: ClientInput =
            serde_json::from_str(r#"{"name":null,"age":null,"comment":null}"#).unwrap();
        assert_eq!(input, ClientInput::default());

        let input: ClientInput = serde_json::from_str(r#"{"name":"John"}"#).unwrap();
        assert_eq!(input, ClientInput::new("John", 0, ""));
    }

    #[test]
    fn test_wrong_types_are_still_rejected() {
        assert!(serde_json::from_str::<ClientInput>(r#"{"name":12}"#).is_err());
        assert!(serde_json::from_str::<ClientInput>(r#"{"age":"old"}"#).is_err());
    }

    #[test]
    fn test_client_id_from_signed_integer() {
        assert_eq!(ClientId::try_from(7_i64), Ok(ClientId(7)));
        assert_eq!(ClientId::try_from(i64::from(u32::MAX)), Ok(ClientId(u32::MAX)));
        assert!(ClientId::try_from(-1_i64).is_err());
        assert!(ClientId::try_from(4_294_967_296_i64).is_err());
    }
}
