//! [`ActorEntity`] implementation for [`Client`].

use crate::client_actor::ClientError;
use crate::model::{Client, ClientId, ClientInput};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientInput;
    type Update = ClientInput;
    type Context = ();
    type Error = ClientError;

    fn from_create_params(id: ClientId, params: ClientInput) -> Result<Self, Self::Error> {
        Ok(Client::new(id, params))
    }

    /// Replaces every field; the id is kept.
    async fn on_update(&mut self, update: ClientInput, _ctx: &()) -> Result<(), Self::Error> {
        self.name = update.name;
        self.age = update.age;
        self.comment = update.comment;
        Ok(())
    }
}
