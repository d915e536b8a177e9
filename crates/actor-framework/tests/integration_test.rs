use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug)]
enum TicketUpdate {
    Retitle(String),
    Close,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("ticket {0} is closed")]
    Closed(u32),
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: params.title,
            closed: false,
        })
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {
            TicketUpdate::Retitle(title) => {
                // Mutate first so a rejected update proves the actor discards partial changes.
                self.title = title;
                if self.closed {
                    return Err(TicketError::Closed(self.id));
                }
            }
            TicketUpdate::Close => self.closed = true,
        }
        Ok(())
    }
}

fn create(title: &str) -> TicketCreate {
    TicketCreate {
        title: title.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id = client.create(create("printer on fire")).await.unwrap();
    assert_eq!(id, 1);

    // 2. Update
    let updated = client
        .update(id, TicketUpdate::Retitle("printer smoking".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "printer smoking");

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored, updated);

    // 3. Delete
    assert!(client.delete(id).await.unwrap());
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_entities_are_answers_not_errors() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.get(42).await.unwrap().is_none());
    assert!(client.update(42, TicketUpdate::Close).await.unwrap().is_none());
    assert!(!client.delete(42).await.unwrap());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_keeps_creation_order_and_ids_are_not_reused() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.create(create("a")).await.unwrap();
    let second = client.create(create("b")).await.unwrap();
    let third = client.create(create("c")).await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    assert!(client.delete(third).await.unwrap());
    let fourth = client.create(create("d")).await.unwrap();
    assert_eq!(fourth, 4);

    let titles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["a", "b", "d"]);
}

#[tokio::test]
async fn test_rejected_hooks_surface_as_entity_errors() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(create("")).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());

    let id = client.create(create("stuck")).await.unwrap();
    client.update(id, TicketUpdate::Close).await.unwrap();

    let result = client
        .update(id, TicketUpdate::Retitle("unstuck".into()))
        .await;
    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert_eq!(e.to_string(), format!("ticket {id} is closed"))
        }
        other => panic!("expected entity error, got {other:?}"),
    }

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "stuck");
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
