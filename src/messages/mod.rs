use tokio::sync::oneshot;

/// Reply channel carried by every store request.
pub type Response<T> = oneshot::Sender<T>;

/// Typed messages understood by the store actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest<T> {
    /// Appends an item; replies with the new item count.
    Add {
        item: T,
        respond_to: Response<usize>,
    },
    /// One listing line per item.
    List {
        respond_to: Response<Vec<String>>,
    },
    /// Every display line of every item.
    Display {
        respond_to: Response<Vec<String>>,
    },
    /// Snapshot of the stored items.
    GetAll {
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Shutdown,
}
