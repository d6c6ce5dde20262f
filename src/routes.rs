// Route definitions

use crate::handlers;
use crate::store::SharedStore;
use std::convert::Infallible;
use warp::Filter;

pub fn configure_routes(
    store: SharedStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let messages = warp::path("messages");

    // GET /messages
    let list_messages = messages
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::list_messages_handler);

    // POST /messages
    let create_message = messages
        .and(warp::path::end())
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(warp::body::stream())
        .and_then(handlers::create_message_handler);

    // GET /messages/{id}
    // The id is taken as a raw segment so a non-numeric id is a 400, not a 404
    let get_message = messages
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_message_handler);

    // DELETE /messages/{id}
    let delete_message = messages
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::delete_message_handler);

    list_messages
        .or(create_message)
        .or(get_message)
        .or(delete_message)
}

fn with_store(store: SharedStore) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}
