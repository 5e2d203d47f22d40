//! Shared fixtures for unit tests.

use crate::event::Event;

pub fn event(id: &str, category: &str, start: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        category: category.to_string(),
        start: start.to_string(),
        end: None,
        description: None,
        location: None,
        image: None,
        ticket_url: None,
    }
}

/// Serve `router` on an ephemeral local port, standing in for the remote
/// web app. Returns the base URL.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
