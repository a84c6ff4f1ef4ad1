// One-time server bootstrap shared by every integration test in this binary.
use std::{
    // `Arc` lets the server thread and the test thread share the URL slot.
    sync::{Arc, OnceLock},
    // Polling intervals while waiting for the listener to come up.
    time::Duration,
};

use duo_server::domain::entities::Game;
use duo_server::interface_adapters::state::{AppState, InMemoryStore};
use uuid::Uuid;

// Catalog entry every test can post ads against.
pub const SEEDED_GAME_ID: Uuid = Uuid::from_u128(0x6c1f_9a1e_4d2b_4c8e_9f3a_1b2c_3d4e_5f60);
pub const SEEDED_GAME_TITLE: &str = "Apex Legends";

// Base URL of the running server, written once the listener is bound.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guards the bootstrap so concurrent tests start a single server.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// In-memory store holding only the seeded game; no database needed.
fn seeded_state() -> AppState {
    let store = InMemoryStore::with_games(vec![Game {
        id: SEEDED_GAME_ID,
        title: SEEDED_GAME_TITLE.to_string(),
        banner_url: "https://cdn.example.test/apex.jpg".to_string(),
    }]);
    AppState::new(Arc::new(store))
}

// Start the server on first use and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        // Slot the server thread fills with its bound address.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Each `#[tokio::test]` owns a short-lived runtime, so the server runs on
        // a dedicated thread with its own runtime that lives for the whole binary.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Port 0 lets the OS pick a free port.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Serves until the test process exits.
                duo_server::run(listener, seeded_state())
                    .await
                    .expect("server failed");
            });
        });
        wait_until_accepting(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Block until the URL is published and the socket accepts TCP connections.
fn wait_until_accepting(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    // The raw TCP connect needs host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Roughly two seconds of retries before giving up.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
