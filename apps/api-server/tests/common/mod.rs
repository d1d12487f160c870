//! Shared helpers for the end-to-end suites: a server bound to an ephemeral
//! port and a generator for random blog posts.

#![allow(dead_code)]

use std::net::TcpListener;

use blog_core::BlogPostStore;
use rand::distributions::Alphanumeric;
use rand::{Rng, seq::SliceRandom};
use reqwest::Response;
use serde_json::{Value, json};

use api_server::startup;
use api_server::state::AppState;

pub struct TestApp {
    pub address: String,
    pub store: BlogPostStore,
    pub client: reqwest::Client,
}

/// Start the full server (middleware included) on 127.0.0.1:0 with an
/// in-memory store. Must run inside an actix system.
pub fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let state = AppState::in_memory();
    let store = state.blog_posts.clone();

    let server = startup::run(listener, state).expect("Failed to build server");
    actix_rt::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        store,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn list_posts(&self) -> Response {
        self.client
            .get(self.url("/blogposts"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_post(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/blogposts/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn create_post(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/blogposts"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn update_post(&self, id: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/blogposts/{id}")))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_post(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/blogposts/{id}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create `n` random posts through the API and return the created bodies.
    pub async fn seed(&self, n: usize) -> Vec<Value> {
        let mut created = Vec::with_capacity(n);
        for _ in 0..n {
            let res = self.create_post(&fake_post()).await;
            assert_eq!(res.status().as_u16(), 201);
            created.push(res.json().await.expect("created post body"));
        }
        created
    }
}

fn random_word(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..10);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn random_words(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| random_word(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random, valid `{title, author, content}` body.
pub fn fake_post() -> Value {
    const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Barbara", "Edsger", "Margaret"];
    const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Hamilton"];

    let mut rng = rand::thread_rng();
    let author = format!(
        "{} {}",
        FIRST_NAMES.choose(&mut rng).unwrap(),
        LAST_NAMES.choose(&mut rng).unwrap()
    );

    json!({
        "title": random_words(&mut rng, 4),
        "author": author,
        "content": random_words(&mut rng, 30),
    })
}
