use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde::Serialize;
use serde_json::json;

pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    // Serve `obj` for every GET of `path`; polling helpers will hit this more than once
    pub fn handle_get<T: Serialize + 'static>(&mut self, path: String, obj: T) -> &mut Self {
        self.handle(move |when, then| {
            when.method(GET).path(&path);
            then.json_body_obj(&obj);
        })
    }

    pub fn handle_list(&mut self, path: String, list: serde_json::Value) -> &mut Self {
        self.handle(move |when, then| {
            when.method(GET).path(&path);
            then.json_body(list.clone());
        })
    }

    // The default `assert` checks that each mock was hit exactly once, which isn't true for the
    // requests a polling loop makes
    pub fn assert_hits_at_least(&self, min: usize) {
        for id in &self.mock_ids {
            let hits = Mock::new(*id, &self.server).hits();
            println!("mock {id} received {hits} request(s)");
            assert!(hits >= min, "mock {id} received {hits} request(s), expected at least {min}");
        }
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // Print all unmatched/unhandled requests for easier debugging;
        // this has to go last so that the other mock rules have a chance
        // to match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let config = kube::Config::new(builder.url());
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn status_not_found() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "reason": "NotFound",
      "code": 404
    })
}

pub fn list_body<T: Serialize>(api_version: &str, kind: &str, items: &[T]) -> serde_json::Value {
    json!({
        "apiVersion": api_version,
        "kind": format!("{kind}List"),
        "metadata": {"resourceVersion": "1"},
        "items": items,
    })
}

pub fn smi_split_v1alpha1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "split.smi-spec.io/v1alpha1",
        "resources": [
            {
                "name": "trafficsplits",
                "singularName": "trafficsplit",
                "namespaced": true,
                "kind": "TrafficSplit",
                "verbs": ["delete","deletecollection","get","list","patch","create","update","watch"],
                "shortNames": ["ts"],
            },
        ],
    })
}
