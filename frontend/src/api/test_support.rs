#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use futures::channel::oneshot;
    use futures::future::{BoxFuture, FutureExt, Shared};
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        response: Option<MockResponse>,
    }

    /// A request as seen by the mock, kept for assertions.
    #[derive(Clone, Debug, PartialEq)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub body: Option<Value>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            register_mock(self.base.clone(), Arc::new(self.clone()));
            format!("{}{}", self.base, path)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = if then.unreachable {
                None
            } else {
                let response = MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                );
                Some(match then.release {
                    Some(release) => response.held(release),
                    None => response,
                })
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query: when.query,
                response,
            });
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let url = request.url();
            let path = url.path().to_string();
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let body = request
                .body()
                .and_then(|body| body.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok());

            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;
            inner.received.push(ReceivedRequest {
                method: method.clone(),
                path: path.clone(),
                query: url.query().map(str::to_string),
                body,
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == *method
                        && route.path == path
                        && route.query.iter().all(|pair| pairs.contains(pair))
                })
                .cloned();

            match route {
                Some(Route {
                    response: Some(response),
                    ..
                }) => Ok(response),
                Some(_) => Err(ApiError::request_failed(format!(
                    "connection refused: {} {}",
                    method, path
                ))),
                None => Err(ApiError::unknown(format!("No mock for {} {}", method, path))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn query_param(&mut self, key: &str, value: &str) -> &mut Self {
            self.query.push((key.to_string(), value.to_string()));
            self
        }
    }

    /// Keeps matching responses in flight until [`Hold::release`] is called.
    pub struct Hold {
        sender: Mutex<Option<oneshot::Sender<()>>>,
        released: Shared<BoxFuture<'static, ()>>,
    }

    impl Hold {
        pub fn new() -> Self {
            let (sender, receiver) = oneshot::channel::<()>();
            Self {
                sender: Mutex::new(Some(sender)),
                released: async move {
                    let _ = receiver.await;
                }
                .boxed()
                .shared(),
            }
        }

        pub fn release(&self) {
            if let Some(sender) = self.sender.lock().expect("hold lock").take() {
                let _ = sender.send(());
            }
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        unreachable: bool,
        release: Option<Shared<BoxFuture<'static, ()>>>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn held_until(&mut self, hold: &Hold) -> &mut Self {
            self.release = Some(hold.released.clone());
            self
        }

        /// Fails the request the way an unreachable backend would.
        pub fn unreachable(&mut self) -> &mut Self {
            self.unreachable = true;
            self
        }
    }
}
