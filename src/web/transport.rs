use std::future::Future;

use gloo_net::http::{Request, RequestBuilder};

use crate::net::{ApiRequest, ApiResponse, Method, Transport, TransportError};

/// `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

impl Transport for GlooTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        async move {
            let mut builder = builder(request.method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Build(e.to_string()))?;

            let response = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            let status_text = response.status_text();
            let headers = response.headers().entries().collect();
            let body = response.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse { status, status_text, headers, body })
        }
    }
}
