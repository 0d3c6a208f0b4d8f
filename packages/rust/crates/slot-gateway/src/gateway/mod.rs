//! Gateway namespace: HTTP entrypoint.

mod http;

pub use http::{
    DEFAULT_BIND, DrawResponse, ErrorResponse, GatewayHealthResponse, GatewayState, OddsResponse,
    PrizesResponse, ReplaceResponse, extract_candidate, router, run_http,
};
