//! HTTP transport and request payload handling.
mod payload;
mod transport;


pub use payload::{load_payload, resolve_payload};
pub use transport::{
    ClientSettings, OutboundRequest, ReqwestTransport, ReqwestTransportFactory, Transport,
    TransportFactory,
};
