//! Backend selection shared by configuration, transports and the CLI.

mod transport_kind;

pub use transport_kind::TransportKind;
