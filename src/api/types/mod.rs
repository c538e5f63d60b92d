mod event;
mod rpc;

pub use event::*;
pub use rpc::*;
