pub mod response;
pub mod rpc;
