use serde::Serialize;

pub const JSONRPC_VERSION: &str = "2.0";
pub const TOOLS_CALL: &str = "tools/call";
pub const GET_INTERFACES: &str = "get_interfaces";

/// The probe only ever sends one request per run.
pub const REQUEST_ID: u64 = 1;

/// JSON-RPC 2.0 request envelope. Fields serialize in declaration order.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<P>
where
    P: Serialize,
{
    pub jsonrpc: String,
    pub method: String,
    pub params: P,
    pub id: u64,
}

/// Params of an MCP `tools/call` request.
#[derive(Debug, Serialize)]
pub struct ToolCallParams<A>
where
    A: Serialize,
{
    pub name: String,
    pub arguments: A,
}

#[derive(Debug, Serialize)]
pub struct DeviceArguments {
    pub device_name: String,
}

impl<P> JsonRpcRequest<P>
where
    P: Serialize,
{
    pub fn new(method: impl Into<String>, params: P, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

impl<A> JsonRpcRequest<ToolCallParams<A>>
where
    A: Serialize,
{
    pub fn tool_call(name: impl Into<String>, arguments: A, id: u64) -> Self {
        Self::new(
            TOOLS_CALL,
            ToolCallParams {
                name: name.into(),
                arguments,
            },
            id,
        )
    }
}

pub type GetInterfacesRequest = JsonRpcRequest<ToolCallParams<DeviceArguments>>;

impl GetInterfacesRequest {
    pub fn get_interfaces(device: impl Into<String>) -> Self {
        Self::tool_call(
            GET_INTERFACES,
            DeviceArguments {
                device_name: device.into(),
            },
            REQUEST_ID,
        )
    }
}
