//! Shared utilities for integration testing.

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a mock JSON-RPC node on an ephemeral port.
///
/// `handler` receives the method name and params and returns the `result`
/// value, or `Err((code, message))` for a JSON-RPC error reply.
pub async fn start_mock_node<F>(handler: F) -> SocketAddr
where
    F: Fn(&str, &Value) -> Result<Value, (i64, String)> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_json_body(&mut socket).await else {
                            return;
                        };
                        let method = request["method"].as_str().unwrap_or_default();
                        let params = request.get("params").cloned().unwrap_or(Value::Null);
                        let reply = match handler(method, &params) {
                            Ok(result) => json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "result": result,
                            }),
                            Err((code, message)) => json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "error": { "code": code, "message": message },
                            }),
                        };

                        let body = reply.to_string();
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read one HTTP request and parse its body as JSON.
async fn read_json_body(socket: &mut TcpStream) -> Option<Value> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    serde_json::from_slice(&buf[header_end..header_end + content_length]).ok()
}

/// A mined receipt in node JSON form.
pub fn receipt_json(tx_hash: &str, from: &str, to: &str, gas_used: u64) -> Value {
    json!({
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": "0x2c6a1d1f0a7b36e0a5a3a0d8d2a1d3f0c4b5e6f708192a3b4c5d6e7f80910a1b",
        "blockNumber": "0x1",
        "from": from,
        "to": to,
        "cumulativeGasUsed": format!("{:#x}", gas_used),
        "gasUsed": format!("{:#x}", gas_used),
        "effectiveGasPrice": "0x4a817c800",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "type": "0x0",
        "status": "0x1",
    })
}

/// A receipt as pre-EIP-2718 nodes report it: no `type`, no
/// `effectiveGasPrice`, and a state `root` instead of `status`.
pub fn legacy_receipt_json(tx_hash: &str, from: &str, to: &str, gas_used: u64) -> Value {
    let mut receipt = receipt_json(tx_hash, from, to, gas_used);
    if let Some(fields) = receipt.as_object_mut() {
        fields.remove("type");
        fields.remove("effectiveGasPrice");
        fields.remove("status");
        fields.insert(
            "root".to_string(),
            json!("0x2c6a1d1f0a7b36e0a5a3a0d8d2a1d3f0c4b5e6f708192a3b4c5d6e7f80910a1b"),
        );
    }
    receipt
}
